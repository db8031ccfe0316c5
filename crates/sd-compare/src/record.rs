//! Normalized per-frame trace records shared by every implementation.

use serde::{Deserialize, Serialize};

/// One frame of an implementation's trace, as emitted on its stdout:
/// `{"frame":0,"hash":"…","changed":0,"pose":[x,y,theta]}`.
///
/// Records are immutable once produced and arrive in strictly increasing
/// `frame` order starting at 0, one per input token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: u64,
    /// 16 lowercase hex digits: the frame's FNV-1a fingerprint.
    pub hash: String,
    /// Pixel positions that differ from the previous frame.
    pub changed: u64,
    /// World-space `[x, y, theta]`.
    pub pose: [f64; 3],
}

/// An implementation's full run over one input script.
pub type Trace = Vec<FrameRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_format_line() {
        let line = r#"{"frame":3,"hash":"00000000000000ff","changed":42,"pose":[10.0,9.5,-1.5707963267948966]}"#;
        let record: FrameRecord = serde_json::from_str(line).unwrap();
        assert_eq!(record.frame, 3);
        assert_eq!(record.hash, "00000000000000ff");
        assert_eq!(record.changed, 42);
        assert_eq!(record.pose, [10.0, 9.5, -1.5707963267948966]);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let record = FrameRecord {
            frame: 0,
            hash: "cbf29ce484222325".to_string(),
            changed: 7,
            pose: [1.0, 2.0, 0.0],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"frame\":0"));
        assert!(json.contains("\"hash\":\"cbf29ce484222325\""));
        assert!(json.contains("\"changed\":7"));
        assert!(json.contains("\"pose\":[1.0,2.0,0.0]"));
    }

    #[test]
    fn round_trips_through_json() {
        let record = FrameRecord {
            frame: 12,
            hash: "5467b0da1d106495".to_string(),
            changed: 0,
            pose: [10.0, 8.5, 0.25],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(serde_json::from_str::<FrameRecord>(&json).unwrap(), record);
    }
}
