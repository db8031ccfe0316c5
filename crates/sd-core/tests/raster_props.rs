//! Property tests for the drawing and fingerprinting contracts.

use proptest::prelude::*;

use sd_core::fingerprint::{changed_pixels, fingerprint, fnv1a64};
use sd_core::raster::{Color, PixelBuffer};

const SIZE: i32 = 32;
const RED: Color = Color::new(255, 0, 0);

proptest! {
    #[test]
    fn line_always_paints_major_axis_plus_one_pixels(
        x0 in 0..SIZE, y0 in 0..SIZE, x1 in 0..SIZE, y1 in 0..SIZE,
    ) {
        let mut buf = PixelBuffer::new(SIZE as usize, SIZE as usize);
        buf.draw_line(x0, y0, x1, y1, RED);
        let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
        prop_assert_eq!(buf.painted_pixels(), expected);
    }

    #[test]
    fn rect_paints_exactly_the_clipped_intersection(
        x in -8..SIZE + 8, y in -8..SIZE + 8, w in 0i32..16, h in 0i32..16,
    ) {
        let mut buf = PixelBuffer::new(SIZE as usize, SIZE as usize);
        buf.draw_rect(x, y, w, h, RED);
        let clipped_w = (x + w).min(SIZE) - x.max(0);
        let clipped_h = (y + h).min(SIZE) - y.max(0);
        let expected = (clipped_w.max(0) * clipped_h.max(0)) as usize;
        prop_assert_eq!(buf.painted_pixels(), expected);
    }

    #[test]
    fn fingerprint_detects_any_single_pixel_write(
        x in 0i32..8, y in 0i32..8, r in 1u8..,
    ) {
        let base = PixelBuffer::new(8, 8);
        let mut touched = base.clone();
        touched.set_pixel(x, y, Color::new(r, 0, 0));
        prop_assert_ne!(fingerprint(&base), fingerprint(&touched));
        prop_assert_eq!(changed_pixels(&base, &touched), 1);
    }

    #[test]
    fn changed_pixels_is_symmetric(bytes in proptest::collection::vec(any::<u8>(), 0..96)) {
        let width = bytes.len() / 3;
        let mut a = PixelBuffer::new(width, 1);
        let b = PixelBuffer::new(width, 1);
        for (i, &byte) in bytes.iter().take(width * 3).enumerate() {
            if byte > 127 {
                a.set_pixel((i / 3) as i32, 0, Color::new(byte, 0, 0));
            }
        }
        prop_assert_eq!(changed_pixels(&a, &b), changed_pixels(&b, &a));
    }

    #[test]
    fn fnv1a64_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(fnv1a64(&bytes), fnv1a64(&bytes));
        let hex = format!("{:016x}", fnv1a64(&bytes));
        prop_assert_eq!(hex.len(), 16);
    }
}
