//! Input script loading: one control token per line.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors raised while loading an input script.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to read input script '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("input script is empty: {path}")]
    Empty { path: String },
}

/// Load the token sequence: lines are trimmed and uppercased, `#` comment
/// lines are skipped. Blank lines stay as stationary no-op tokens (a
/// frame where nothing is pressed). Zero tokens is an error.
pub fn load_input_script(path: &Path) -> Result<Vec<String>, ScriptError> {
    let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let tokens: Vec<String> = text
        .lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|token| !token.starts_with('#'))
        .collect();

    if tokens.is_empty() {
        return Err(ScriptError::Empty { path: path.display().to_string() });
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_script(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("sd_script_{name}_{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn tokens_are_trimmed_and_uppercased() {
        let path = temp_script("upper", "  w \nsd\nWA\n");
        assert_eq!(load_input_script(&path).unwrap(), ["W", "SD", "WA"]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn comment_lines_are_skipped() {
        let path = temp_script("comments", "# warm-up\nW\n# turn\nD\n");
        assert_eq!(load_input_script(&path).unwrap(), ["W", "D"]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn blank_lines_become_noop_tokens() {
        let path = temp_script("blanks", "W\n\nS\n");
        assert_eq!(load_input_script(&path).unwrap(), ["W", "", "S"]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn empty_script_is_an_error() {
        let path = temp_script("empty", "");
        let err = load_input_script(&path).unwrap_err();
        assert!(matches!(err, ScriptError::Empty { .. }));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn comment_only_script_is_an_error() {
        let path = temp_script("onlycomments", "# nothing\n# here\n");
        let err = load_input_script(&path).unwrap_err();
        assert!(matches!(err, ScriptError::Empty { .. }));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_input_script(Path::new("/nonexistent/inputs.txt")).unwrap_err();
        assert!(matches!(err, ScriptError::Io { .. }));
    }
}
