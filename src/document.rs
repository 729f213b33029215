//! Uploaded-document reading.
//!
//! The original accepted a pasted string or an uploaded `.txt` file decoded
//! as UTF-8; this module covers the file half. Failures surface as UI
//! diagnostics, never as crashes.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur while loading a text document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but is not decodable as UTF-8 text.
    #[error("file is not valid UTF-8 text: {0}")]
    NotUtf8(String),
}

/// Read `path` and decode it as UTF-8 text.
pub fn load_text_file(path: &Path) -> Result<String, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| DocumentError::NotUtf8(path.display().to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_utf8_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("story.txt");
        std::fs::write(&path, "Once upon a time…").unwrap();

        let text = load_text_file(&path).unwrap();
        assert_eq!(text, "Once upon a time…");
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_text_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, DocumentError::NotFound(_)));
    }

    #[test]
    fn non_utf8_bytes_are_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xFF, 0xFE, 0x00, 0x80]).unwrap();

        let err = load_text_file(&path).unwrap_err();
        assert!(matches!(err, DocumentError::NotUtf8(_)));
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
