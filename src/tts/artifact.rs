//! In-memory audio artifact produced by the narrator.
//!
//! The original handed audio around as a temp file written once and reopened
//! twice; this is redesigned as an owned byte buffer with two independent
//! read views (playback and download), removing filesystem lifecycle
//! concerns entirely. The artifact lives for one request and is dropped with
//! it — nothing is cached across requests.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// MIME type of every artifact the narrator currently produces.
pub const MP3_MIME: &str = "audio/mp3";

/// The binary audio output plus metadata produced by the narrator.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioArtifact {
    bytes: Vec<u8>,
    mime_type: &'static str,
    filename: String,
}

impl AudioArtifact {
    /// Wrap synthesized MP3 bytes, deriving the suggested filename from the
    /// current unix timestamp (`audiobook_<ts>.mp3`).
    pub fn mp3(bytes: Vec<u8>) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::mp3_with_timestamp(bytes, ts)
    }

    /// Wrap MP3 bytes with an explicit timestamp (deterministic construction
    /// for tests).
    pub fn mp3_with_timestamp(bytes: Vec<u8>, unix_ts: u64) -> Self {
        Self {
            bytes,
            mime_type: MP3_MIME,
            filename: format!("audiobook_{unix_ts}.mp3"),
        }
    }

    /// Read view for the playback surface.
    pub fn playback(&self) -> &[u8] {
        &self.bytes
    }

    /// Read view for the download surface. Independent of [`playback`]:
    /// either can be read any number of times in any order.
    ///
    /// [`playback`]: AudioArtifact::playback
    pub fn download(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// Suggested filename for the downloaded file.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Size of the audio payload in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the download view into `dir` under the suggested filename,
    /// creating the directory as needed. Returns the full path written.
    pub fn save_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, self.download())?;
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_follows_audiobook_timestamp_pattern() {
        let artifact = AudioArtifact::mp3_with_timestamp(vec![1, 2, 3], 1_700_000_000);
        assert_eq!(artifact.filename(), "audiobook_1700000000.mp3");
        assert_eq!(artifact.mime_type(), "audio/mp3");
    }

    #[test]
    fn playback_and_download_views_see_the_same_bytes() {
        let artifact = AudioArtifact::mp3_with_timestamp(vec![9, 8, 7, 6], 1);
        // Read both views twice each — views are independent and repeatable.
        assert_eq!(artifact.playback(), artifact.download());
        assert_eq!(artifact.playback(), &[9, 8, 7, 6]);
        assert_eq!(artifact.download(), &[9, 8, 7, 6]);
        assert_eq!(artifact.len(), 4);
    }

    #[test]
    fn current_timestamp_filename_parses_back_to_a_number() {
        let artifact = AudioArtifact::mp3(vec![0]);
        let name = artifact.filename();
        let ts = name
            .strip_prefix("audiobook_")
            .and_then(|s| s.strip_suffix(".mp3"))
            .and_then(|s| s.parse::<u64>().ok());
        assert!(ts.is_some(), "unexpected filename: {name}");
    }

    #[test]
    fn save_to_writes_download_view_to_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let artifact = AudioArtifact::mp3_with_timestamp(vec![4, 5, 6], 42);

        let path = artifact.save_to(dir.path()).expect("save");
        assert_eq!(path.file_name().unwrap(), "audiobook_42.mp3");
        assert_eq!(std::fs::read(&path).unwrap(), vec![4, 5, 6]);
    }
}
