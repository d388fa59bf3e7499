//! Platform capabilities the core cannot provide for itself.
//!
//! Each ambient capability — turning a file into embeddable image data,
//! asking for confirmation, handing a contact to a share mechanism, saving a
//! card — is a single-method trait, so every caller can be exercised with a
//! fake. The terminal implementations live here too; the binary wires them
//! in, tests swap in the ones from [`fixtures`].

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::commands::export::SharePayload;
use crate::error::{AnnuaireError, Result};

/// Converts a user-selected file into an embeddable image data string.
/// The rest of the application treats the result as opaque.
pub trait ImageEncoder {
    fn encode(&self, path: &Path) -> Result<String>;
}

/// Asks the user a yes/no question before a destructive action.
pub trait ConfirmPrompt {
    fn confirm(&self, question: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// No share mechanism on this platform; the caller must tell the user
    /// instead of failing silently.
    Unsupported,
}

/// Hands a contact payload to the platform's share mechanism.
pub trait ShareTarget {
    fn share(&self, payload: &SharePayload) -> Result<ShareOutcome>;
}

/// Saves a contact card under the given file name, returning the written path.
pub trait CardWriter {
    fn write(&self, filename: &str, contents: &str) -> Result<PathBuf>;
}

/// Reads an image file and embeds it as a `data:` URL.
pub struct FileImageEncoder;

impl ImageEncoder for FileImageEncoder {
    fn encode(&self, path: &Path) -> Result<String> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        let mime = match extension.as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("bmp") => "image/bmp",
            Some("svg") => "image/svg+xml",
            _ => {
                return Err(AnnuaireError::UnsupportedImage(
                    path.display().to_string(),
                ))
            }
        };
        let bytes = fs::read(path)?;
        Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }
}

/// Confirmation on stdin: `o`/`oui` (or `y`/`yes`) means yes, anything else no.
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, question: &str) -> bool {
        print!("{} [o/N] ", question);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(
            answer.trim().to_lowercase().as_str(),
            "o" | "oui" | "y" | "yes"
        )
    }
}

/// A terminal has no native share sheet, so this target always reports
/// [`ShareOutcome::Unsupported`] and lets the caller fall back to showing the
/// payload for manual copying.
pub struct TerminalShare;

impl ShareTarget for TerminalShare {
    fn share(&self, _payload: &SharePayload) -> Result<ShareOutcome> {
        Ok(ShareOutcome::Unsupported)
    }
}

/// Writes `.vcf` files into a fixed directory.
pub struct VcfFileWriter {
    dir: PathBuf,
}

impl VcfFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl CardWriter for VcfFileWriter {
    fn write(&self, filename: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.join(filename);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Returns a fixed data URL without touching the filesystem.
    pub struct FixedEncoder(pub String);

    impl ImageEncoder for FixedEncoder {
        fn encode(&self, _path: &Path) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    /// Fails every encoding, as an unreadable or unsupported file would.
    pub struct FailingEncoder;

    impl ImageEncoder for FailingEncoder {
        fn encode(&self, path: &Path) -> Result<String> {
            Err(AnnuaireError::UnsupportedImage(path.display().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_a_png_as_a_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let url = FileImageEncoder.encode(&path).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn extension_decides_the_mime_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.JPG");
        fs::write(&path, [0xff, 0xd8]).unwrap();

        let url = FileImageEncoder.encode(&path).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = FileImageEncoder
            .encode(Path::new("notes.txt"))
            .unwrap_err();
        assert!(matches!(err, AnnuaireError::UnsupportedImage(_)));
    }

    #[test]
    fn missing_file_surfaces_the_io_error() {
        let err = FileImageEncoder
            .encode(Path::new("/nonexistent/logo.png"))
            .unwrap_err();
        assert!(matches!(err, AnnuaireError::Io(_)));
    }

    #[test]
    fn vcf_writer_writes_under_the_given_name() {
        let dir = tempfile::tempdir().unwrap();
        let writer = VcfFileWriter::new(dir.path().to_path_buf());

        let path = writer.write("Marie Dupain.vcf", "BEGIN:VCARD").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "BEGIN:VCARD");
    }
}
