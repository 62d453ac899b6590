//! File-to-base64 encoding for vCard avatar payloads.
//!
//! XEP-0153 avatars travel inline inside the vCard as base64 PHOTO data,
//! accompanied by a MIME type and advertised in presence by SHA-1 hash.
//! This module turns a local file into that triple in one step.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
use sha1::{Digest, Sha1};
use thiserror::Error;
use tracing::debug;

/// Size cap for inline vCard payloads. Avatars travel in every vCard
/// response, so anything bigger than this is rejected up front.
pub const MAX_VCARD_FILE_SIZE: u64 = 16 * 1024;

/// Error type for vCard file encoding.
#[derive(Debug, Error)]
pub enum VcardError {
    #[error("file does not exist: {0}")]
    FileMissing(String),
    #[error("file is too big: {size} bytes (cap {MAX_VCARD_FILE_SIZE})")]
    FileTooLarge { size: u64 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file prepared for inline vCard transfer.
#[derive(Debug, Clone)]
pub struct EncodedFile {
    /// Standard base64 of the raw file content.
    pub base64: String,
    /// MIME type guessed from the file extension, if recognized.
    pub mime_type: Option<&'static str>,
    /// Lowercase hex SHA-1 of the raw content, as broadcast in presence.
    pub sha1_hex: String,
}

/// Read `path` and produce its base64 content, guessed MIME type, and
/// SHA-1 digest.
///
/// Fails with [`VcardError::FileMissing`] when the path is not an existing
/// regular file and [`VcardError::FileTooLarge`] when it exceeds
/// [`MAX_VCARD_FILE_SIZE`]; any other read failure propagates as I/O error.
pub fn encode_file(path: impl AsRef<Path>) -> Result<EncodedFile, VcardError> {
    let path = path.as_ref();

    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(VcardError::FileMissing(path.display().to_string()));
        }
        Err(err) => return Err(err.into()),
    };
    if !meta.is_file() {
        return Err(VcardError::FileMissing(path.display().to_string()));
    }
    if meta.len() > MAX_VCARD_FILE_SIZE {
        return Err(VcardError::FileTooLarge { size: meta.len() });
    }

    let data = fs::read(path)?;

    let mut hasher = Sha1::new();
    hasher.update(&data);
    let sha1_hex = hex::encode(hasher.finalize());

    debug!(path = %path.display(), size = data.len(), sha1 = %sha1_hex, "Encoded file for vCard transfer");

    Ok(EncodedFile {
        base64: STANDARD.encode(&data),
        mime_type: guess_mime(path),
        sha1_hex,
    })
}

/// Guess a MIME type from the file extension. Only the formats the client
/// actually sends as avatars are recognized.
fn guess_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    Some(match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "txt" => "text/plain",
        _ => return None,
    })
}
