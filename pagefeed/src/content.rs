use std::io::Read;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::ZlibDecoder;
use thiserror::Error;

/// Failure to turn a feed content blob back into text.
///
/// A decode failure is fatal for the record that carried the blob, never
/// for the whole feed.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Corrupt deflate stream: {0}")]
    Inflate(#[from] std::io::Error),
    #[error("Decompressed content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Decode a feed content blob (base64-encoded, zlib-deflated) into text.
pub fn decode_content(blob: &str) -> Result<String, DecodeError> {
    let compressed = STANDARD.decode(blob.trim())?;
    let mut decoder = ZlibDecoder::new(compressed.as_slice());
    let mut raw = Vec::new();
    decoder.read_to_end(&mut raw)?;
    Ok(String::from_utf8(raw)?)
}
