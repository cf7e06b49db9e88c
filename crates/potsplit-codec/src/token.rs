//! Token encode/decode: the three-layer pipeline and its inverse.

use std::io::{Read, Write};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use potsplit_types::constants::MAX_DECODED_BYTES;
use potsplit_types::{PotsplitError, Result, Roster};
use tracing::debug;

/// Encode a roster into a URL-path-safe token.
///
/// The empty roster encodes as the empty string — the canonical "no data"
/// token, distinct from any error.
///
/// # Errors
/// Returns [`PotsplitError::EncodingFailed`] if serialization or
/// compression fails. Neither should happen for a well-formed roster.
pub fn encode(roster: &Roster) -> Result<String> {
    if roster.is_empty() {
        return Ok(String::new());
    }

    let json = serde_json::to_vec(roster).map_err(|e| PotsplitError::EncodingFailed {
        reason: format!("JSON serialization: {e}"),
    })?;
    let compressed = compress(&json)?;
    let token = URL_SAFE.encode(&compressed);

    debug!(
        participants = roster.len(),
        json_bytes = json.len(),
        token_bytes = token.len(),
        "encoded roster token"
    );
    Ok(token)
}

/// Decode a token back into a roster.
///
/// The token arrives from a URL path and is untrusted: every layer
/// validates its input, and the decompressed payload is size-capped
/// before deserialization. The empty token decodes to the empty roster.
///
/// # Errors
/// - [`PotsplitError::TokenNotBase64`] — characters outside the URL-safe
///   alphabet, or bad length/padding
/// - [`PotsplitError::TokenNotGzip`] — payload is not a gzip stream
/// - [`PotsplitError::TokenTooLarge`] — decompressed payload exceeds
///   [`MAX_DECODED_BYTES`]
/// - [`PotsplitError::TokenNotRecord`] — decompressed payload is not a
///   valid roster record
pub fn decode(token: &str) -> Result<Roster> {
    if token.is_empty() {
        return Ok(Roster::new());
    }

    let compressed = URL_SAFE
        .decode(token)
        .map_err(|e| PotsplitError::TokenNotBase64 {
            reason: e.to_string(),
        })?;
    let json = decompress(&compressed)?;
    let roster: Roster =
        serde_json::from_slice(&json).map_err(|e| PotsplitError::TokenNotRecord {
            reason: e.to_string(),
        })?;

    debug!(participants = roster.len(), "decoded roster token");
    Ok(roster)
}

fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
    let to_encoding_failed = |e: std::io::Error| PotsplitError::EncodingFailed {
        reason: format!("gzip compression: {e}"),
    };
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).map_err(to_encoding_failed)?;
    encoder.finish().map_err(to_encoding_failed)
}

fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    // Read at most one byte past the cap so overflow is detectable
    // without inflating an unbounded stream into memory.
    let mut decoder = GzDecoder::new(compressed).take(MAX_DECODED_BYTES as u64 + 1);
    let mut json = Vec::new();
    decoder
        .read_to_end(&mut json)
        .map_err(|e| PotsplitError::TokenNotGzip {
            reason: e.to_string(),
        })?;
    if json.len() > MAX_DECODED_BYTES {
        return Err(PotsplitError::TokenTooLarge {
            limit: MAX_DECODED_BYTES,
        });
    }
    Ok(json)
}
