//! Hex codec for on-ledger token URIs.
//!
//! The ledger stores a token's URI as the hex encoding of a UTF-8 string
//! of the form `ipfs://<cid>`. All editions of one track share one URI,
//! which is what lets reconciliation group platform-held tokens by track.
//! Comparisons must be hex-case-insensitive, so they go through decoding
//! rather than string equality on the hex.

use crate::error::CoreError;

/// Build the canonical `ipfs://<cid>` URI for a metadata CID.
pub fn ipfs_uri(cid: &str) -> String {
    format!("ipfs://{cid}")
}

/// Hex-encode a URI for embedding in a mint transaction.
///
/// Uppercase, matching the ledger's own rendering of URI fields.
pub fn encode_token_uri(uri: &str) -> String {
    hex::encode_upper(uri.as_bytes())
}

/// Decode a hex token URI back to its UTF-8 string.
pub fn decode_token_uri(uri_hex: &str) -> Result<String, CoreError> {
    let bytes = hex::decode(uri_hex)
        .map_err(|e| CoreError::Validation(format!("Token URI is not valid hex: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| CoreError::Validation(format!("Token URI is not valid UTF-8: {e}")))
}

/// Compare a hex token URI against a plain URI, ignoring hex case.
///
/// Undecodable hex never matches; the caller treats such tokens as
/// foreign to the platform rather than erroring out of a bulk pass.
pub fn uri_matches(uri_hex: &str, uri: &str) -> bool {
    match decode_token_uri(uri_hex) {
        Ok(decoded) => decoded == uri,
        Err(_) => false,
    }
}
