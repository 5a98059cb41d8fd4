//! JSON snapshot codec for the element array.
//!
//! The same array shape is used for `localStorage` (compact), export files
//! (pretty-printed), and user-pasted imports. There is no version field; the
//! only validation is that the text decodes into elements.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use crate::doc::Element;

/// Error returned by the snapshot codec.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The input text is not a JSON array of elements.
    #[error("invalid element snapshot: {0}")]
    Decode(#[source] serde_json::Error),
    /// The elements could not be encoded.
    #[error("failed to encode element snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Decode a snapshot from JSON text.
///
/// # Errors
///
/// Returns [`SnapshotError::Decode`] when `raw` is not valid JSON or does not
/// match the element array shape.
pub fn decode(raw: &str) -> Result<Vec<Element>, SnapshotError> {
    serde_json::from_str(raw).map_err(SnapshotError::Decode)
}

/// Encode compactly, for storage.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] if serialization fails.
pub fn encode(elements: &[Element]) -> Result<String, SnapshotError> {
    serde_json::to_string(elements).map_err(SnapshotError::Encode)
}

/// Encode with two-space indentation, for export files.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] if serialization fails.
pub fn encode_pretty(elements: &[Element]) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(elements).map_err(SnapshotError::Encode)
}
