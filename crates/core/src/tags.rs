//! Tag serialization boundary.
//!
//! Notes store their tags as a single JSON-array-encoded TEXT column.
//! Encoding and decoding live here so the repository is the only place the
//! stored form is visible. Round-trip contract: for any sequence of
//! JSON-representable strings, `decode(&encode(tags)?)? == tags`, with
//! order preserved, duplicates preserved, nothing dropped.

/// Stored form of an empty tag sequence.
pub const EMPTY: &str = "[]";

/// Encode a tag sequence into its stored JSON form.
pub fn encode(tags: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tags)
}

/// Decode the stored JSON form back into a tag sequence.
pub fn decode(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(raw)
}
