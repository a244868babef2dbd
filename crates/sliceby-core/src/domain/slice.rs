//! Slice-by grouping results.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Identifies one slice within a slice-by.
///
/// The server sends either a text label or a JSON number. Both forms are
/// kept exactly as received: `"42"` stays a label, `42` stays an integer and
/// `1.0` stays a float. Integers beyond the `i64` range are kept as `u64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliceKey {
    /// Numeric slice key.
    Number(Number),
    /// Text slice label.
    Label(String),
}

impl SliceKey {
    /// Integer slice key.
    pub fn index(index: i64) -> Self {
        Self::Number(index.into())
    }

    /// Returns the label if this key is textual.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Label(label) => Some(label),
            Self::Number(_) => None,
        }
    }

    /// Returns the number if this key is numeric.
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(number) => Some(number),
            Self::Label(_) => None,
        }
    }

    /// Returns the key as an `i64` if it is an integer in range.
    pub fn as_index(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }
}

impl fmt::Display for SliceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl From<i64> for SliceKey {
    fn from(index: i64) -> Self {
        Self::index(index)
    }
}

impl From<Number> for SliceKey {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for SliceKey {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for SliceKey {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

/// Describes one slice-by grouping result as reported by the server.
///
/// Every field is required on the wire; a response missing any of them is
/// rejected rather than partially populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceByInfo {
    /// Opaque identifier of the slice-by resource.
    pub id: String,
    /// Grouping strategy tag (e.g. `GroupBy`, `ClusterBy`). Opaque to the client.
    #[serde(rename = "type")]
    pub kind: String,
    /// Number of slices the server reports.
    pub n_slices: usize,
    /// Slice keys in server order.
    pub slice_keys: Vec<SliceKey>,
}

impl SliceByInfo {
    /// Whether `n_slices` agrees with the number of keys received.
    ///
    /// Not checked during decoding; callers that care can check it here.
    pub fn is_consistent(&self) -> bool {
        self.n_slices == self.slice_keys.len()
    }

    /// Position of `key` within `slice_keys`, if present.
    pub fn position_of(&self, key: &SliceKey) -> Option<usize> {
        self.slice_keys.iter().position(|k| k == key)
    }
}
