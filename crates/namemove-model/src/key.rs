use std::fmt;

/// A normalized lookup key.
///
/// Equality on canonical keys is the sole basis for matching a roster record
/// against a folder name. Keys are produced by the normalizer in
/// `namemove-match`; this type only guarantees ordering and display.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CanonicalKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CanonicalKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
