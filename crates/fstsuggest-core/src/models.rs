use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

/// A single suggestion for a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Completion {
    #[serde(rename = "text", serialize_with = "serialize_lossy_utf8")]
    pub bytes: Vec<u8>,
    pub bucket: u8,
}

impl Completion {
    #[must_use]
    pub fn new(bytes: &[u8], bucket: u8) -> Self {
        Self {
            bytes: bytes.to_vec(),
            bucket,
        }
    }

    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.text(), self.bucket)
    }
}

fn serialize_lossy_utf8<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankingMode {
    #[default]
    WeightFirst,
    Alphabetical,
}

impl RankingMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightFirst => "weight",
            Self::Alphabetical => "alphabetical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupOptions {
    pub ranking: RankingMode,
    pub exact_first: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            ranking: RankingMode::WeightFirst,
            exact_first: true,
        }
    }
}
