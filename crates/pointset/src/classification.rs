//! Ground-truth labels for a point of interest.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a point sits relative to the cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Filled, and all six face-neighbors are in bounds and filled.
    Internal,
    /// Filled, with at least one in-bounds empty face-neighbor.
    Boundary,
    /// Empty.
    External,
}

impl Classification {
    pub const ALL: [Classification; 3] = [Self::Internal, Self::Boundary, Self::External];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Boundary => "boundary",
            Self::External => "external",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for labels that are not one of the three lowercase names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown classification label: {:?}", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl FromStr for Classification {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}
