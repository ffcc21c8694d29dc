use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;

/// Numeric identifier for a managed object.
///
/// Ids are assigned once by the id allocator at creation time and are never
/// reused or mutated. They appear verbatim in directory names, document
/// attributes, and metadata files, so the numeric value is part of the
/// on-disk contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoId(u64);

impl MoId {
    /// Wrap a raw id value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw numeric value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MoId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for MoId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| TypeError::InvalidMoId(s.to_owned()))
    }
}
