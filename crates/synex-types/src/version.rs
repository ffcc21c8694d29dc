use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;

/// A `major.minor` revision label for one version of a managed object.
///
/// Ordering follows commit order: major first, then minor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionSpec {
    pub major: u32,
    pub minor: u32,
}

impl VersionSpec {
    /// Create a version spec with explicit components.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// The initial revision of every object, `1.0`.
    pub const fn initial() -> Self {
        Self { major: 1, minor: 0 }
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for VersionSpec {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TypeError::InvalidVersionSpec(s.to_owned());
        let (major, minor) = s.split_once('.').ok_or_else(bad)?;
        Ok(Self {
            major: major.parse().map_err(|_| bad())?,
            minor: minor.parse().map_err(|_| bad())?,
        })
    }
}

/// Iterator over the revision labels of an object's version history.
///
/// The minor component increments on every version; every third version the
/// major component increments and minor resets to zero. Starting from `1.0`
/// the sequence runs `1.0, 1.1, 1.2, 2.0, 2.1, 2.2, 3.0, ...` and is
/// strictly increasing.
#[derive(Clone, Debug)]
pub struct VersionSequence {
    major: u32,
    minor: u32,
    index: u64,
}

impl VersionSequence {
    /// Start a fresh sequence at `1.0`.
    pub fn new() -> Self {
        Self {
            major: 1,
            minor: 0,
            index: 0,
        }
    }
}

impl Default for VersionSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for VersionSequence {
    type Item = VersionSpec;

    fn next(&mut self) -> Option<VersionSpec> {
        if self.index > 0 && self.index % 3 == 0 {
            self.major += 1;
            self.minor = 0;
        }
        let spec = VersionSpec::new(self.major, self.minor);
        self.minor += 1;
        self.index += 1;
        Some(spec)
    }
}
