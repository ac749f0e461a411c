use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier for a seeker.
///
/// One seeker per session is the common case, but the id keeps trace output
/// and logs unambiguous when a host runs several independent agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeekerId(pub u64);

impl SeekerId {
    pub fn stable_id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SeekerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seeker#{}", self.0)
    }
}

impl From<u64> for SeekerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
