use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four behavior states. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SeekerState {
    #[default]
    Patrol,
    Chase,
    Search,
    Return,
}

impl SeekerState {
    pub fn as_str(self) -> &'static str {
        match self {
            SeekerState::Patrol => "PATROL",
            SeekerState::Chase => "CHASE",
            SeekerState::Search => "SEARCH",
            SeekerState::Return => "RETURN",
        }
    }
}

impl fmt::Display for SeekerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
