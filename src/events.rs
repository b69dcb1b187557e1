//! State transitions reported by the detector.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A single state transition.
///
/// Returned by [`Threshold::update`](crate::Threshold::update) when a sample
/// crosses the band; `None` from that call means the state held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Edge {
    /// false -> true: the sample went above the rise threshold.
    Rising = 0,
    /// true -> false: the sample went below the fall threshold.
    Falling = 1,
}

impl Edge {
    /// The detector state right after this edge.
    pub const fn level(self) -> bool {
        matches!(self, Self::Rising)
    }

    pub const fn is_rising(self) -> bool {
        matches!(self, Self::Rising)
    }

    pub const fn is_falling(self) -> bool {
        matches!(self, Self::Falling)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rising => write!(f, "rising"),
            Self::Falling => write!(f, "falling"),
        }
    }
}
