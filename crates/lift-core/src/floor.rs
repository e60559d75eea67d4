//! The building floor model.
//!
//! # Design
//!
//! A floor is a plain `u32` wrapped in a newtype, so "below ground" is not
//! representable at all: the ground floor is a hard lower bound enforced by
//! the type rather than by runtime checks scattered through the car logic.
//! There is deliberately no upper bound — the simulated building has no
//! modeled roof, and the car never needs one because dispatch only ever
//! climbs as high as the highest pending floor.

use std::fmt;

/// A non-negative building floor.  `Floor(0)` is the ground floor (lobby).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Floor(pub u32);

impl Floor {
    /// The ground floor (lobby).  The car starts here and can never go lower.
    pub const GROUND: Floor = Floor(0);

    /// The floor one above `self`.
    #[inline]
    pub fn up(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor one below `self`, saturating at [`Floor::GROUND`].
    #[inline]
    pub fn down(self) -> Floor {
        Floor(self.0.saturating_sub(1))
    }

    /// Number of single-floor moves between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// `true` when the car standing here cannot move further down.
    #[inline]
    pub fn is_ground(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Floor {
    #[inline]
    fn from(n: u32) -> Floor {
        Floor(n)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
