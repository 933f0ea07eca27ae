use std::fmt::Formatter;

use Direction::*;
use serde::{Deserialize, Serialize};

/// Direction of a position, a bet on rising or falling prices.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    /// A bet on a price increase.
    Long = 0,
    /// A bet on a price decrease.
    Short = 1,
}

impl Direction {
    /// Returns the inverted direction
    #[inline(always)]
    pub fn inverted(&self) -> Self {
        match self {
            Long => Short,
            Short => Long,
        }
    }

    /// The multiplier applied to a price move when computing its effect on
    /// the position, `1` for `Long` and `-1` for `Short`.
    #[inline(always)]
    pub fn sign(&self) -> f64 {
        match self {
            Long => 1.0,
            Short => -1.0,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
