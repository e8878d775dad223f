//! Opacity percentage.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Blend strength toward the shade layer, as a whole percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Opacity(u8);

impl Opacity {
    pub const NONE: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// Clamp any integer into the valid range.
    pub fn clamped(percent: i64) -> Self {
        Self(percent.clamp(0, 100) as u8)
    }

    /// The percentage value.
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Blend factor in `0.0..=1.0`.
    pub fn alpha(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for Opacity {
    fn from(percent: i64) -> Self {
        Self::clamped(percent)
    }
}

impl From<Opacity> for u8 {
    fn from(o: Opacity) -> Self {
        o.0
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
