//! Tint colour type and parsing.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{BackdropError, Result};

/// A 24-bit RGB tint, persisted as `#RRGGBB`.
///
/// Construction always goes through [`TintColour::from_hex`], so a value of
/// this type is valid by the time it reaches the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TintColour {
    rgb: [u8; 3],
}

impl TintColour {
    /// Create a tint from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// White, the default tint.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Parse a `#RRGGBB` string.
    ///
    /// Only the six-digit form with a leading `#` is accepted; anything else
    /// is rejected rather than guessed at.
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || BackdropError::InvalidColor {
            value: s.to_string(),
        };

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let srgb = Srgb::<u8>::from_str(hex).map_err(|_| invalid())?;
        Ok(Self::from(srgb))
    }

    /// RGB components.
    pub fn channels(self) -> [u8; 3] {
        self.rgb
    }

    /// Red component.
    pub fn red(self) -> u8 {
        self.rgb[0]
    }

    /// Green component.
    pub fn green(self) -> u8 {
        self.rgb[1]
    }

    /// Blue component.
    pub fn blue(self) -> u8 {
        self.rgb[2]
    }

    pub fn to_srgb(self) -> Srgb<u8> {
        Srgb::new(self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

impl Default for TintColour {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Srgb<u8>> for TintColour {
    fn from(c: Srgb<u8>) -> Self {
        Self::rgb(c.red, c.green, c.blue)
    }
}

impl FromStr for TintColour {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for TintColour {
    type Error = BackdropError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<TintColour> for String {
    fn from(c: TintColour) -> Self {
        c.to_string()
    }
}

impl fmt::Display for TintColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = TintColour::from_hex("#FF0000").unwrap();
        assert_eq!(c, TintColour::rgb(255, 0, 0));

        let c = TintColour::from_hex("#1a2b3c").unwrap();
        assert_eq!(c, TintColour::rgb(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn test_from_hex_rejects_other_forms() {
        for bad in ["FF0000", "#F00", "#FF000080", "#GG0000", "", "#", " #FF0000", "#FF00 0"] {
            let err = TintColour::from_hex(bad).unwrap_err();
            assert!(
                matches!(err, BackdropError::InvalidColor { ref value } if value == bad),
                "expected InvalidColor for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(TintColour::rgb(0xab, 0x01, 0xff).to_string(), "#AB01FF");
        assert_eq!(TintColour::default().to_string(), "#FFFFFF");
    }

    #[test]
    fn test_accessors() {
        let c = TintColour::rgb(1, 2, 3);
        assert_eq!(c.channels(), [1, 2, 3]);
        assert_eq!((c.red(), c.green(), c.blue()), (1, 2, 3));
        assert_eq!(TintColour::from(c.to_srgb()), c);
    }

    #[test]
    fn test_serde_round_trip_through_string() {
        let json = serde_json::to_string(&TintColour::rgb(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#FF0000\"");

        let parsed: TintColour = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(parsed, TintColour::rgb(0, 255, 0));

        assert!(serde_json::from_str::<TintColour>("\"green\"").is_err());
    }
}
