//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{PxGridError, Result};

/// An opaque RGB colour value.
///
/// Two pixels are "the same colour" iff all three channels match exactly;
/// this type is the equality/hash key for frequency counting and for the
/// stylesheet class table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black, the conventional fallback when no sample exists.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let mut digits = hex.chars();
                let (Some(rc), Some(gc), Some(bc)) =
                    (digits.next(), digits.next(), digits.next())
                else {
                    return Err(invalid_colour(s));
                };
                let r = parse_hex_digit(rc)?;
                let g = parse_hex_digit(gc)?;
                let b = parse_hex_digit(bc)?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(invalid_colour(s)),
        }
    }

    /// Convert to an RGB triple (for image output).
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Stylesheet class identifier for this colour.
    ///
    /// Derived from the colour's own three channels, zero-padded so the
    /// name is unique per colour and byte-identical across runs.
    pub fn class_name(self) -> String {
        format!("color_{:03}_{:03}_{:03}", self.r, self.g, self.b)
    }
}

impl FromStr for Colour {
    type Err = PxGridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn invalid_colour(s: &str) -> PxGridError {
    PxGridError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB or #RRGGBB format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| PxGridError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| PxGridError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
