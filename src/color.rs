use std::fmt;

use crate::error::ValidationError;

/// Display color of one side, as 8-bit RGB channels.
///
/// Purely cosmetic: which side a player is on is decided by
/// [`shakmaty::Color`], never by these channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

/// Default color of the side moving up the board
pub const WHITE: Color = Color::from_rgb(255, 255, 255);

/// Default color of the side moving down the board
pub const BLACK: Color = Color::from_rgb(0, 0, 0);

impl Color {
    /// Build a color from three channels, each of which must be in 0-255.
    pub fn new(red: i64, green: i64, blue: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            red: channel("red", red)?,
            green: channel("green", green)?,
            blue: channel("blue", blue)?,
        })
    }

    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    #[inline]
    pub const fn red(self) -> u8 {
        self.red
    }

    #[inline]
    pub const fn green(self) -> u8 {
        self.green
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.blue
    }

    /// Lowercase hex string, two digits per channel, e.g. `"ff8000"`.
    pub fn rgb_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

fn channel(name: &'static str, value: i64) -> Result<u8, ValidationError> {
    u8::try_from(value).map_err(|_| ValidationError::Channel {
        channel: name,
        value,
    })
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.rgb_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_hex() {
        assert_eq!(WHITE.rgb_hex(), "ffffff");
        assert_eq!(BLACK.rgb_hex(), "000000");
        assert_eq!(Color::new(255, 8, 0).unwrap().rgb_hex(), "ff0800");
        assert_eq!(Color::new(1, 2, 3).unwrap().to_string(), "#010203");
    }

    #[test]
    fn test_new_matches_constants() {
        assert_eq!(Color::new(255, 255, 255), Ok(WHITE));
        assert_eq!(Color::new(0, 0, 0), Ok(BLACK));
    }

    #[test_case(-1; "below range")]
    #[test_case(256; "above range")]
    fn test_invalid_channel(invalid: i64) {
        for valid in [0, 255] {
            assert_eq!(
                Color::new(invalid, valid, valid),
                Err(ValidationError::Channel {
                    channel: "red",
                    value: invalid
                })
            );
            assert_eq!(
                Color::new(valid, invalid, valid),
                Err(ValidationError::Channel {
                    channel: "green",
                    value: invalid
                })
            );
            assert_eq!(
                Color::new(valid, valid, invalid),
                Err(ValidationError::Channel {
                    channel: "blue",
                    value: invalid
                })
            );
        }
    }
}
