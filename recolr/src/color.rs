use std::str::FromStr;

use thiserror::Error;

/// A fully-opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRgb24 {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Hex color must be 6 digits long. Found length: {0}")]
    Length(usize),
    #[error("Hex color contains a non-hex digit: {0:?}")]
    Digit(String),
}

impl FromStr for ColorRgb24 {
    type Err = ColorParseError;

    /// Parses a `RRGGBB` hex string. A leading `#` and surrounding whitespace
    /// are tolerated.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let value = value.strip_prefix('#').unwrap_or(value);

        if value.len() != 6 {
            return Err(ColorParseError::Length(value.len()));
        }

        if !value.bytes().all(|digit| digit.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(value.to_string()));
        }

        // All digits are ASCII hex at this point, so the slicing and
        // parsing can't fail.
        let channel = |index: usize| {
            u8::from_str_radix(&value[index..index + 2], 16)
                .map_err(|_| ColorParseError::Digit(value.to_string()))
        };

        Ok(Self {
            red: channel(0)?,
            green: channel(2)?,
            blue: channel(4)?,
        })
    }
}

impl From<(u8, u8, u8)> for ColorRgb24 {
    fn from(value: (u8, u8, u8)) -> Self {
        let (red, green, blue) = value;
        Self { red, green, blue }
    }
}

impl From<ColorRgb24> for (u8, u8, u8) {
    fn from(value: ColorRgb24) -> Self {
        (value.red, value.green, value.blue)
    }
}

impl From<[u8; 3]> for ColorRgb24 {
    fn from(value: [u8; 3]) -> Self {
        let [red, green, blue] = value;
        Self { red, green, blue }
    }
}

impl From<ColorRgb24> for [u8; 3] {
    fn from(value: ColorRgb24) -> Self {
        [value.red, value.green, value.blue]
    }
}
