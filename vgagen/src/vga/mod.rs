pub mod buffer;

use core::fmt;
use core::str::FromStr;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
  Black = 0,
  Blue = 1,
  Green = 2,
  Cyan = 3,
  Red = 4,
  Magenta = 5,
  Brown = 6,
  LightGray = 7,
  DarkGray = 8,
  LightBlue = 9,
  LightGreen = 10,
  LightCyan = 11,
  LightRed = 12,
  Pink = 13,
  Yellow = 14,
  White = 15,
}

impl FromStr for Color {
  type Err = Error;

  /// Accepts `LightGray`, `lightgray`, `light_gray` and `light-gray` alike.
  fn from_str(s: &str) -> Result<Color> {
    let name: String = s.chars()
      .filter(|c| *c != '_' && *c != '-')
      .flat_map(char::to_lowercase)
      .collect();
    let color = match name.as_str() {
      "black" => Color::Black,
      "blue" => Color::Blue,
      "green" => Color::Green,
      "cyan" => Color::Cyan,
      "red" => Color::Red,
      "magenta" => Color::Magenta,
      "brown" => Color::Brown,
      "lightgray" | "lightgrey" => Color::LightGray,
      "darkgray" | "darkgrey" => Color::DarkGray,
      "lightblue" => Color::LightBlue,
      "lightgreen" => Color::LightGreen,
      "lightcyan" => Color::LightCyan,
      "lightred" => Color::LightRed,
      "pink" => Color::Pink,
      "yellow" => Color::Yellow,
      "white" => Color::White,
      _ => return Err(Error::InvalidColourFormat(s.to_string())),
    };
    return Ok(color);
  }
}

/// The attribute byte of a text cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
  pub const fn new(foreground: Color, background: Color) -> ColorCode {
    ColorCode((background as u8) << 4 | (foreground as u8))
  }
  pub const fn from_byte(byte: u8) -> ColorCode {
    ColorCode(byte)
  }
  pub fn byte(self) -> u8 {
    self.0
  }
}

impl Default for ColorCode {
  fn default() -> Self {
    ColorCode::new(Color::Green, Color::Black)
  }
}

/// An attribute together with the hex digits it is spelled with in the
/// generated immediate.
///
/// Hex input keeps the digits exactly as typed (`1F` stays `1F`), so that
/// output matches listings produced from the same input before. Attributes
/// built from colour names print their value in lowercase hex, unpadded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
  code: ColorCode,
  digits: String,
}

impl Attribute {
  pub fn code(&self) -> ColorCode {
    self.code
  }
  pub fn digits(&self) -> &str {
    &self.digits
  }

  /// Parses user colour input.
  ///
  /// Blank input yields `None`, letting the caller fall back to its default.
  /// Otherwise one of:
  ///  - one or two hex digits, optionally prefixed with `0x`
  ///  - a colour name, drawn on black
  ///  - `<foreground> on <background>`
  pub fn parse(text: &str) -> Result<Option<Attribute>> {
    let text = text.trim();
    if text.is_empty() {
      return Ok(None);
    }
    let hex = text.strip_prefix("0x")
      .or_else(|| text.strip_prefix("0X"))
      .unwrap_or(text);
    if !hex.is_empty() && hex.len() <= 2 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
      let byte = u8::from_str_radix(hex, 16)
        .map_err(|_| Error::InvalidColourFormat(text.to_string()))?;
      return Ok(Some(Attribute {
        code: ColorCode::from_byte(byte),
        digits: hex.to_string(),
      }));
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    let code = match words.as_slice() {
      [fg] => ColorCode::new(fg.parse()?, Color::Black),
      [fg, on, bg] if on.eq_ignore_ascii_case("on") => ColorCode::new(fg.parse()?, bg.parse()?),
      _ => return Err(Error::InvalidColourFormat(text.to_string())),
    };
    return Ok(Some(Attribute::from(code)));
  }
}

impl From<ColorCode> for Attribute {
  fn from(code: ColorCode) -> Self {
    Attribute {
      code,
      digits: format!("{:x}", code.byte()),
    }
  }
}

impl Default for Attribute {
  fn default() -> Self {
    Attribute::from(ColorCode::default())
  }
}

impl FromStr for Attribute {
  type Err = Error;

  fn from_str(s: &str) -> Result<Attribute> {
    Ok(Attribute::parse(s)?.unwrap_or_default())
  }
}

impl fmt::Display for Attribute {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:#04x}", self.code.byte())
  }
}
