use core::str::FromStr;
use crate::vga::Attribute;
use crate::vga::buffer::BUFFER_ADDR;
use crate::{Error, Result};

/// How the 16-bit immediate of each `mov` is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImmediateStyle {
  /// `0x0` followed by the attribute digits and the unpadded character code.
  Compat,
  /// The cell word as exactly four hex digits.
  Word,
}

impl Default for ImmediateStyle {
  fn default() -> Self {
    ImmediateStyle::Compat
  }
}

impl FromStr for ImmediateStyle {
  type Err = Error;

  fn from_str(s: &str) -> Result<ImmediateStyle> {
    match s.trim().to_ascii_lowercase().as_str() {
      "compat" => Ok(ImmediateStyle::Compat),
      "word" => Ok(ImmediateStyle::Word),
      _ => Err(Error::InvalidSetting { name: "style", value: s.to_string() }),
    }
  }
}

/// Generator settings. The default reproduces the classic listing:
/// base `0xb8000`, green on black, `Compat` immediates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub base: usize,
  pub attribute: Attribute,
  pub style: ImmediateStyle,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      base: BUFFER_ADDR,
      attribute: Attribute::default(),
      style: ImmediateStyle::default(),
    }
  }
}
