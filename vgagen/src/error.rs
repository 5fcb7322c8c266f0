use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// Character at `index` does not fit the glyph byte of a cell.
  InvalidCharacterCode { index: usize, character: char },
  /// Colour input is neither a hex byte nor a colour name.
  InvalidColourFormat(String),
  /// A configuration value could not be parsed.
  InvalidSetting { name: &'static str, value: String },
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Error::InvalidCharacterCode { index, character } => write!(f,
        "character {:?} (U+{:04X}) at position {} does not fit in one byte",
        character, *character as u32, index),
      Error::InvalidColourFormat(text) => write!(f,
        "invalid colour {:?}: expected a hex byte like 1f, a colour name, or '<fg> on <bg>'",
        text),
      Error::InvalidSetting { name, value } => write!(f,
        "invalid value {:?} for {}", value, name),
    }
  }
}

impl std::error::Error for Error {}
