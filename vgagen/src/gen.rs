use core::fmt;
use crate::config::{Config, ImmediateStyle};
use crate::vga::Attribute;
use crate::vga::buffer::{self, ScreenChar};
use crate::{Error, Result};

/// A single `mov word` storing one cell into the text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
  pub base: usize,
  pub offset: usize,
  pub cell: ScreenChar,
  pub character: char,
  style: ImmediateStyle,
  attr_digits: String,
}

impl fmt::Display for Instruction {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    // single digit offsets get an extra space so listings line up
    let pad = if self.offset < 10 { " " } else { "" };
    write!(f, "mov word [{:#x} + {}{}], ", self.base, pad, self.offset)?;
    match self.style {
      ImmediateStyle::Compat => write!(f, "0x0{}{:x}", self.attr_digits, self.cell.ascii_character)?,
      ImmediateStyle::Word => write!(f, "{:#06x}", self.cell.word())?,
    }
    write!(f, " ; {}", self.character)
  }
}

/// Lays characters out left to right from the buffer origin, collecting
/// one instruction per cell.
pub struct Writer<'a> {
  pub column_position: usize,
  config: &'a Config,
  attribute: &'a Attribute,
  instructions: Vec<Instruction>,
}

impl<'a> Writer<'a> {
  pub fn new(config: &'a Config, attribute: &'a Attribute) -> Self {
    Writer {
      column_position: 0,
      config,
      attribute,
      instructions: Vec::new(),
    }
  }

  pub fn write_char(&mut self, character: char) -> Result<()> {
    let code = character as u32;
    if code > 0xff {
      return Err(Error::InvalidCharacterCode { index: self.column_position, character });
    }
    if self.column_position == buffer::BUFFER_WIDTH {
      warn!("text runs past column {}, following cells land on the next row",
        buffer::BUFFER_WIDTH);
    }
    let instruction = Instruction {
      base: self.config.base,
      offset: buffer::cell_offset(self.column_position),
      cell: ScreenChar {
        ascii_character: code as u8,
        color_code: self.attribute.code(),
      },
      character,
      style: self.config.style,
      attr_digits: self.attribute.digits().to_string(),
    };
    trace!("{}", instruction);
    self.instructions.push(instruction);
    self.column_position += 1;
    return Ok(());
  }

  pub fn write_string(&mut self, s: &str) -> Result<()> {
    for c in s.chars() {
      self.write_char(c)?;
    }
    Ok(())
  }

  pub fn finish(self) -> Vec<Instruction> {
    self.instructions
  }
}

pub struct Generator {
  config: Config,
}

impl Default for Generator {
  fn default() -> Self {
    Generator::new(Config::default())
  }
}

impl Generator {
  pub fn new(config: Config) -> Self {
    Generator { config }
  }

  /// One instruction per character of `text`, in order. `None` uses the
  /// configured default attribute.
  pub fn instructions(&self, text: &str, attribute: Option<&Attribute>) -> Result<Vec<Instruction>> {
    let attribute = attribute.unwrap_or(&self.config.attribute);
    debug!("generating {} cells with attribute {}", text.chars().count(), attribute);
    let mut writer = Writer::new(&self.config, attribute);
    writer.write_string(text)?;
    return Ok(writer.finish());
  }

  /// The instruction listing for `text`, lines joined by `\n` without a
  /// trailing newline. Empty text gives an empty listing.
  pub fn generate(&self, text: &str, attribute: Option<&Attribute>) -> Result<String> {
    let lines: Vec<String> = self.instructions(text, attribute)?
      .iter()
      .map(|i| i.to_string())
      .collect();
    return Ok(lines.join("\n"));
  }
}

/// Generates with the default configuration, taking the colour as typed.
/// A blank colour selects the default attribute.
pub fn gen_asm(text: &str, colour: &str) -> Result<String> {
  let attribute = Attribute::parse(colour)?;
  Generator::default().generate(text, attribute.as_ref())
}
