pub const BUFFER_WIDTH: usize = 80;

/// Physical address of the colour text-mode framebuffer.
pub const BUFFER_ADDR: usize = 0xb8000;

/// Bytes occupied by one cell in the framebuffer.
pub const CELL_SIZE: usize = core::mem::size_of::<ScreenChar>();

/// One cell of the text buffer: glyph in the low byte, attribute in the high byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
  pub ascii_character: u8,
  pub color_code: super::ColorCode,
}

assert_eq_size!(ScreenChar, u16);

impl ScreenChar {
  /// The cell as the 16-bit word a `mov word` stores.
  pub fn word(&self) -> u16 {
    return (self.color_code.byte() as u16) << 8 | self.ascii_character as u16;
  }
}

/// Byte offset of the cell at `index`, counted from the buffer origin.
pub fn cell_offset(index: usize) -> usize {
  index * CELL_SIZE
}
