//! Generates `mov word` instructions that print a string straight into the
//! VGA text buffer, for use in early boot code.

#[macro_use]
extern crate log;
#[macro_use]
extern crate static_assertions;

mod error;
pub mod config;
pub mod gen;
pub mod vga;
#[cfg(test)]
mod tests;

pub use crate::config::{Config, ImmediateStyle};
pub use crate::error::{Error, Result};
pub use crate::gen::{gen_asm, Generator, Instruction, Writer};
pub use crate::vga::{Attribute, Color, ColorCode};
