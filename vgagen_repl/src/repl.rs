use crate::*;
use std::io::{BufRead, Write};
use anyhow::Context;
use vgagen::{Attribute, Generator};

pub const STRING_PROMPT: &str = "String > ";
pub const COLOUR_PROMPT: &str = "Colour (Hex) > ";

/// Prints `label` and reads one line without its line ending.
/// `None` once input is exhausted.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> anyhow::Result<Option<String>> {
  write!(output, "{}", label).context("writing prompt")?;
  output.flush().context("flushing prompt")?;
  let mut line = String::new();
  let read = input.read_line(&mut line).context("reading input")?;
  if read == 0 {
    return Ok(None);
  }
  while line.ends_with('\n') || line.ends_with('\r') {
    line.pop();
  }
  trace!("read {:?}", line);
  return Ok(Some(line));
}

/// Reads text and colour, prints the listing, repeats until end of input.
/// Bad requests are reported on `errors` and do not end the loop.
/// Returns the number of listings printed.
pub fn run<R, W, E>(generator: &Generator, mut input: R, mut output: W, mut errors: E) -> anyhow::Result<usize>
  where R: BufRead, W: Write, E: Write {
  let mut blocks = 0;
  loop {
    let text = match prompt(&mut input, &mut output, STRING_PROMPT)? {
      Some(text) => text,
      None => break,
    };
    let colour = match prompt(&mut input, &mut output, COLOUR_PROMPT)? {
      Some(colour) => colour,
      None => break,
    };
    let listing = Attribute::parse(&colour)
      .and_then(|attr| generator.instructions(&text, attr.as_ref()));
    match listing {
      Ok(instructions) => {
        for ins in &instructions {
          writeln!(output, "{}", ins).context("writing listing")?;
        }
        writeln!(output).context("writing listing")?;
        blocks += 1;
      },
      Err(e) => {
        warn!("rejected request {:?} / {:?}: {}", text, colour, e);
        writeln!(errors, "error: {}", e).context("writing error")?;
      },
    }
  }
  // finish the dangling prompt line
  writeln!(output).context("writing output")?;
  return Ok(blocks);
}
