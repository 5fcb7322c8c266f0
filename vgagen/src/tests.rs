use crate::*;
use crate::vga::buffer::{ScreenChar, BUFFER_WIDTH, CELL_SIZE};

#[test]
fn hi_in_green() {
  let out = gen_asm("Hi", "2").unwrap();
  assert_eq!(out,
    "mov word [0xb8000 +  0], 0x0248 ; H\nmov word [0xb8000 +  2], 0x0269 ; i",
    "Listing must match the reference output byte for byte");
}

#[test]
fn empty_string() {
  assert_eq!(gen_asm("", "2").unwrap(), "", "Empty text must produce no instructions");
  let g = Generator::default();
  assert!(g.instructions("", None).unwrap().is_empty());
}

#[test]
fn one_line_per_char_in_order() {
  let text = "Hello, VGA world!";
  let g = Generator::default();
  let ins = g.instructions(text, None).unwrap();
  assert_eq!(ins.len(), text.len(), "One instruction per character");
  for (i, (c, ins)) in text.chars().zip(ins.iter()).enumerate() {
    assert_eq!(ins.character, c, "Instructions must keep input order");
    assert_eq!(ins.offset, 2 * i, "Offset must be twice the index");
    assert_eq!(ins.cell.ascii_character, c as u8);
  }
  let out = g.generate(text, None).unwrap();
  assert_eq!(out.lines().count(), text.len());
  for (line, c) in out.lines().zip(text.chars()) {
    let code = format!("{:x} ; {}", c as u32, c);
    assert!(line.ends_with(&code), "{:?} must end in lowercase char code {:?}", line, code);
  }
}

#[test]
fn offset_padding() {
  let out = gen_asm("abcdefg", "7").unwrap();
  let lines: Vec<&str> = out.lines().collect();
  assert_eq!(lines[0], "mov word [0xb8000 +  0], 0x0761 ; a");
  assert_eq!(lines[4], "mov word [0xb8000 +  8], 0x0765 ; e", "Offset 8 is still padded");
  assert_eq!(lines[5], "mov word [0xb8000 + 10], 0x0766 ; f", "Offset 10 is not padded");
  assert_eq!(lines[6], "mov word [0xb8000 + 12], 0x0767 ; g");
  let long = "x".repeat(60);
  let out = gen_asm(&long, "2").unwrap();
  assert_eq!(out.lines().last().unwrap(), "mov word [0xb8000 + 118], 0x0278 ; x");
}

#[test]
fn idempotent() {
  let g = Generator::default();
  let a = g.generate("same input", Some(&"1f".parse().unwrap())).unwrap();
  let b = g.generate("same input", Some(&"1f".parse().unwrap())).unwrap();
  assert_eq!(a, b, "Generation must not depend on hidden state");
}

#[test]
fn colour_digits_kept_as_typed() {
  assert_eq!(gen_asm("A", "1f").unwrap(), "mov word [0xb8000 +  0], 0x01f41 ; A");
  assert_eq!(gen_asm("A", "0x1F").unwrap(), "mov word [0xb8000 +  0], 0x01F41 ; A");
  assert_eq!(gen_asm("A", "").unwrap(), "mov word [0xb8000 +  0], 0x0241 ; A",
    "Blank colour falls back to green on black");
}

#[test]
fn colour_names() {
  let a = Attribute::parse("white on blue").unwrap().unwrap();
  assert_eq!(a.code(), ColorCode::new(Color::White, Color::Blue));
  assert_eq!(a.code().byte(), 0x1f);
  assert_eq!(a.digits(), "1f");
  let a = Attribute::parse("LightRed").unwrap().unwrap();
  assert_eq!(a.code().byte(), 0x0c);
  assert_eq!(a.digits(), "c");
  assert_eq!("light_gray".parse::<Color>().unwrap(), Color::LightGray);
  assert_eq!("dark-grey".parse::<Color>().unwrap(), Color::DarkGray);
  assert_eq!(Attribute::parse("  ").unwrap(), None);
  assert_eq!(Attribute::default().to_string(), "0x02");
}

#[test]
fn bad_colours() {
  for bad in &["xyz", "123", "0x", "white on", "white in blue", "purple"] {
    match Attribute::parse(bad) {
      Err(Error::InvalidColourFormat(_)) => {},
      other => panic!("{:?} should be rejected, got {:?}", bad, other),
    }
  }
  assert!(gen_asm("A", "zz").is_err());
}

#[test]
fn wide_characters_rejected() {
  let err = gen_asm("ab€", "2").unwrap_err();
  assert_eq!(err, Error::InvalidCharacterCode { index: 2, character: '€' });
  // latin-1 still fits in the glyph byte
  assert_eq!(gen_asm("é", "2").unwrap(), "mov word [0xb8000 +  0], 0x02e9 ; é");
}

#[test]
fn word_style() {
  let config = Config { style: ImmediateStyle::Word, ..Config::default() };
  let g = Generator::new(config);
  let attr: Attribute = "1f".parse().unwrap();
  assert_eq!(g.generate("A", Some(&attr)).unwrap(), "mov word [0xb8000 +  0], 0x1f41 ; A");
  assert_eq!(g.generate("\t", None).unwrap(), "mov word [0xb8000 +  0], 0x0209 ; \t",
    "Word style pads the character code");
  assert_eq!(g.generate("Hi", None).unwrap(), gen_asm("Hi", "2").unwrap(),
    "Both styles agree for single digit attributes");
}

#[test]
fn cell_layout() {
  assert_eq!(CELL_SIZE, 2, "A cell is one 16-bit word");
  let c = ScreenChar { ascii_character: b'H', color_code: ColorCode::from_byte(0x4e) };
  assert_eq!(c.word(), 0x4e48);
}

#[test]
fn configured_base_and_style() {
  assert_eq!(Config::default().base, 0xb8000);
  assert_eq!(Config::default().style, ImmediateStyle::Compat);
  let config = Config {
    base: 0xa0000,
    attribute: "yellow on red".parse().unwrap(),
    style: "Word".parse().unwrap(),
  };
  assert_eq!(config.attribute.code().byte(), 0x4e);
  let g = Generator::new(config);
  assert_eq!(g.generate("H", None).unwrap(), "mov word [0xa0000 +  0], 0x4e48 ; H");
  assert!(matches!("fancy".parse::<ImmediateStyle>(),
    Err(Error::InvalidSetting { name: "style", .. })));
}

#[test]
fn default_generator_matches_gen_asm() {
  let g = Generator::default();
  let attr: Attribute = "1f".parse().unwrap();
  assert_eq!(g.generate("A", Some(&attr)).unwrap(), gen_asm("A", "1f").unwrap(),
    "The default configuration gives the compat listing");
  assert_eq!(g.generate("A", Some(&attr)).unwrap(), "mov word [0xb8000 +  0], 0x01f41 ; A");
}

#[test]
fn text_past_first_row() {
  let text = "y".repeat(BUFFER_WIDTH + 1);
  let ins = Generator::default().instructions(&text, None).unwrap();
  assert_eq!(ins.len(), BUFFER_WIDTH + 1, "Text wider than a row is still generated");
  assert_eq!(ins[BUFFER_WIDTH].offset, 160, "Offsets keep growing into the next row");
  let out = gen_asm(&text, "2").unwrap();
  assert_eq!(out.lines().last().unwrap(), "mov word [0xb8000 + 160], 0x0279 ; y");
}
