//! Helpers for the crate's packed ARGB color values.
//!
//! Every pixel in this crate is a `u32` with the alpha byte in the highest
//! position: `(a << 24) | (r << 16) | (g << 8) | b`. These functions convert
//! between that packing, the [`r8g8b8a8_Srgb`] byte-pixel type, and the
//! `#rrggbb` hex strings that palettes are written in.

use pixel_formats::r8g8b8a8_Srgb;

use alloc::string::String;

use crate::DotgridError;

/// The color the eraser writes: fully transparent black.
pub const ERASER_ARGB: u32 = 0x0000_0000;

/// Packs the four channel bytes into an ARGB value.
#[inline]
#[must_use]
pub const fn argb_from_channels(a: u8, r: u8, g: u8, b: u8) -> u32 {
  ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// The alpha byte of an ARGB value.
#[inline]
#[must_use]
pub const fn argb_alpha(argb: u32) -> u8 {
  (argb >> 24) as u8
}

/// The red byte of an ARGB value.
#[inline]
#[must_use]
pub const fn argb_red(argb: u32) -> u8 {
  (argb >> 16) as u8
}

/// The green byte of an ARGB value.
#[inline]
#[must_use]
pub const fn argb_green(argb: u32) -> u8 {
  (argb >> 8) as u8
}

/// The blue byte of an ARGB value.
#[inline]
#[must_use]
pub const fn argb_blue(argb: u32) -> u8 {
  argb as u8
}

/// Converts an ARGB value to an sRGB byte pixel.
#[inline]
#[must_use]
pub const fn rgba_from_argb(argb: u32) -> r8g8b8a8_Srgb {
  r8g8b8a8_Srgb {
    r: argb_red(argb),
    g: argb_green(argb),
    b: argb_blue(argb),
    a: argb_alpha(argb),
  }
}

/// Converts an sRGB byte pixel to an ARGB value.
#[inline]
#[must_use]
pub const fn argb_from_rgba(p: r8g8b8a8_Srgb) -> u32 {
  argb_from_channels(p.a, p.r, p.g, p.b)
}

/// Parses a `#rrggbb` hex color into an opaque ARGB value.
///
/// The leading `#` is optional, and the digits can be upper or lower case.
/// The output alpha is always 255 because palette colors are opaque.
pub fn parse_hex_color(hex: &str) -> Result<u32, DotgridError> {
  let digits = hex.strip_prefix('#').unwrap_or(hex);
  match digits.as_bytes() {
    [r1, r0, g1, g0, b1, b0] => {
      let r = (hex_nibble(*r1)? << 4) | hex_nibble(*r0)?;
      let g = (hex_nibble(*g1)? << 4) | hex_nibble(*g0)?;
      let b = (hex_nibble(*b1)? << 4) | hex_nibble(*b0)?;
      Ok(argb_from_channels(0xFF, r, g, b))
    }
    _ => Err(DotgridError::Parse),
  }
}

/// Formats the RGB part of an ARGB value as lowercase `#rrggbb`.
///
/// The alpha byte is dropped, which is how palette entries are written.
#[inline]
#[must_use]
pub fn argb_to_hex(argb: u32) -> String {
  alloc::format!(
    "#{:02x}{:02x}{:02x}",
    argb_red(argb),
    argb_green(argb),
    argb_blue(argb)
  )
}

/// Is this string exactly `#` followed by six hex digits?
#[inline]
#[must_use]
pub fn is_hex_color(hex: &str) -> bool {
  match hex.as_bytes() {
    [b'#', digits @ ..] => {
      digits.len() == 6 && digits.iter().all(|b| b.is_ascii_hexdigit())
    }
    _ => false,
  }
}

#[inline]
fn hex_nibble(b: u8) -> Result<u8, DotgridError> {
  match b {
    b'0'..=b'9' => Ok(b - b'0'),
    b'a'..=b'f' => Ok(b - b'a' + 10),
    b'A'..=b'F' => Ok(b - b'A' + 10),
    _ => Err(DotgridError::Parse),
  }
}

#[test]
fn test_argb_packing_round_trip() {
  let argb = argb_from_channels(0x80, 0x11, 0x22, 0x33);
  assert_eq!(argb, 0x8011_2233);
  assert_eq!(argb_alpha(argb), 0x80);
  assert_eq!(argb_red(argb), 0x11);
  assert_eq!(argb_green(argb), 0x22);
  assert_eq!(argb_blue(argb), 0x33);
  assert_eq!(argb_from_rgba(rgba_from_argb(argb)), argb);
}

#[test]
fn test_hex_color_round_trip() {
  assert_eq!(parse_hex_color("#ffa500").unwrap(), 0xFFFFA500);
  assert_eq!(parse_hex_color("FFA500").unwrap(), 0xFFFFA500);
  assert_eq!(argb_to_hex(0xFFFFA500), "#ffa500");
  assert_eq!(argb_to_hex(0x00FFA500), "#ffa500");
  assert!(parse_hex_color("#ffa50").is_err());
  assert!(parse_hex_color("#ffa5001").is_err());
  assert!(parse_hex_color("#ffa50g").is_err());
  assert!(is_hex_color("#2f4f4f"));
  assert!(!is_hex_color("2f4f4f"));
  assert!(!is_hex_color("#2f4f4"));
}
