//! The fixed 16-color palette plus its one custom slot.

use alloc::{string::String, vec::Vec};

use crate::{argb_blue, argb_green, argb_red, argb_to_hex, parse_hex_color};

#[cfg(feature = "project")]
use crate::DotgridError;

/// The base palette every document starts from.
pub const PALETTE_16: [&str; 16] = [
  "#000000", "#ffffff", "#9d9d9d", "#4a4a4a",
  "#ff0000", "#ffa500", "#ffff00", "#00ff00",
  "#00ffff", "#0000ff", "#8000ff", "#ff00ff",
  "#8b4513", "#f4a460", "#008080", "#2f4f4f",
];

/// How many user-assignable slots follow the base palette.
pub const CUSTOM_PALETTE_SLOTS: usize = 1;

/// What a custom slot holds before the user picks anything.
pub const DEFAULT_CUSTOM_COLOR: &str = "#000000";

/// The full starting palette: the 16 base colors plus the custom slot.
#[must_use]
pub fn default_palette() -> Vec<String> {
  let mut pal: Vec<String> = PALETTE_16.iter().map(|hex| String::from(*hex)).collect();
  for _ in 0..CUSTOM_PALETTE_SLOTS {
    pal.push(String::from(DEFAULT_CUSTOM_COLOR));
  }
  pal
}

/// Brings a stored palette up to the current 17-entry layout.
///
/// Documents from before the custom slot existed carry 16 entries; the
/// default custom color is appended to those. 17 entries pass through
/// untouched. Any other length fails with `ProjectPalette`.
#[cfg(feature = "project")]
#[cfg_attr(docs_rs, doc(cfg(feature = "project")))]
pub fn normalize_palette(entries: Vec<String>) -> Result<Vec<String>, DotgridError> {
  let mut pal = entries;
  if pal.len() == PALETTE_16.len() {
    for _ in 0..CUSTOM_PALETTE_SLOTS {
      pal.push(String::from(DEFAULT_CUSTOM_COLOR));
    }
    Ok(pal)
  } else if pal.len() == PALETTE_16.len() + CUSTOM_PALETTE_SLOTS {
    Ok(pal)
  } else {
    Err(DotgridError::ProjectPalette)
  }
}

/// The palette entry closest to an ARGB color.
///
/// An entry spelling exactly the color's `#rrggbb` hex (case doesn't matter)
/// wins outright; otherwise the entry with the smallest squared RGB distance
/// does, earliest first on ties. Alpha plays no part. Entries that don't
/// parse as hex colors are skipped, and an empty palette yields 0.
#[must_use]
pub fn nearest_palette_index(palette: &[String], argb: u32) -> usize {
  let target = argb_to_hex(argb);
  if let Some(i) = palette.iter().position(|p| p.eq_ignore_ascii_case(&target)) {
    return i;
  }

  let tr = argb_red(argb) as i32;
  let tg = argb_green(argb) as i32;
  let tb = argb_blue(argb) as i32;

  let mut best = 0;
  let mut best_d = u32::MAX;
  for (i, entry) in palette.iter().enumerate() {
    let c = match parse_hex_color(entry) {
      Ok(c) => c,
      Err(_) => continue,
    };
    let dr = argb_red(c) as i32 - tr;
    let dg = argb_green(c) as i32 - tg;
    let db = argb_blue(c) as i32 - tb;
    let d = (dr * dr + dg * dg + db * db) as u32;
    if d < best_d {
      best_d = d;
      best = i;
    }
  }
  best
}

#[test]
fn test_nearest_palette_index() {
  let pal = default_palette();
  // exact spellings win, case-insensitively
  assert_eq!(nearest_palette_index(&pal, 0xFFFFA500), 5);
  assert_eq!(nearest_palette_index(&pal, parse_hex_color("#2F4F4F").unwrap()), 15);
  // near-white lands on white by distance
  assert_eq!(nearest_palette_index(&pal, 0xFFFEFEFE), 1);
  // ties go to the earliest entry: pure black appears at 0 and 16
  assert_eq!(nearest_palette_index(&pal, 0xFF010101), 0);
}

#[test]
fn test_nearest_palette_index_skips_unparsable_entries() {
  let pal: Vec<String> =
    ["no-color-here", "#0000fe", "#woopsie"].iter().map(|s| String::from(*s)).collect();
  // the first entry doesn't parse, so the nearby real color wins
  assert_eq!(nearest_palette_index(&pal, 0xFF0000FF), 1);
  // a palette with nothing parseable falls back to 0
  let bad: Vec<String> = ["???", ""].iter().map(|s| String::from(*s)).collect();
  assert_eq!(nearest_palette_index(&bad, 0xFF0000FF), 0);
}
