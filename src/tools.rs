//! The editing tools: pencil, flood fill, and the dispatch vocabulary.

use alloc::vec::Vec;

use crate::PixelGrid;

/// Which tool a pointer gesture applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tool {
  /// Writes single pixels.
  #[default]
  Pencil,
  /// Replaces a 4-connected region of one color.
  Fill,
  /// Picks a pixel's color into the palette selection.
  Eyedropper,
}

/// Whether a gesture paints the selected color or erases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PaintMode {
  /// Write the selected color.
  #[default]
  Draw,
  /// Write transparent black ([`ERASER_ARGB`](crate::ERASER_ARGB)).
  Erase,
}

/// Writes one pixel.
///
/// Returns `false`, changing nothing, when the position is out of bounds.
#[inline]
pub fn apply_pencil(grid: &mut PixelGrid, x: u32, y: u32, argb: u32) -> bool {
  grid.set(x, y, argb)
}

/// Flood-fills the 4-connected region of same-colored pixels around a seed.
///
/// Every pixel reachable from `(x, y)` through up/down/left/right steps over
/// the seed's color is overwritten with `argb`. Returns how many pixels
/// changed: 0 when the seed is out of bounds, and 0 when the region already
/// has the requested color.
pub fn apply_fill(grid: &mut PixelGrid, x: u32, y: u32, argb: u32) -> usize {
  if !grid.in_bounds(x, y) {
    return 0;
  }
  let target = grid.get(x, y);
  if target == argb {
    return 0;
  }
  let w = grid.width as usize;
  let h = grid.height as usize;

  // The work list holds packed flat indexes, cheaper than coordinate pairs.
  // An index can be pushed twice before it's visited, so popped entries that
  // no longer hold the target color are skipped.
  let mut stack: Vec<usize> = Vec::new();
  stack.push(grid.index(x, y));

  let mut changed = 0;
  while let Some(i) = stack.pop() {
    if grid.pixels[i] != target {
      continue;
    }
    grid.pixels[i] = argb;
    changed += 1;

    let cx = i % w;
    let cy = i / w;
    if cx > 0 {
      stack.push(i - 1);
    }
    if cx + 1 < w {
      stack.push(i + 1);
    }
    if cy > 0 {
      stack.push(i - w);
    }
    if cy + 1 < h {
      stack.push(i + w);
    }
  }
  changed
}
