//! The canvas: a sized, owned buffer of packed ARGB pixels.

use alloc::vec::Vec;

use crate::DotgridError;

/// An owned grid of packed ARGB pixels, the editor's canvas.
///
/// The fields are public, but if you put them together weirdly the methods of
/// this type might panic. The checked way to build one is [`PixelGrid::new`]
/// or [`PixelGrid::create`], which enforce that both dimensions are non-zero
/// and that the buffer holds exactly `width * height` words.
///
/// Pixels are row-major, `index = y * width + x`, each one
/// `(a << 24) | (r << 16) | (g << 8) | b`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct PixelGrid {
  pub width: u32,
  pub height: u32,
  pub pixels: Vec<u32>,
}
impl PixelGrid {
  /// Wraps an existing buffer as a grid.
  ///
  /// ## Failure
  /// * `Dimensions` if either dimension is 0 or the pixel count overflows.
  /// * `PixelCount` if the buffer length isn't `width * height`.
  #[inline]
  pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, DotgridError> {
    let expected = pixel_count(width, height)?;
    if pixels.len() != expected {
      return Err(DotgridError::PixelCount { expected, actual: pixels.len() });
    }
    Ok(Self { width, height, pixels })
  }

  /// Allocates a grid with every pixel set to `fill_argb`.
  ///
  /// ## Failure
  /// * `Dimensions` if either dimension is 0 or the pixel count overflows.
  /// * `Alloc` if the buffer can't be allocated.
  #[inline]
  pub fn create(width: u32, height: u32, fill_argb: u32) -> Result<Self, DotgridError> {
    let count = pixel_count(width, height)?;
    let mut pixels = Vec::new();
    pixels.try_reserve(count)?;
    pixels.resize(count, fill_argb);
    Ok(Self { width, height, pixels })
  }

  /// The buffer position of an `(x, y)` coordinate.
  #[inline]
  #[must_use]
  pub const fn index(&self, x: u32, y: u32) -> usize {
    (y as usize) * (self.width as usize) + (x as usize)
  }

  /// Is this coordinate on the grid?
  #[inline]
  #[must_use]
  pub const fn in_bounds(&self, x: u32, y: u32) -> bool {
    x < self.width && y < self.height
  }

  /// Reads the pixel at the position, or 0 if the position is out of bounds.
  #[inline]
  #[must_use]
  pub fn get(&self, x: u32, y: u32) -> u32 {
    if self.in_bounds(x, y) {
      self.pixels.get(self.index(x, y)).copied().unwrap_or(0)
    } else {
      0
    }
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut u32> {
    if self.in_bounds(x, y) {
      let i = self.index(x, y);
      self.pixels.get_mut(i)
    } else {
      None
    }
  }

  /// Writes the pixel at the position.
  ///
  /// Returns `false`, changing nothing, when the position is out of bounds.
  #[inline]
  pub fn set(&mut self, x: u32, y: u32, argb: u32) -> bool {
    match self.get_mut(x, y) {
      Some(p) => {
        *p = argb;
        true
      }
      None => false,
    }
  }

  /// Sets every pixel to the given color.
  #[inline]
  pub fn fill(&mut self, argb: u32) {
    self.pixels.fill(argb)
  }

  /// An independent copy of the pixel buffer, for snapshots.
  #[inline]
  #[must_use]
  pub fn clone_pixels(&self) -> Vec<u32> {
    self.pixels.clone()
  }
}

/// Checked `width * height` as a buffer length.
#[inline]
pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, DotgridError> {
  if width == 0 || height == 0 {
    return Err(DotgridError::Dimensions);
  }
  (width as usize).checked_mul(height as usize).ok_or(DotgridError::Dimensions)
}
