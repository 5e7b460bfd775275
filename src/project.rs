//! JSON project documents.
//!
//! A project is the saved form of a document: the canvas size, the palette
//! with its custom slot, and the raw ARGB pixels. The wire form is plain
//! JSON with lowercase field names, so documents written by one version of
//! the editor load in another.

use alloc::{string::String, vec::Vec};

use serde::{Deserialize, Serialize};

use crate::{default_palette, normalize_palette, DotgridError, PixelGrid};

/// The current project document version.
pub const PROJECT_VERSION: u32 = 2;

/// The canvas sizes the editor offers, in pixels per side.
pub const CANVAS_SIZES: [u32; 4] = [16, 32, 64, 128];

/// The canvas size a fresh document uses.
pub const DEFAULT_CANVAS_SIZE: u32 = 32;

/// A saved document.
///
/// The public fields match the JSON wire form one to one. A value built by
/// hand can be inconsistent (a pixel buffer that doesn't match the stated
/// size, say); [`Project::from_json`] never returns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Project {
  pub version: u32,
  pub width: u32,
  pub height: u32,
  pub palette: Vec<String>,
  pub pixels: Vec<u32>,
}
impl Project {
  /// Makes a fresh version-2 document with the default palette and every
  /// pixel set to `fill_argb`.
  ///
  /// ## Failure
  /// * `Dimensions` if either dimension is 0 or the pixel count overflows.
  /// * `Alloc` if the pixel buffer can't be allocated.
  pub fn new(width: u32, height: u32, fill_argb: u32) -> Result<Self, DotgridError> {
    let grid = PixelGrid::create(width, height, fill_argb)?;
    Ok(Self {
      version: PROJECT_VERSION,
      width,
      height,
      palette: default_palette(),
      pixels: grid.pixels,
    })
  }

  /// Parses and validates a JSON document.
  ///
  /// A version-1 document carries 16 palette entries; the custom slot is
  /// appended during decode so the result always has 17.
  ///
  /// ## Failure
  /// * `Json` if the text isn't JSON shaped like a project at all.
  /// * `ProjectVersion` if the version is 0 or newer than this crate
  ///   knows.
  /// * `ProjectSize` if either dimension is 0 or the pixel count
  ///   overflows.
  /// * `ProjectPixels` if the pixel buffer length doesn't match the
  ///   stated size.
  /// * `ProjectPalette` if the palette is neither 16 nor 17 entries.
  pub fn from_json(json: &str) -> Result<Self, DotgridError> {
    let Self { version, width, height, palette, pixels } = serde_json::from_str::<Self>(json)?;
    if version == 0 || version > PROJECT_VERSION {
      return Err(DotgridError::ProjectVersion);
    }
    if width == 0 || height == 0 {
      return Err(DotgridError::ProjectSize);
    }
    let expected =
      (width as usize).checked_mul(height as usize).ok_or(DotgridError::ProjectSize)?;
    if pixels.len() != expected {
      return Err(DotgridError::ProjectPixels { expected, actual: pixels.len() });
    }
    let palette = normalize_palette(palette)?;
    Ok(Self { version, width, height, palette, pixels })
  }

  /// Renders this document as a JSON string.
  #[inline]
  pub fn to_json(&self) -> Result<String, DotgridError> {
    Ok(serde_json::to_string(self)?)
  }

  /// Clones the pixel data out as a [`PixelGrid`].
  ///
  /// ## Failure
  /// * As [`PixelGrid::new`], when the fields were put together by hand
  ///   and don't agree.
  #[inline]
  pub fn grid(&self) -> Result<PixelGrid, DotgridError> {
    PixelGrid::new(self.width, self.height, self.pixels.clone())
  }

  /// Wraps a grid as a version-2 document with the default palette.
  #[inline]
  #[must_use]
  pub fn from_grid(grid: PixelGrid) -> Self {
    Self {
      version: PROJECT_VERSION,
      width: grid.width,
      height: grid.height,
      palette: default_palette(),
      pixels: grid.pixels,
    }
  }
}
