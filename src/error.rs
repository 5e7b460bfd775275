//! The crate's error type.

/// An error from the `dotgrid` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotgridError {
  /// The declared width and/or height of a grid is 0.
  Dimensions,

  /// A pixel buffer's length didn't match `width * height`.
  PixelCount {
    /// length that `width * height` calls for.
    expected: usize,
    /// length actually given.
    actual: usize,
  },

  /// Failed to parse the data given.
  Parse,

  /// The allocator couldn't give us enough space.
  Alloc,

  /// A checked math operation failed.
  CheckedMath,

  /// The input uses a feature this crate doesn't cover.
  Unsupported,

  /// A document's `version` field wasn't one this crate reads.
  #[cfg(feature = "project")]
  ProjectVersion,

  /// A document's `width` or `height` was 0, or the pixel count overflowed.
  #[cfg(feature = "project")]
  ProjectSize,

  /// A document's palette had the wrong number of entries.
  #[cfg(feature = "project")]
  ProjectPalette,

  /// A document's pixel list didn't match its declared dimensions.
  #[cfg(feature = "project")]
  ProjectPixels {
    /// length that `width * height` calls for.
    expected: usize,
    /// length actually given.
    actual: usize,
  },

  /// JSON for a document couldn't be read or written.
  #[cfg(feature = "project")]
  Json,

  /// The backing store refused a write.
  #[cfg(feature = "project")]
  Storage,
}
impl From<alloc::collections::TryReserveError> for DotgridError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::Alloc
  }
}
#[cfg(feature = "project")]
impl From<serde_json::Error> for DotgridError {
  #[inline]
  fn from(_: serde_json::Error) -> Self {
    Self::Json
  }
}
