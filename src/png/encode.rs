//! Turning an ARGB pixel buffer into a complete PNG byte stream.

use core::mem::size_of;

use bytemuck::{bytes_of, Pod, Zeroable};

use alloc::vec::Vec;

use crate::{grid::pixel_count, rgba_from_argb, DotgridError, PixelGrid};

use super::{push_chunk, zlib_stored, ChunkTy, CHUNK_OVERHEAD, PNG_SIGNATURE};

/// A `u32` stored as big-endian bytes.
///
/// This stores only an array of bytes, so unlike a normal `u32` it has an
/// alignment of 1, which is what lets [`IhdrData`] be a plain byte struct.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct U32BE([u8; 4]);
impl U32BE {
  /// Convert this value to a native `u32`
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }
  /// Make a value from a native `u32`
  #[inline]
  #[must_use]
  pub const fn from_u32(u: u32) -> Self {
    Self(u.to_be_bytes())
  }
}
impl core::fmt::Debug for U32BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U32BE").field(&self.to_u32()).finish()
  }
}

/// The 13 data bytes of an `IHDR` chunk, laid out as they appear on disk.
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub struct IhdrData {
  /// width in pixels, big-endian
  pub width: U32BE,
  /// height in pixels, big-endian
  pub height: U32BE,
  /// bits per channel
  pub bit_depth: u8,
  /// 6 is RGBA
  pub color_type: u8,
  /// 0 is the only defined method
  pub compression_method: u8,
  /// 0 is the only defined method
  pub filter_method: u8,
  /// 0 is non-interlaced
  pub interlace_method: u8,
}
impl IhdrData {
  /// The header for an 8-bit RGBA non-interlaced image, the only kind this
  /// crate writes.
  #[inline]
  #[must_use]
  pub const fn rgba8(width: u32, height: u32) -> Self {
    Self {
      width: U32BE::from_u32(width),
      height: U32BE::from_u32(height),
      bit_depth: 8,
      color_type: 6,
      compression_method: 0,
      filter_method: 0,
      interlace_method: 0,
    }
  }
}

/// Options for [`encode_png_from_argb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngEncodeOptions {
  /// Integer upscale factor applied to both dimensions. 0 acts as 1.
  ///
  /// Each source pixel becomes a `scale` by `scale` square of identical
  /// output pixels, so a 32x32 canvas exported at 16 is a crisp 512x512.
  pub scale: u32,
}
impl Default for PngEncodeOptions {
  #[inline]
  fn default() -> Self {
    Self { scale: 1 }
  }
}

/// Encodes an ARGB pixel buffer as a complete PNG file.
///
/// The buffer is row-major, `pixels[y * width + x]`, each word packing the
/// channels as `(a << 24) | (r << 16) | (g << 8) | b`. The output stream is
/// the PNG signature, an `IHDR` for an 8-bit RGBA non-interlaced image of
/// the (scaled) dimensions, one `IDAT` holding every scanline with filter
/// type 0 in a stored-block zlib stream, and `IEND`. Alpha comes through
/// untouched, so transparent pixels stay transparent.
///
/// ## Failure
/// * `Dimensions` if either dimension is 0 or the pixel count overflows.
/// * `PixelCount` if the buffer length isn't `width * height`.
/// * `CheckedMath` if the scaled output size overflows.
/// * `Alloc` if a buffer can't be allocated.
pub fn encode_png_from_argb(
  pixels: &[u32], width: u32, height: u32, options: PngEncodeOptions,
) -> Result<Vec<u8>, DotgridError> {
  let expected = pixel_count(width, height)?;
  if pixels.len() != expected {
    return Err(DotgridError::PixelCount { expected, actual: pixels.len() });
  }
  let scale = options.scale.max(1);
  let out_w = width.checked_mul(scale).ok_or(DotgridError::CheckedMath)?;
  let out_h = height.checked_mul(scale).ok_or(DotgridError::CheckedMath)?;

  // each scanline is a filter byte then 4 bytes per pixel
  let row_len = (out_w as usize)
    .checked_mul(4)
    .and_then(|n| n.checked_add(1))
    .ok_or(DotgridError::CheckedMath)?;
  let raw_len = row_len.checked_mul(out_h as usize).ok_or(DotgridError::CheckedMath)?;

  let mut raw: Vec<u8> = Vec::new();
  raw.try_reserve(raw_len)?;
  for y in 0..height {
    let row_start = (y as usize) * (width as usize);
    for _ in 0..scale {
      raw.push(0);
      for x in 0..width {
        let p = rgba_from_argb(pixels[row_start + (x as usize)]);
        let rgba = [p.r, p.g, p.b, p.a];
        for _ in 0..scale {
          raw.extend_from_slice(&rgba);
        }
      }
    }
  }
  debug_assert_eq!(raw.len(), raw_len);

  let idat = zlib_stored(&raw)?;
  let ihdr = IhdrData::rgba8(out_w, out_h);

  let total = PNG_SIGNATURE.len()
    + (CHUNK_OVERHEAD + size_of::<IhdrData>())
    + (CHUNK_OVERHEAD + idat.len())
    + CHUNK_OVERHEAD;
  let mut out = Vec::new();
  out.try_reserve(total)?;
  out.extend_from_slice(&PNG_SIGNATURE);
  push_chunk(&mut out, ChunkTy::IHDR, bytes_of(&ihdr));
  push_chunk(&mut out, ChunkTy::IDAT, &idat);
  push_chunk(&mut out, ChunkTy::IEND, &[]);
  log::debug!("png: encoded {}x{} at {}x as {} bytes", width, height, scale, out.len());
  Ok(out)
}

impl PixelGrid {
  /// Encodes this grid as a complete PNG file.
  ///
  /// See [`encode_png_from_argb`] for the layout and failure cases.
  #[inline]
  pub fn to_png(&self, options: PngEncodeOptions) -> Result<Vec<u8>, DotgridError> {
    encode_png_from_argb(&self.pixels, self.width, self.height, options)
  }
}
