#![forbid(unsafe_code)]

//! Decoding the subset of PNG that [`encode_png_from_argb`] writes.
//!
//! [`encode_png_from_argb`]: super::encode_png_from_argb

use alloc::vec::Vec;

use crate::{argb_from_channels, grid::pixel_count, DotgridError, PixelGrid};

use super::{ChunkTy, PngRawChunkIter};

/// Decodes an 8-bit RGBA non-interlaced PNG back into a [`PixelGrid`].
///
/// This is the mirror of [`encode_png_from_argb`], not a general PNG
/// reader: every scanline must use filter type 0, and chunk CRCs and the
/// zlib adler checksum are all verified rather than skipped.
///
/// ## Failure
/// * `Parse` if the stream is damaged: bad signature, missing or
///   malformed `IHDR`, a failed checksum, or the wrong amount of image
///   data.
/// * `Unsupported` if the stream is valid PNG but outside the subset:
///   a pixel format other than RGBA8, interlacing, or a filtered
///   scanline.
/// * `Dimensions` / `CheckedMath` / `Alloc` as the sizes demand.
///
/// [`encode_png_from_argb`]: super::encode_png_from_argb
#[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
pub fn decode_png_to_grid(bytes: &[u8]) -> Result<PixelGrid, DotgridError> {
  let mut chunks = PngRawChunkIter::new(bytes);
  let ihdr = chunks.next().ok_or(DotgridError::Parse)?;
  if ihdr.ty() != ChunkTy::IHDR || !ihdr.crc_is_valid() {
    return Err(DotgridError::Parse);
  }
  let data = ihdr.data();
  if data.len() != 13 {
    return Err(DotgridError::Parse);
  }
  let (width, height) = match data {
    [w0, w1, w2, w3, h0, h1, h2, h3, 8, 6, 0, 0, 0] => (
      u32::from_be_bytes([*w0, *w1, *w2, *w3]),
      u32::from_be_bytes([*h0, *h1, *h2, *h3]),
    ),
    _ => return Err(DotgridError::Unsupported),
  };
  let count = pixel_count(width, height)?;
  let row_len = (width as usize)
    .checked_mul(4)
    .and_then(|n| n.checked_add(1))
    .ok_or(DotgridError::CheckedMath)?;
  let raw_len = row_len.checked_mul(height as usize).ok_or(DotgridError::CheckedMath)?;

  if PngRawChunkIter::new(bytes).any(|c| c.ty() == ChunkTy::IDAT && !c.crc_is_valid()) {
    return Err(DotgridError::Parse);
  }

  let mut raw: Vec<u8> = Vec::new();
  raw.try_reserve(raw_len)?;
  raw.resize(raw_len, 0);
  let zlib_slices =
    PngRawChunkIter::new(bytes).filter(|c| c.ty() == ChunkTy::IDAT).map(|c| c.data());
  let decompressed =
    miniz_oxide::inflate::decompress_slice_iter_to_slice(&mut raw, zlib_slices, true, false)
      .map_err(|_| DotgridError::Parse)?;
  if decompressed != raw_len {
    return Err(DotgridError::Parse);
  }

  let mut pixels: Vec<u32> = Vec::new();
  pixels.try_reserve(count)?;
  for row in raw.chunks_exact(row_len) {
    match row {
      [0, rest @ ..] => {
        for chunk in rest.chunks_exact(4) {
          let [r, g, b, a]: [u8; 4] = chunk.try_into().unwrap();
          pixels.push(argb_from_channels(a, r, g, b));
        }
      }
      _ => return Err(DotgridError::Unsupported),
    }
  }
  log::debug!("png: decoded {}x{} image", width, height);
  PixelGrid::new(width, height, pixels)
}
