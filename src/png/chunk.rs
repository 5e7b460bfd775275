#![forbid(unsafe_code)]

//! PNG chunk framing: `[length][type][data][crc]`.

use core::fmt::{Debug, Write};

use alloc::vec::Vec;

use crate::DotgridError;

use super::png_crc;

/// The first eight bytes of a PNG datastream always match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG's initial 8 bytes are correct.
///
/// * If this is the case, the rest of the bytes are very likely PNG data.
/// * If this is *not* the case, the rest of the bytes are very likely *not*
///   PNG data.
#[inline]
#[must_use]
pub const fn is_png_signature_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// A PNG chunk's 4-byte type code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkTy(pub(crate) [u8; 4]);
impl ChunkTy {
  /// Image header.
  pub const IHDR: Self = Self(*b"IHDR");
  /// Image data.
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image trailer.
  pub const IEND: Self = Self(*b"IEND");
}
impl Debug for ChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char(self.0[0] as char)?;
    f.write_char(self.0[1] as char)?;
    f.write_char(self.0[2] as char)?;
    f.write_char(self.0[3] as char)?;
    Ok(())
  }
}

/// Frames `data` as one PNG chunk of the given type.
///
/// The output is the big-endian data length, the type code, the data, and
/// the CRC-32 of the type and data together. The framing doesn't care what
/// the type or data mean.
///
/// ## Failure
/// * `Alloc` if the output buffer can't be allocated.
pub fn png_chunk(ty: ChunkTy, data: &[u8]) -> Result<Vec<u8>, DotgridError> {
  let mut out = Vec::new();
  out.try_reserve(CHUNK_OVERHEAD + data.len())?;
  push_chunk(&mut out, ty, data);
  Ok(out)
}

/// Bytes a chunk adds around its data: length (4) + type (4) + crc (4).
pub(crate) const CHUNK_OVERHEAD: usize = 12;

/// Appends one framed chunk to an output buffer.
pub(crate) fn push_chunk(out: &mut Vec<u8>, ty: ChunkTy, data: &[u8]) {
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(&ty.0);
  out.extend_from_slice(data);
  let crc = png_crc(ty.0.iter().copied().chain(data.iter().copied()));
  out.extend_from_slice(&crc.to_be_bytes());
}

/// An unparsed chunk from a PNG.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngRawChunk<'b> {
  ty: ChunkTy,
  data: &'b [u8],
  declared_crc: u32,
}
impl<'b> PngRawChunk<'b> {
  /// The chunk's type code.
  #[inline]
  #[must_use]
  pub const fn ty(&self) -> ChunkTy {
    self.ty
  }
  /// The chunk's data slice.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  /// The CRC the chunk claims for itself.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// The CRC the chunk's type and data actually hash to.
  #[inline]
  #[must_use]
  pub fn compute_actual_crc(&self) -> u32 {
    png_crc(self.ty.0.iter().copied().chain(self.data.iter().copied()))
  }
  /// Does the declared CRC match the actual data?
  #[inline]
  #[must_use]
  pub fn crc_is_valid(&self) -> bool {
    self.declared_crc == self.compute_actual_crc()
  }
}
impl Debug for PngRawChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngRawChunk")
      .field("ty", &self.ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// Iteration never panics: truncated or garbage input just ends the
/// iterator early.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngRawChunkIter<'b>(&'b [u8]);
impl<'b> PngRawChunkIter<'b> {
  /// Makes an iterator over a PNG's chunks.
  ///
  /// ## Failure
  /// This function always returns an iterator. However, if the slice doesn't
  /// start with the correct PNG signature then an empty slice will be stored,
  /// and the first call to `next` will end up returning `None`.
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8]) -> Self {
    match bytes {
      [137, 80, 78, 71, 13, 10, 26, 10, rest @ ..] => Self(rest),
      _ => Self(&[]),
    }
  }
}
impl<'b> Iterator for PngRawChunkIter<'b> {
  type Item = PngRawChunk<'b>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let len: usize = if self.0.len() >= 4 {
      let (len_bytes, rest) = self.0.split_at(4);
      self.0 = rest;
      u32::from_be_bytes(len_bytes.try_into().unwrap()) as usize
    } else {
      return None;
    };
    let ty: ChunkTy = if self.0.len() >= 4 {
      let (ty_bytes, rest) = self.0.split_at(4);
      self.0 = rest;
      ChunkTy(ty_bytes.try_into().unwrap())
    } else {
      return None;
    };
    let data: &'b [u8] = if self.0.len() >= len {
      let (data, rest) = self.0.split_at(len);
      self.0 = rest;
      data
    } else {
      return None;
    };
    let declared_crc: u32 = if self.0.len() >= 4 {
      let (decl_bytes, rest) = self.0.split_at(4);
      self.0 = rest;
      u32::from_be_bytes(decl_bytes.try_into().unwrap())
    } else {
      return None;
    };
    Some(PngRawChunk { ty, data, declared_crc })
  }
}
