#![forbid(unsafe_code)]

//! Minimal zlib framing using only "stored" DEFLATE blocks.

use alloc::vec::Vec;

use crate::DotgridError;

use super::adler32;

/// The most payload bytes one stored DEFLATE block can carry.
pub const MAX_STORED_BLOCK_LEN: usize = 0xFFFF;

/// How many stored blocks [`zlib_stored`] uses for an input length.
///
/// Always at least 1: a stream with no blocks would never have a block with
/// the final bit set, and inflaters reject that.
#[inline]
#[must_use]
pub const fn stored_block_count(len: usize) -> usize {
  let blocks = (len + MAX_STORED_BLOCK_LEN - 1) / MAX_STORED_BLOCK_LEN;
  if blocks == 0 {
    1
  } else {
    blocks
  }
}

/// Wraps bytes as a zlib stream without compressing them.
///
/// The output is the 2-byte zlib header, the input split into stored DEFLATE
/// blocks of up to [`MAX_STORED_BLOCK_LEN`] bytes each, and the big-endian
/// Adler-32 of the input. Each block is a flag byte (bit 0 marks the last
/// block; the zeroed type bits mean "stored"), the little-endian payload
/// length, the length's one's complement, and the payload verbatim.
///
/// Any spec-conforming inflater gets the input back out, so this is the
/// cheapest possible valid `IDAT` payload. Empty input still produces one
/// (empty, final) block.
///
/// ## Failure
/// * `Alloc` if the output buffer can't be allocated. The exact output size
///   is known up front, so this is the only failure point.
pub fn zlib_stored(data: &[u8]) -> Result<Vec<u8>, DotgridError> {
  let total = 2 + stored_block_count(data.len()) * 5 + data.len() + 4;
  let mut out = Vec::new();
  out.try_reserve(total)?;

  // CMF: deflate with a 32K window. FLG: no dictionary, check bits valid.
  out.extend_from_slice(&[0x78, 0x01]);

  let mut remaining = data;
  loop {
    let take = remaining.len().min(MAX_STORED_BLOCK_LEN);
    let (block, rest) = remaining.split_at(take);
    let bfinal = rest.is_empty();
    let len = block.len() as u16;
    out.push(bfinal as u8);
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&(!len).to_le_bytes());
    out.extend_from_slice(block);
    remaining = rest;
    if bfinal {
      break;
    }
  }

  out.extend_from_slice(&adler32(data).to_be_bytes());
  Ok(out)
}

#[test]
fn test_stored_block_count() {
  assert_eq!(stored_block_count(0), 1);
  assert_eq!(stored_block_count(1), 1);
  assert_eq!(stored_block_count(65535), 1);
  assert_eq!(stored_block_count(65536), 2);
  assert_eq!(stored_block_count(2 * 65535), 2);
  assert_eq!(stored_block_count(2 * 65535 + 1), 3);
}
