#![forbid(unsafe_code)]

//! The two checksums a PNG file carries: CRC-32 and Adler-32.

const CRC_TABLE: [u32; 256] = {
  let mut table = [0_u32; 256];
  let mut n = 0;
  while n < 256 {
    let mut c: u32 = n as _;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320 ^ (c >> 1);
      } else {
        c = c >> 1;
      }
      //
      k += 1;
    }
    table[n] = c;
    //
    n += 1;
  }
  table
};

/// The CRC-32 of a byte sequence, as PNG chunks use it.
///
/// This is the reflected-polynomial CRC from the PNG specification, the same
/// one zip and gzip use. Taking an iterator lets a chunk's type and data be
/// checksummed with a `chain`, no concatenation needed.
#[inline]
#[must_use]
pub fn png_crc(iter: impl Iterator<Item = u8>) -> u32 {
  let mut crc = u32::MAX;
  for byte in iter {
    let i = (crc ^ u32::from(byte)) as u8 as usize;
    crc = CRC_TABLE[i] ^ (crc >> 8);
  }
  crc ^ u32::MAX
}

/// The Adler-32 of a byte sequence, as zlib streams use it.
///
/// Two running sums reduced modulo 65521 (the largest prime under `2^16`),
/// packed as `(b << 16) | a`. The empty sequence comes out as 1.
#[inline]
#[must_use]
pub fn adler32(bytes: &[u8]) -> u32 {
  let mut a: u32 = 1;
  let mut b: u32 = 0;
  for byte in bytes.iter().copied() {
    a = (a + u32::from(byte)) % 65521;
    b = (b + a) % 65521;
  }
  (b << 16) | a
}

#[test]
fn test_png_crc_check_value() {
  // the standard check value for CRC-32
  assert_eq!(png_crc(b"123456789".iter().copied()), 0xCBF43926);
  assert_eq!(png_crc(b"".iter().copied()), 0);
  // IEND has no data, so every PNG ends with this CRC
  assert_eq!(png_crc(b"IEND".iter().copied()), 0xAE426082);
}

#[test]
fn test_adler32_check_values() {
  assert_eq!(adler32(b""), 1);
  assert_eq!(adler32(b"a"), 0x00620062);
  assert_eq!(adler32(b"Wikipedia"), 0x11E60398);
}
