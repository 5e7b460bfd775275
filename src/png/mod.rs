//! Writing PNG files, and reading back the kind this crate writes.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! A PNG is an 8-byte signature followed by "chunks", each one a length, a
//! 4-byte type, the data, and a CRC-32 over the type and data. This crate
//! writes the minimum layout: one `IHDR` describing an 8-bit RGBA image, one
//! `IDAT` holding the pixel data, and the empty `IEND` trailer.
//!
//! The pixel data inside `IDAT` is a zlib stream, and here's the trick this
//! module is built around: zlib's DEFLATE format has a "stored" block type
//! that carries up to 65535 bytes completely uncompressed. Emitting only
//! stored blocks produces a file that every PNG reader accepts without this
//! crate containing a compressor. Exports are bigger than they could be, but
//! pixel-art canvases are small and the output is bit-for-bit predictable.
//!
//! [`encode_png_from_argb`] is the whole export path. With the `miniz_oxide`
//! feature, [`decode_png_to_grid`] inflates such a file back into a
//! [`PixelGrid`](crate::PixelGrid) so exports can be verified.

mod checksum;
pub use checksum::*;

mod chunk;
pub use chunk::*;

mod zlib;
pub use zlib::*;

mod encode;
pub use encode::*;

#[cfg(feature = "miniz_oxide")]
mod decode;
#[cfg(feature = "miniz_oxide")]
pub use decode::*;
