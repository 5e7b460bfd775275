#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A pixel-art editor core.
//!
//! This crate holds everything a fixed-size pixel editor needs short of a
//! screen: an ARGB pixel grid ([`PixelGrid`]), pencil / flood-fill /
//! eyedropper tools, a bounded undo history ([`UndoStack`]), a JSON project
//! document with injected key-value persistence, and a PNG exporter that
//! writes uncompressed-but-valid files any image viewer can open.
//!
//! Pixels are `u32` values packing the channels as
//! `(alpha << 24) | (red << 16) | (green << 8) | blue`. A grid is a flat
//! row-major buffer of those words plus its dimensions, and every operation
//! here takes the buffer and dimensions explicitly. Nothing in this crate
//! touches a display, the file system, or a global; the intended embedder is
//! a UI layer that owns one [`session::EditorSession`] and forwards pointer
//! input to it.
//!
//! ## Crate Features
//! * `png`: the PNG encoder ([`png::encode_png_from_argb`]).
//! * `project`: the JSON project codec and key-value storage (pulls in
//!   `serde` / `serde_json`).
//! * `miniz_oxide`: a decoder for the subset of PNG this crate emits, used
//!   to verify exports round-trip.

extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod color;
pub use color::*;

pub mod error;
pub use error::*;

pub mod grid;
pub use grid::*;

pub mod history;
pub use history::*;

pub mod palette;
pub use palette::*;

pub mod tools;
pub use tools::*;

#[cfg(feature = "png")]
#[cfg_attr(docs_rs, doc(cfg(feature = "png")))]
pub mod png;

#[cfg(feature = "project")]
#[cfg_attr(docs_rs, doc(cfg(feature = "project")))]
pub mod project;

#[cfg(feature = "project")]
#[cfg_attr(docs_rs, doc(cfg(feature = "project")))]
pub mod storage;

#[cfg(all(feature = "png", feature = "project"))]
#[cfg_attr(docs_rs, doc(cfg(all(feature = "png", feature = "project"))))]
pub mod session;
