//! The live editing session: one document plus its interaction state.
//!
//! [`EditorSession`] is the piece a UI embeds. It owns the canvas, the
//! palette, the active tool, and the undo history, and it turns pointer
//! gestures into edits. The embedder forwards pointer-down / move / up as
//! [`begin_stroke`] / [`apply_at`] / [`end_stroke`] and gets
//! one-snapshot-per-stroke undo behavior in return.
//!
//! [`begin_stroke`]: EditorSession::begin_stroke
//! [`apply_at`]: EditorSession::apply_at
//! [`end_stroke`]: EditorSession::end_stroke

use alloc::{
  format,
  string::{String, ToString},
  vec::Vec,
};

use crate::*;

/// The document name a fresh session uses.
pub const DEFAULT_FILE_NAME: &str = "dotgrid";

/// Cleans a user-typed document name into an export-safe base name.
///
/// Whitespace is trimmed, one trailing `.ext` of ASCII letters and digits
/// is dropped, and each run of `\ / : * ? " < > |` becomes a single `_`.
/// A name with nothing left becomes [`DEFAULT_FILE_NAME`].
#[must_use]
pub fn sanitize_base_name(name: &str) -> String {
  let trimmed = name.trim();
  if trimmed.is_empty() {
    return DEFAULT_FILE_NAME.to_string();
  }
  let no_ext = match trimmed.rfind('.') {
    Some(dot)
      if dot + 1 < trimmed.len()
        && trimmed[dot + 1..].bytes().all(|b| b.is_ascii_alphanumeric()) =>
    {
      &trimmed[..dot]
    }
    _ => trimmed,
  };
  let mut base = String::new();
  let mut in_run = false;
  for c in no_ext.chars() {
    if matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
      if !in_run {
        base.push('_');
      }
      in_run = true;
    } else {
      base.push(c);
      in_run = false;
    }
  }
  if base.is_empty() {
    return DEFAULT_FILE_NAME.to_string();
  }
  base
}

/// A live document and every bit of interaction state around it.
///
/// The fields are private because they move together: the selected color
/// indexes the palette, the history snapshots match the canvas size, and
/// the per-stroke latch guards the history. Mutation goes through the
/// methods.
#[derive(Debug, Clone)]
pub struct EditorSession {
  grid: PixelGrid,
  palette: Vec<String>,
  color_index: usize,
  tool: Tool,
  file_name: String,
  history: UndoStack<Vec<u32>>,
  stroke_pushed: bool,
  dirty: bool,
}
impl EditorSession {
  /// A fresh session: transparent default-size canvas, default palette,
  /// pencil in hand.
  #[inline]
  pub fn new() -> Result<Self, DotgridError> {
    Self::with_size(project::DEFAULT_CANVAS_SIZE)
  }

  /// A fresh session with a square canvas of the given side length.
  ///
  /// ## Failure
  /// * `Dimensions` / `Alloc` as [`PixelGrid::create`].
  pub fn with_size(size: u32) -> Result<Self, DotgridError> {
    Ok(Self {
      grid: PixelGrid::create(size, size, ERASER_ARGB)?,
      palette: default_palette(),
      color_index: 0,
      tool: Tool::Pencil,
      file_name: DEFAULT_FILE_NAME.to_string(),
      history: UndoStack::default(),
      stroke_pushed: false,
      dirty: false,
    })
  }

  /// The canvas.
  #[inline]
  #[must_use]
  pub fn grid(&self) -> &PixelGrid {
    &self.grid
  }

  /// The palette: the 16 fixed entries, then the custom slot.
  #[inline]
  #[must_use]
  pub fn palette(&self) -> &[String] {
    &self.palette
  }

  /// Which palette entry the pencil and fill paint with.
  #[inline]
  #[must_use]
  pub const fn color_index(&self) -> usize {
    self.color_index
  }

  /// The active tool.
  #[inline]
  #[must_use]
  pub const fn tool(&self) -> Tool {
    self.tool
  }

  /// The document name, as typed. Export names run it through
  /// [`sanitize_base_name`] first.
  #[inline]
  #[must_use]
  pub fn file_name(&self) -> &str {
    &self.file_name
  }

  /// Are there edits newer than the last save?
  #[inline]
  #[must_use]
  pub const fn dirty(&self) -> bool {
    self.dirty
  }

  /// Is there a snapshot to undo to?
  #[inline]
  #[must_use]
  pub fn can_undo(&self) -> bool {
    self.history.can_undo()
  }

  /// Is there an undone snapshot to redo?
  #[inline]
  #[must_use]
  pub fn can_redo(&self) -> bool {
    self.history.can_redo()
  }

  /// Switches the active tool.
  #[inline]
  pub fn set_tool(&mut self, tool: Tool) {
    self.tool = tool;
  }

  /// Selects the palette entry to paint with.
  ///
  /// Returns `false`, changing nothing, when the index is out of range.
  #[inline]
  pub fn select_color(&mut self, index: usize) -> bool {
    if index < self.palette.len() {
      self.color_index = index;
      true
    } else {
      false
    }
  }

  /// Renames the document. The name is stored raw.
  #[inline]
  pub fn set_file_name(&mut self, name: &str) {
    self.file_name = name.to_string();
  }

  /// The ARGB value the selected palette entry paints.
  ///
  /// An out-of-range selection or an unparseable entry falls back to
  /// opaque black.
  #[must_use]
  pub fn selected_argb(&self) -> u32 {
    self
      .palette
      .get(self.color_index)
      .and_then(|hex| parse_hex_color(hex).ok())
      .unwrap_or(0xFF00_0000)
  }

  /// The current custom slot color.
  #[inline]
  #[must_use]
  pub fn custom_color(&self) -> &str {
    self.palette.get(PALETTE_16.len()).map(String::as_str).unwrap_or(DEFAULT_CUSTOM_COLOR)
  }

  /// Replaces the custom palette slot.
  ///
  /// Returns `false`, changing nothing, unless `hex` is a `#rrggbb` color
  /// and the palette has its custom slot.
  pub fn set_custom_color(&mut self, hex: &str) -> bool {
    if !is_hex_color(hex) {
      return false;
    }
    match self.palette.get_mut(PALETTE_16.len()) {
      Some(slot) => {
        *slot = hex.to_string();
        self.dirty = true;
        true
      }
      None => false,
    }
  }

  /// Starts a pointer stroke: the next edit pushes one undo snapshot.
  #[inline]
  pub fn begin_stroke(&mut self) {
    self.stroke_pushed = false;
  }

  /// Ends a pointer stroke.
  #[inline]
  pub fn end_stroke(&mut self) {
    self.stroke_pushed = false;
  }

  fn push_undo_once(&mut self) {
    if self.stroke_pushed {
      return;
    }
    self.history.push(&self.grid.pixels);
    self.stroke_pushed = true;
  }

  /// Applies the active tool at a canvas position.
  ///
  /// Out-of-bounds positions are ignored. The pencil and fill write the
  /// selected color, or [`ERASER_ARGB`] under [`PaintMode::Erase`], and
  /// push at most one undo snapshot per stroke. The eyedropper reads
  /// instead of writing: a fully transparent pixel is ignored, anything
  /// else selects the nearest palette entry and hands the tool back to
  /// the pencil.
  pub fn apply_at(&mut self, x: u32, y: u32, mode: PaintMode) {
    if !self.grid.in_bounds(x, y) {
      return;
    }
    if self.tool == Tool::Eyedropper {
      let picked = self.grid.get(x, y);
      if argb_alpha(picked) == 0 {
        return;
      }
      self.color_index = nearest_palette_index(&self.palette, picked);
      self.tool = Tool::Pencil;
      return;
    }
    let argb = match mode {
      PaintMode::Draw => self.selected_argb(),
      PaintMode::Erase => ERASER_ARGB,
    };
    self.push_undo_once();
    match self.tool {
      Tool::Fill => {
        apply_fill(&mut self.grid, x, y, argb);
      }
      _ => {
        apply_pencil(&mut self.grid, x, y, argb);
      }
    }
    self.dirty = true;
  }

  /// Steps the canvas back to the newest undo snapshot.
  ///
  /// Returns `false`, changing nothing, when there's no past.
  pub fn undo(&mut self) -> bool {
    match self.history.undo(&self.grid.pixels) {
      Some(prev) => {
        self.grid.pixels = prev;
        self.dirty = true;
        true
      }
      None => false,
    }
  }

  /// Re-applies the most recently undone snapshot.
  ///
  /// Returns `false`, changing nothing, when there's nothing to redo.
  pub fn redo(&mut self) -> bool {
    match self.history.redo(&self.grid.pixels) {
      Some(next) => {
        self.grid.pixels = next;
        self.dirty = true;
        true
      }
      None => false,
    }
  }

  /// Replaces the document with a fresh transparent canvas of the given
  /// square size, resetting everything but the selected color.
  ///
  /// ## Failure
  /// * `Dimensions` / `Alloc` as [`PixelGrid::create`]; the session is
  ///   untouched on failure.
  pub fn new_document(&mut self, size: u32) -> Result<(), DotgridError> {
    self.grid = PixelGrid::create(size, size, ERASER_ARGB)?;
    self.palette = default_palette();
    self.history.clear();
    self.stroke_pushed = false;
    self.dirty = false;
    self.tool = Tool::Pencil;
    self.file_name = DEFAULT_FILE_NAME.to_string();
    log::info!("session: new {}x{} document", size, size);
    Ok(())
  }

  /// Adopts a loaded document: its pixels and palette replace the live
  /// ones and the history is cleared.
  ///
  /// A [`project::Project`] doesn't carry a document name; call
  /// [`set_file_name`](Self::set_file_name) if you have one.
  ///
  /// ## Failure
  /// * As [`PixelGrid::new`], when the project's fields don't agree; the
  ///   session is untouched on failure.
  pub fn import_project(&mut self, document: project::Project) -> Result<(), DotgridError> {
    let project::Project { width, height, palette, pixels, .. } = document;
    self.grid = PixelGrid::new(width, height, pixels)?;
    self.palette = palette;
    self.history.clear();
    self.stroke_pushed = false;
    self.dirty = false;
    self.tool = Tool::Pencil;
    log::info!("session: imported {}x{} document", width, height);
    Ok(())
  }

  /// The canvas and palette as a saveable document.
  #[must_use]
  pub fn export_project(&self) -> project::Project {
    project::Project {
      version: project::PROJECT_VERSION,
      width: self.grid.width,
      height: self.grid.height,
      palette: self.palette.clone(),
      pixels: self.grid.clone_pixels(),
    }
  }

  /// Encodes the canvas as a PNG at an integer scale.
  ///
  /// ## Failure
  /// * As [`png::encode_png_from_argb`].
  #[inline]
  pub fn export_png(&self, scale: u32) -> Result<Vec<u8>, DotgridError> {
    self.grid.to_png(png::PngEncodeOptions { scale })
  }

  /// Saves the document at `key` and marks the session clean.
  ///
  /// ## Failure
  /// * As [`storage::save_project`]; the dirty flag is kept on failure.
  pub fn save(
    &mut self, store: &mut impl storage::KeyValueStore, key: &str,
  ) -> Result<(), DotgridError> {
    storage::save_project(store, key, &self.export_project())?;
    self.dirty = false;
    Ok(())
  }

  /// The sanitized document name.
  #[inline]
  #[must_use]
  pub fn base_name(&self) -> String {
    sanitize_base_name(&self.file_name)
  }

  /// The download name for a PNG export: `{base}_{w}x{h}@{s}x.png`.
  #[must_use]
  pub fn png_file_name(&self, scale: u32) -> String {
    format!("{}_{}x{}@{}x.png", self.base_name(), self.grid.width, self.grid.height, scale)
  }

  /// The download name for a project export: `{base}_{w}x{h}.json`.
  #[must_use]
  pub fn project_file_name(&self) -> String {
    format!("{}_{}x{}.json", self.base_name(), self.grid.width, self.grid.height)
  }
}
