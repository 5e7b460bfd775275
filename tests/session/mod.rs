use dotgrid::{
  project::Project,
  session::{sanitize_base_name, EditorSession, DEFAULT_FILE_NAME},
  storage::{load_project, KeyValueStore, MemoryStore, DEFAULT_STORAGE_KEY},
  DotgridError, PaintMode, Tool, DEFAULT_UNDO_LIMIT,
};

#[test]
fn test_sanitize_base_name() {
  assert_eq!(sanitize_base_name("  my art.png "), "my art");
  assert_eq!(sanitize_base_name(""), DEFAULT_FILE_NAME);
  assert_eq!(sanitize_base_name("   "), DEFAULT_FILE_NAME);
  assert_eq!(sanitize_base_name(".png"), DEFAULT_FILE_NAME);
  // only the last extension is dropped
  assert_eq!(sanitize_base_name("piece.tar.gz"), "piece.tar");
  // a trailing dot run isn't an extension
  assert_eq!(sanitize_base_name("dots..."), "dots...");
  // each forbidden character becomes an underscore
  assert_eq!(sanitize_base_name("a/b:c*d?e\"f<g>h|i\\j"), "a_b_c_d_e_f_g_h_i_j");
  // runs collapse to a single underscore
  assert_eq!(sanitize_base_name("a//::**b"), "a_b");
}

#[test]
fn test_session_starts_clean() {
  let s = EditorSession::new().unwrap();
  assert_eq!(s.grid().width, 32);
  assert_eq!(s.grid().height, 32);
  assert!(s.grid().pixels.iter().all(|&p| p == 0));
  assert_eq!(s.palette().len(), 17);
  assert_eq!(s.tool(), Tool::Pencil);
  assert_eq!(s.color_index(), 0);
  assert_eq!(s.selected_argb(), 0xFF00_0000);
  assert_eq!(s.file_name(), DEFAULT_FILE_NAME);
  assert!(!s.dirty());
  assert!(!s.can_undo());
  assert!(!s.can_redo());
}

#[test]
fn test_session_stroke_pushes_one_snapshot() {
  let mut s = EditorSession::with_size(8).unwrap();
  s.select_color(4); // opaque red
  s.begin_stroke();
  s.apply_at(1, 1, PaintMode::Draw);
  s.apply_at(2, 1, PaintMode::Draw);
  s.apply_at(3, 1, PaintMode::Draw);
  s.end_stroke();
  assert!(s.dirty());
  assert_eq!(s.grid().get(2, 1), 0xFFFF_0000);

  // one undo reverts the whole stroke
  assert!(s.undo());
  assert!(s.grid().pixels.iter().all(|&p| p == 0));
  assert!(!s.can_undo());

  // and one redo brings it back
  assert!(s.redo());
  assert_eq!(s.grid().get(1, 1), 0xFFFF_0000);
  assert_eq!(s.grid().get(3, 1), 0xFFFF_0000);
}

#[test]
fn test_session_strokes_undo_independently() {
  let mut s = EditorSession::with_size(4).unwrap();
  s.select_color(1); // white
  s.begin_stroke();
  s.apply_at(0, 0, PaintMode::Draw);
  s.end_stroke();
  s.begin_stroke();
  s.apply_at(1, 0, PaintMode::Draw);
  s.end_stroke();

  assert!(s.undo());
  assert_eq!(s.grid().get(1, 0), 0);
  assert_eq!(s.grid().get(0, 0), 0xFFFF_FFFF);
  assert!(s.undo());
  assert_eq!(s.grid().get(0, 0), 0);
  assert!(!s.can_undo());

  // editing again abandons the redo branch
  assert!(s.can_redo());
  s.begin_stroke();
  s.apply_at(2, 2, PaintMode::Draw);
  s.end_stroke();
  assert!(!s.can_redo());
}

#[test]
fn test_session_undo_depth_is_bounded() {
  let mut s = EditorSession::with_size(2).unwrap();
  s.select_color(1);
  for i in 0..25 {
    s.begin_stroke();
    s.apply_at(0, 0, if i % 2 == 0 { PaintMode::Draw } else { PaintMode::Erase });
    s.end_stroke();
  }
  let mut undone = 0;
  while s.undo() {
    undone += 1;
  }
  assert_eq!(undone, DEFAULT_UNDO_LIMIT);
}

#[test]
fn test_session_fill_erase_and_bounds() {
  let mut s = EditorSession::with_size(4).unwrap();
  s.select_color(9); // opaque blue
  s.set_tool(Tool::Fill);
  s.begin_stroke();
  s.apply_at(0, 0, PaintMode::Draw);
  s.end_stroke();
  assert!(s.grid().pixels.iter().all(|&p| p == 0xFF00_00FF));

  s.set_tool(Tool::Pencil);
  s.begin_stroke();
  s.apply_at(2, 2, PaintMode::Erase);
  s.end_stroke();
  assert_eq!(s.grid().get(2, 2), 0);
  assert_eq!(s.grid().get(1, 1), 0xFF00_00FF);

  // an out-of-bounds stroke doesn't even push a snapshot
  s.begin_stroke();
  s.apply_at(99, 0, PaintMode::Draw);
  s.end_stroke();
  assert!(s.undo());
  assert!(s.undo());
  assert!(!s.can_undo());
}

#[test]
fn test_session_eyedropper_picks_and_switches_tool() {
  let mut s = EditorSession::with_size(4).unwrap();
  s.select_color(5); // orange
  s.begin_stroke();
  s.apply_at(1, 1, PaintMode::Draw);
  s.end_stroke();

  s.select_color(0);
  s.set_tool(Tool::Eyedropper);
  s.begin_stroke();
  s.apply_at(1, 1, PaintMode::Draw);
  s.end_stroke();
  assert_eq!(s.color_index(), 5);
  assert_eq!(s.tool(), Tool::Pencil);

  // a fully transparent pixel is ignored and the tool stays
  s.set_tool(Tool::Eyedropper);
  s.begin_stroke();
  s.apply_at(0, 0, PaintMode::Draw);
  s.end_stroke();
  assert_eq!(s.color_index(), 5);
  assert_eq!(s.tool(), Tool::Eyedropper);

  // picking isn't an edit: only the paint stroke left a snapshot
  assert!(s.undo());
  assert!(!s.can_undo());
}

#[test]
fn test_session_eyedropper_prefers_exact_palette_match() {
  let mut s = EditorSession::with_size(4).unwrap();
  assert!(s.set_custom_color("#123456"));
  s.select_color(16);
  s.begin_stroke();
  s.apply_at(2, 2, PaintMode::Draw);
  s.end_stroke();

  s.select_color(0);
  s.set_tool(Tool::Eyedropper);
  s.begin_stroke();
  s.apply_at(2, 2, PaintMode::Draw);
  s.end_stroke();
  assert_eq!(s.color_index(), 16);
}

#[test]
fn test_session_custom_color_validation() {
  let mut s = EditorSession::with_size(4).unwrap();
  assert!(s.set_custom_color("#a1b2c3"));
  assert_eq!(s.custom_color(), "#a1b2c3");
  assert_eq!(s.palette()[16], "#a1b2c3");
  assert!(s.dirty());

  // rejected: no '#', wrong length, bad digit
  assert!(!s.set_custom_color("a1b2c3"));
  assert!(!s.set_custom_color("#a1b2c"));
  assert!(!s.set_custom_color("#a1b2c3d4"));
  assert!(!s.set_custom_color("#a1b2cg"));
  assert_eq!(s.custom_color(), "#a1b2c3");
}

#[test]
fn test_session_export_names() {
  let mut s = EditorSession::with_size(8).unwrap();
  s.set_file_name("  my art.png ");
  assert_eq!(s.base_name(), "my art");
  assert_eq!(s.png_file_name(8), "my art_8x8@8x.png");
  assert_eq!(s.project_file_name(), "my art_8x8.json");
}

#[test]
fn test_session_export_png_decodes() {
  let mut s = EditorSession::with_size(4).unwrap();
  s.select_color(4);
  s.begin_stroke();
  s.apply_at(0, 0, PaintMode::Draw);
  s.end_stroke();

  let png = s.export_png(2).unwrap();
  let back = dotgrid::png::decode_png_to_grid(&png).unwrap();
  assert_eq!(back.width, 8);
  assert_eq!(back.height, 8);
  assert_eq!(back.get(1, 1), 0xFFFF_0000);
  assert_eq!(back.get(2, 0), 0);
}

#[test]
fn test_session_save_then_import_round_trip() {
  let mut s = EditorSession::with_size(4).unwrap();
  s.select_color(7); // opaque green
  s.begin_stroke();
  s.apply_at(3, 3, PaintMode::Draw);
  s.end_stroke();
  assert!(s.set_custom_color("#445566"));
  assert!(s.dirty());

  let mut store = MemoryStore::new();
  s.save(&mut store, DEFAULT_STORAGE_KEY).unwrap();
  assert!(!s.dirty());

  let loaded = load_project(&store, DEFAULT_STORAGE_KEY).unwrap();
  let mut fresh = EditorSession::new().unwrap();
  fresh.import_project(loaded).unwrap();
  assert_eq!(fresh.grid(), s.grid());
  assert_eq!(fresh.palette(), s.palette());
  assert!(!fresh.dirty());
  assert!(!fresh.can_undo());
}

#[test]
fn test_session_dirty_survives_failed_save() {
  struct FullStore;
  impl KeyValueStore for FullStore {
    fn get(&self, _key: &str) -> Option<String> {
      None
    }
    fn set(&mut self, _key: &str, _value: &str) -> bool {
      false
    }
  }

  let mut s = EditorSession::with_size(4).unwrap();
  s.select_color(2);
  s.begin_stroke();
  s.apply_at(1, 1, PaintMode::Draw);
  s.end_stroke();
  assert!(s.dirty());

  // the edits are still unsaved, so the flag has to stay up
  let mut store = FullStore;
  assert_eq!(s.save(&mut store, DEFAULT_STORAGE_KEY), Err(DotgridError::Storage));
  assert!(s.dirty());
}

#[test]
fn test_session_new_document_resets() {
  let mut s = EditorSession::with_size(8).unwrap();
  s.select_color(3);
  s.set_tool(Tool::Fill);
  s.set_file_name("wip");
  s.begin_stroke();
  s.apply_at(0, 0, PaintMode::Draw);
  s.end_stroke();
  assert!(s.set_custom_color("#999999"));

  s.new_document(16).unwrap();
  assert_eq!(s.grid().width, 16);
  assert!(s.grid().pixels.iter().all(|&p| p == 0));
  assert_eq!(s.palette()[16], "#000000");
  assert_eq!(s.tool(), Tool::Pencil);
  assert_eq!(s.file_name(), DEFAULT_FILE_NAME);
  assert!(!s.dirty());
  assert!(!s.can_undo());
  // the selected color survives a new document
  assert_eq!(s.color_index(), 3);

  // a zero size is refused and the session is untouched
  assert_eq!(s.new_document(0), Err(DotgridError::Dimensions));
  assert_eq!(s.grid().width, 16);
}

#[test]
fn test_session_import_rejects_mismatched_documents() {
  let mut s = EditorSession::with_size(4).unwrap();
  let broken =
    Project { version: 2, width: 2, height: 2, palette: Vec::new(), pixels: vec![0; 3] };
  assert_eq!(
    s.import_project(broken),
    Err(DotgridError::PixelCount { expected: 4, actual: 3 })
  );
  assert_eq!(s.grid().width, 4);
}
