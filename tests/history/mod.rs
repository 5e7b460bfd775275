use dotgrid::{UndoStack, DEFAULT_UNDO_LIMIT};

#[test]
fn test_UndoStack_push_before_mutate_round_trip() {
  let mut stack: UndoStack<Vec<u32>> = UndoStack::default();
  assert_eq!(stack.limit(), DEFAULT_UNDO_LIMIT);
  assert!(!stack.can_undo());
  assert!(!stack.can_redo());

  let mut live = vec![0_u32; 4];
  stack.push(&live);
  live[0] = 7;

  let prev = stack.undo(&live).unwrap();
  assert_eq!(prev, vec![0, 0, 0, 0]);
  assert!(stack.can_redo());

  let next = stack.redo(&prev).unwrap();
  assert_eq!(next, vec![7, 0, 0, 0]);
  assert!(stack.can_undo());
  assert!(!stack.can_redo());
}

#[test]
fn test_UndoStack_evicts_oldest_at_limit() {
  let mut stack: UndoStack<u32> = UndoStack::new(3);
  // five edits: snapshot each state before "mutating" to the next
  for state in 0..5 {
    stack.push(&state);
  }
  // only the newest three snapshots survive
  assert_eq!(stack.undo(&5), Some(4));
  assert_eq!(stack.undo(&4), Some(3));
  assert_eq!(stack.undo(&3), Some(2));
  assert_eq!(stack.undo(&2), None);
  assert!(!stack.can_undo());
  // the failed undo stored nothing, so redo still walks forward cleanly
  assert_eq!(stack.redo(&2), Some(3));
  assert_eq!(stack.redo(&3), Some(4));
  assert_eq!(stack.redo(&4), Some(5));
  assert_eq!(stack.redo(&5), None);
}

#[test]
fn test_UndoStack_push_clears_redo() {
  let mut stack: UndoStack<u32> = UndoStack::new(8);
  stack.push(&1);
  assert_eq!(stack.undo(&2), Some(1));
  assert!(stack.can_redo());

  // editing after an undo abandons the redo branch
  stack.push(&1);
  assert!(!stack.can_redo());
  assert_eq!(stack.redo(&9), None);
}

#[test]
fn test_UndoStack_limit_of_zero_is_bumped() {
  let stack: UndoStack<u32> = UndoStack::new(0);
  assert_eq!(stack.limit(), 1);
}

#[test]
fn test_UndoStack_clear_drops_both_sides() {
  let mut stack: UndoStack<u32> = UndoStack::new(4);
  stack.push(&1);
  stack.push(&2);
  assert_eq!(stack.undo(&3), Some(2));
  stack.clear();
  assert!(!stack.can_undo());
  assert!(!stack.can_redo());
}
