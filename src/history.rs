//! A bounded undo/redo history of cloned snapshots.

use alloc::{collections::VecDeque, vec::Vec};

/// How many undo steps an [`UndoStack`] keeps unless told otherwise.
pub const DEFAULT_UNDO_LIMIT: usize = 20;

/// A two-stack snapshot history with a bounded past.
///
/// The intended protocol is "push before you mutate": right before changing
/// the live state, [`push`](Self::push) a snapshot of it, then edit in place.
/// [`undo`](Self::undo) and [`redo`](Self::redo) then trade the live state
/// for a stored one.
///
/// Every value is cloned as it enters the stack, and popped values are
/// returned by move, so a stored snapshot never aliases live state. With
/// `T = Vec<u32>` that clone is a full buffer copy.
///
/// When the past is full, pushing drops the oldest snapshot. Pushing also
/// always empties the redo side: editing after an undo abandons that branch
/// of history.
#[derive(Debug, Clone)]
pub struct UndoStack<T> {
  limit: usize,
  past: VecDeque<T>,
  future: Vec<T>,
}
impl<T: Clone> UndoStack<T> {
  /// Makes an empty history keeping at most `limit` undo steps.
  ///
  /// A `limit` of 0 is bumped to 1 so the stack is never useless.
  #[inline]
  #[must_use]
  pub fn new(limit: usize) -> Self {
    Self { limit: limit.max(1), past: VecDeque::new(), future: Vec::new() }
  }

  /// The most undo steps this stack will hold.
  #[inline]
  #[must_use]
  pub const fn limit(&self) -> usize {
    self.limit
  }

  /// Drops all stored snapshots, both past and future.
  #[inline]
  pub fn clear(&mut self) {
    self.past.clear();
    self.future.clear();
  }

  /// Stores a snapshot of `state` as the newest undo step.
  ///
  /// Call this with the pre-edit state, just before mutating it. Evicts the
  /// oldest snapshot when the limit is hit, and clears the redo side.
  pub fn push(&mut self, state: &T) {
    self.past.push_back(state.clone());
    while self.past.len() > self.limit {
      self.past.pop_front();
    }
    self.future.clear();
  }

  /// Is there a past snapshot to return to?
  #[inline]
  #[must_use]
  pub fn can_undo(&self) -> bool {
    !self.past.is_empty()
  }

  /// Is there an undone snapshot to re-apply?
  #[inline]
  #[must_use]
  pub fn can_redo(&self) -> bool {
    !self.future.is_empty()
  }

  /// Takes back the newest past snapshot, saving `current` for redo.
  ///
  /// Returns `None`, storing nothing, when there's no past. Otherwise the
  /// caller should adopt the returned value as the live state.
  pub fn undo(&mut self, current: &T) -> Option<T> {
    let prev = self.past.pop_back()?;
    self.future.push(current.clone());
    Some(prev)
  }

  /// Re-applies the most recently undone snapshot, saving `current` for undo.
  ///
  /// Returns `None`, storing nothing, when there's nothing to redo. The
  /// matching [`undo`](Self::undo) freed a past slot, so this never evicts.
  pub fn redo(&mut self, current: &T) -> Option<T> {
    let next = self.future.pop()?;
    self.past.push_back(current.clone());
    Some(next)
  }
}
impl<T: Clone> Default for UndoStack<T> {
  #[inline]
  fn default() -> Self {
    Self::new(DEFAULT_UNDO_LIMIT)
  }
}
