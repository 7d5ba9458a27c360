use alloc::{boxed::Box, vec::Vec};

#[cfg(test)]
mod tests;

/// Fixed-capacity ring buffer with power-of-two slot counts.
///
/// Slot count is the requested capacity rounded up to the next power of two so
/// index wrap-around is a mask instead of a modulo. The requested capacity is
/// kept separately as `limit` and is what [`Self::is_full`] enforces; the
/// rounded-up slots beyond it are never occupied.
pub(crate) struct RingStorage<T> {
  slots: Box<[Option<T>]>,
  mask:  usize,
  head:  usize,
  tail:  usize,
  len:   usize,
  limit: usize,
}

impl<T> RingStorage<T> {
  /// Allocates storage for `capacity` elements. `capacity` must be at least 1.
  pub(crate) fn new(capacity: usize) -> Self {
    debug_assert!(capacity >= 1);
    let slot_count = capacity.next_power_of_two();
    let mut slots = Vec::with_capacity(slot_count);
    slots.resize_with(slot_count, || None);
    Self {
      slots: slots.into_boxed_slice(),
      mask: slot_count - 1,
      head: 0,
      tail: 0,
      len: 0,
      limit: capacity,
    }
  }

  /// Appends an element at the tail. The caller must check [`Self::is_full`]
  /// first.
  pub(crate) fn push_back(&mut self, item: T) {
    debug_assert!(!self.is_full());
    self.slots[self.tail] = Some(item);
    self.tail = (self.tail + 1) & self.mask;
    self.len += 1;
  }

  /// Removes and returns the element at the head, oldest first.
  pub(crate) fn pop_front(&mut self) -> Option<T> {
    let item = self.slots[self.head].take()?;
    self.head = (self.head + 1) & self.mask;
    self.len -= 1;
    Some(item)
  }

  pub(crate) fn len(&self) -> usize {
    self.len
  }

  /// The capacity requested at construction, not the rounded slot count.
  pub(crate) fn capacity(&self) -> usize {
    self.limit
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub(crate) fn is_full(&self) -> bool {
    self.len == self.limit
  }
}
