use alloc::vec::Vec;

use super::*;

#[test]
fn delivers_in_insertion_order() {
  let mut ring = RingStorage::new(4);
  for value in 0..4 {
    ring.push_back(value);
  }
  let drained: Vec<_> = core::iter::from_fn(|| ring.pop_front()).collect();
  assert_eq!(drained, [0, 1, 2, 3]);
}

#[test]
fn enforces_the_requested_capacity_not_the_slot_count() {
  let mut ring = RingStorage::new(3);
  assert_eq!(ring.capacity(), 3);
  for value in 0..3 {
    ring.push_back(value);
  }
  assert!(ring.is_full());
  assert_eq!(ring.len(), 3);
}

#[test]
fn indices_wrap_around_the_slot_boundary() {
  let mut ring = RingStorage::new(2);
  for round in 0..5 {
    ring.push_back(round * 2);
    ring.push_back(round * 2 + 1);
    assert!(ring.is_full());
    assert_eq!(ring.pop_front(), Some(round * 2));
    assert_eq!(ring.pop_front(), Some(round * 2 + 1));
    assert!(ring.is_empty());
  }
  assert_eq!(ring.pop_front(), None);
}

#[test]
fn pop_on_empty_returns_none() {
  let mut ring = RingStorage::<u32>::new(1);
  assert!(ring.is_empty());
  assert_eq!(ring.pop_front(), None);
}

#[test]
fn interleaved_push_pop_keeps_order() {
  let mut ring = RingStorage::new(3);
  ring.push_back(1);
  ring.push_back(2);
  assert_eq!(ring.pop_front(), Some(1));
  ring.push_back(3);
  ring.push_back(4);
  assert!(ring.is_full());
  assert_eq!(ring.pop_front(), Some(2));
  assert_eq!(ring.pop_front(), Some(3));
  assert_eq!(ring.pop_front(), Some(4));
  assert_eq!(ring.pop_front(), None);
}
