use alloc::{sync::Arc, vec::Vec};
use core::task::Waker;

use super::{offer_step::OfferStep, poll_step::PollStep, queue_error::QueueError, ring_storage::RingStorage};
use crate::wait::{WaitHandle, WaitNode, WaiterStack};

/// Buffer, close flag, and both waiter stacks behind one lock.
///
/// Every method runs under the queue mutex held by [`super::queue_state::QueueState`].
/// Checking the buffer and registering a waiter happen in the same critical
/// section, so a wakeup published between the check and the park cannot be
/// lost. Methods return the wakers to invoke instead of invoking them; the
/// caller fires them after releasing the lock.
pub(crate) struct QueueCore<T> {
  ring:             RingStorage<T>,
  closed:           bool,
  producer_waiters: WaiterStack,
  consumer_waiters: WaiterStack,
}

impl<T> QueueCore<T> {
  pub(crate) fn new(capacity: usize) -> Self {
    Self {
      ring:             RingStorage::new(capacity),
      closed:           false,
      producer_waiters: WaiterStack::new(),
      consumer_waiters: WaiterStack::new(),
    }
  }

  /// Inserts the element, or parks the caller when the queue is full.
  pub(crate) fn offer_or_park(&mut self, item: T) -> (OfferStep<T>, Option<Waker>) {
    if self.closed {
      return (OfferStep::Rejected(item), None);
    }
    if self.ring.is_full() {
      let waiter = WaitHandle::new(self.producer_waiters.register());
      return (OfferStep::Parked { item, waiter }, None);
    }
    self.ring.push_back(item);
    (OfferStep::Accepted, self.consumer_waiters.wake_one())
  }

  /// Removes the oldest element, or parks the caller when the queue is empty
  /// and still open.
  pub(crate) fn poll_or_park(&mut self) -> (PollStep<T>, Option<Waker>) {
    match self.ring.pop_front() {
      | Some(item) => (PollStep::Item(item), self.producer_waiters.wake_one()),
      | None if self.closed => (PollStep::EndOfStream, None),
      | None => {
        let waiter = WaitHandle::new(self.consumer_waiters.register());
        (PollStep::Parked(waiter), None)
      },
    }
  }

  /// Non-suspending insert.
  pub(crate) fn try_offer(&mut self, item: T) -> (Result<(), QueueError<T>>, Option<Waker>) {
    if self.closed {
      return (Err(QueueError::Closed(item)), None);
    }
    if self.ring.is_full() {
      return (Err(QueueError::Full(item)), None);
    }
    self.ring.push_back(item);
    (Ok(()), self.consumer_waiters.wake_one())
  }

  /// Non-suspending removal.
  pub(crate) fn try_poll(&mut self) -> (Result<T, QueueError<T>>, Option<Waker>) {
    match self.ring.pop_front() {
      | Some(item) => (Ok(item), self.producer_waiters.wake_one()),
      | None if self.closed => (Err(QueueError::Disconnected), None),
      | None => (Err(QueueError::Empty), None),
    }
  }

  /// Marks the queue closed and resolves every parked waiter.
  ///
  /// Buffered elements stay consumable; parked producers fail their retry,
  /// parked consumers either drain remaining elements or observe end of
  /// stream. Closing an already-closed queue wakes nobody.
  pub(crate) fn close(&mut self) -> Vec<Waker> {
    if self.closed {
      return Vec::new();
    }
    self.closed = true;
    let mut wakers = self.producer_waiters.wake_all();
    wakers.extend(self.consumer_waiters.wake_all());
    wakers
  }

  pub(crate) fn cancel_producer(&mut self, node: &Arc<WaitNode>) -> Option<Waker> {
    Self::cancel_in(&mut self.producer_waiters, node)
  }

  pub(crate) fn cancel_consumer(&mut self, node: &Arc<WaitNode>) -> Option<Waker> {
    Self::cancel_in(&mut self.consumer_waiters, node)
  }

  /// Withdraws an abandoned waiter. When the waiter had already consumed a
  /// wakeup, that wakeup is handed to the next parked waiter so no slot or
  /// element announcement is lost.
  fn cancel_in(stack: &mut WaiterStack, node: &Arc<WaitNode>) -> Option<Waker> {
    if stack.remove(node) {
      node.cancel();
      return None;
    }
    if node.cancel() {
      return stack.wake_one();
    }
    None
  }

  pub(crate) fn len(&self) -> usize {
    self.ring.len()
  }

  pub(crate) fn capacity(&self) -> usize {
    self.ring.capacity()
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.ring.is_empty()
  }

  pub(crate) fn is_full(&self) -> bool {
    self.ring.is_full()
  }

  /// Closed means close was requested and the buffer is drained.
  pub(crate) fn is_closed(&self) -> bool {
    self.closed && self.ring.is_empty()
  }

  pub(crate) fn waiting_producer_count(&self) -> usize {
    self.producer_waiters.len()
  }

  pub(crate) fn waiting_consumer_count(&self) -> usize {
    self.consumer_waiters.len()
  }
}
