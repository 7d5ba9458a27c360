use alloc::{sync::Arc, vec::Vec};

use super::{
  capacity_error::CapacityError, offer_future::OfferFuture, poll_future::PollFuture, queue_error::QueueError,
  queue_state::QueueState,
};


/// Bounded, closable FIFO queue with asynchronous backpressure.
///
/// Cloning the handle is cheap and every clone operates on the same queue, so
/// any number of producers and consumers may share it. Producers suspend in
/// [`Self::offer`] while the queue is full; consumers suspend in
/// [`Self::poll`] while it is empty. [`Self::close`] stops intake while
/// letting consumers drain what is already buffered.
///
/// Elements are delivered in insertion order. Suspended tasks are resumed in
/// no particular order; fairness among waiters is not guaranteed.
pub struct BoundedQueue<T> {
  state: Arc<QueueState<T>>,
}

impl<T> BoundedQueue<T> {
  /// Creates a queue holding at most `capacity` elements.
  ///
  /// # Errors
  /// Returns [`CapacityError`] when `capacity` is zero.
  pub fn new(capacity: usize) -> Result<Self, CapacityError> {
    if capacity == 0 {
      return Err(CapacityError::new(capacity));
    }
    Ok(Self { state: Arc::new(QueueState::new(capacity)) })
  }

  /// Inserts an element, suspending while the queue is full.
  ///
  /// # Errors
  /// The future resolves with [`QueueError::Closed`] carrying the element
  /// back when the queue is closed before a slot frees up.
  pub fn offer(&self, item: T) -> OfferFuture<T> {
    OfferFuture::new(self.state.clone(), item)
  }

  /// Inserts an element without suspending.
  ///
  /// # Errors
  /// Returns [`QueueError::Full`] or [`QueueError::Closed`], each carrying
  /// the element back.
  pub fn try_offer(&self, item: T) -> Result<(), QueueError<T>> {
    self.state.try_offer(item)
  }

  /// Removes the oldest element, suspending while the queue is empty.
  ///
  /// Resolves with `None` once the queue is closed and drained.
  pub fn poll(&self) -> PollFuture<T> {
    PollFuture::new(self.state.clone())
  }

  /// Removes the oldest element without suspending.
  ///
  /// # Errors
  /// Returns [`QueueError::Empty`] while the queue is open, or
  /// [`QueueError::Disconnected`] once it is closed and drained.
  pub fn try_poll(&self) -> Result<T, QueueError<T>> {
    self.state.try_poll()
  }

  /// Closes the queue.
  ///
  /// New offers fail immediately; buffered elements remain consumable.
  /// Suspended producers resume with [`QueueError::Closed`] and suspended
  /// consumers resume to drain or observe end of stream. Closing again has
  /// no further effect.
  pub fn close(&self) {
    self.state.close();
  }

  /// Removes every currently consumable element, waiting out the queue until
  /// end of stream.
  pub async fn drain(&self) -> Vec<T> {
    let mut items = Vec::new();
    while let Some(item) = self.poll().await {
      items.push(item);
    }
    items
  }

  /// Removes up to `count` elements, stopping early at end of stream.
  pub async fn take(&self, count: usize) -> Vec<T> {
    let mut items = Vec::with_capacity(count);
    while items.len() < count {
      match self.poll().await {
        | Some(item) => items.push(item),
        | None => break,
      }
    }
    items
  }

  /// Number of buffered elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.state.len()
  }

  /// Maximum number of buffered elements, as requested at construction.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.state.capacity()
  }

  /// Indicates whether no element is buffered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.state.is_empty()
  }

  /// Indicates whether the buffer is at capacity.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.state.is_full()
  }

  /// Indicates whether the queue is closed and drained.
  ///
  /// A closed queue still holding elements reports `false` until consumers
  /// take the rest.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.state.is_closed()
  }

  /// Number of producers currently suspended on a full queue.
  #[must_use]
  pub fn waiting_producer_count(&self) -> usize {
    self.state.waiting_producer_count()
  }

  /// Number of consumers currently suspended on an empty queue.
  #[must_use]
  pub fn waiting_consumer_count(&self) -> usize {
    self.state.waiting_consumer_count()
  }
}

impl<T> Clone for BoundedQueue<T> {
  fn clone(&self) -> Self {
    Self { state: self.state.clone() }
  }
}
