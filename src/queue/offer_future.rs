use alloc::sync::Arc;
use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::{offer_step::OfferStep, queue_error::QueueError, queue_state::QueueState};
use crate::wait::WaitHandle;

/// Future returned by [`super::BoundedQueue::offer`].
///
/// Resolves once the element is buffered, or with
/// [`QueueError::Closed`] handing the element back when the queue closes
/// first. Dropping the future before it resolves withdraws the reservation;
/// a wakeup it had already consumed is passed on to another parked producer.
#[must_use = "futures do nothing unless polled"]
pub struct OfferFuture<T> {
  state:  Arc<QueueState<T>>,
  item:   Option<T>,
  waiter: Option<WaitHandle>,
}

impl<T> OfferFuture<T> {
  pub(crate) fn new(state: Arc<QueueState<T>>, item: T) -> Self {
    Self { state, item: Some(item), waiter: None }
  }
}

impl<T> Unpin for OfferFuture<T> {}

impl<T> Future for OfferFuture<T> {
  type Output = Result<(), QueueError<T>>;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let this = self.get_mut();
    loop {
      if let Some(waiter) = this.waiter.as_mut() {
        match Pin::new(waiter).poll(cx) {
          | Poll::Pending => return Poll::Pending,
          | Poll::Ready(()) => this.waiter = None,
        }
      }
      let Some(item) = this.item.take() else {
        // polled again after completion
        return Poll::Ready(Err(QueueError::Disconnected));
      };
      match this.state.offer_step(item) {
        | OfferStep::Accepted => return Poll::Ready(Ok(())),
        | OfferStep::Rejected(item) => return Poll::Ready(Err(QueueError::Closed(item))),
        | OfferStep::Parked { item, waiter } => {
          this.item = Some(item);
          this.waiter = Some(waiter);
          // loop to register this task's waker on the fresh node
        },
      }
    }
  }
}

impl<T> Drop for OfferFuture<T> {
  fn drop(&mut self) {
    if let Some(waiter) = self.waiter.take() {
      self.state.cancel_producer(waiter.node());
    }
  }
}
