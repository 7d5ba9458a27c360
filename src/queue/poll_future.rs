use alloc::sync::Arc;
use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::{poll_step::PollStep, queue_state::QueueState};
use crate::wait::WaitHandle;

/// Future returned by [`super::BoundedQueue::poll`].
///
/// Resolves with the oldest buffered element, or with `None` once the queue
/// is closed and drained. Dropping the future before it resolves withdraws
/// the reservation; a wakeup it had already consumed is passed on to another
/// parked consumer.
#[must_use = "futures do nothing unless polled"]
pub struct PollFuture<T> {
  state:  Arc<QueueState<T>>,
  waiter: Option<WaitHandle>,
}

impl<T> PollFuture<T> {
  pub(crate) fn new(state: Arc<QueueState<T>>) -> Self {
    Self { state, waiter: None }
  }
}

impl<T> Unpin for PollFuture<T> {}

impl<T> Future for PollFuture<T> {
  type Output = Option<T>;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let this = self.get_mut();
    loop {
      if let Some(waiter) = this.waiter.as_mut() {
        match Pin::new(waiter).poll(cx) {
          | Poll::Pending => return Poll::Pending,
          | Poll::Ready(()) => this.waiter = None,
        }
      }
      match this.state.poll_step() {
        | PollStep::Item(item) => return Poll::Ready(Some(item)),
        | PollStep::EndOfStream => return Poll::Ready(None),
        | PollStep::Parked(waiter) => {
          this.waiter = Some(waiter);
          // loop to register this task's waker on the fresh node
        },
      }
    }
  }
}

impl<T> Drop for PollFuture<T> {
  fn drop(&mut self) {
    if let Some(waiter) = self.waiter.take() {
      self.state.cancel_consumer(waiter.node());
    }
  }
}
