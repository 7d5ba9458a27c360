use alloc::sync::Arc;
use spin::Mutex;

use super::{offer_step::OfferStep, poll_step::PollStep, queue_core::QueueCore, queue_error::QueueError};
use crate::wait::WaitNode;

/// Shared queue state: the core behind a mutex, plus the wake-after-unlock
/// discipline.
///
/// Wakers are never invoked while the queue lock is held. A woken task may
/// immediately poll its future and take the lock again; invoking it under the
/// lock would deadlock on a single-threaded executor and contend elsewhere.
pub(crate) struct QueueState<T> {
  core: Mutex<QueueCore<T>>,
}

impl<T> QueueState<T> {
  pub(crate) fn new(capacity: usize) -> Self {
    Self { core: Mutex::new(QueueCore::new(capacity)) }
  }

  pub(crate) fn offer_step(&self, item: T) -> OfferStep<T> {
    let (step, waker) = self.core.lock().offer_or_park(item);
    if let Some(waker) = waker {
      waker.wake();
    }
    step
  }

  pub(crate) fn poll_step(&self) -> PollStep<T> {
    let (step, waker) = self.core.lock().poll_or_park();
    if let Some(waker) = waker {
      waker.wake();
    }
    step
  }

  pub(crate) fn try_offer(&self, item: T) -> Result<(), QueueError<T>> {
    let (result, waker) = self.core.lock().try_offer(item);
    if let Some(waker) = waker {
      waker.wake();
    }
    result
  }

  pub(crate) fn try_poll(&self) -> Result<T, QueueError<T>> {
    let (result, waker) = self.core.lock().try_poll();
    if let Some(waker) = waker {
      waker.wake();
    }
    result
  }

  pub(crate) fn close(&self) {
    let wakers = self.core.lock().close();
    for waker in wakers {
      waker.wake();
    }
  }

  pub(crate) fn cancel_producer(&self, node: &Arc<WaitNode>) {
    let waker = self.core.lock().cancel_producer(node);
    if let Some(waker) = waker {
      waker.wake();
    }
  }

  pub(crate) fn cancel_consumer(&self, node: &Arc<WaitNode>) {
    let waker = self.core.lock().cancel_consumer(node);
    if let Some(waker) = waker {
      waker.wake();
    }
  }

  pub(crate) fn len(&self) -> usize {
    self.core.lock().len()
  }

  pub(crate) fn capacity(&self) -> usize {
    self.core.lock().capacity()
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.core.lock().is_empty()
  }

  pub(crate) fn is_full(&self) -> bool {
    self.core.lock().is_full()
  }

  pub(crate) fn is_closed(&self) -> bool {
    self.core.lock().is_closed()
  }

  pub(crate) fn waiting_producer_count(&self) -> usize {
    self.core.lock().waiting_producer_count()
  }

  pub(crate) fn waiting_consumer_count(&self) -> usize {
    self.core.lock().waiting_consumer_count()
  }
}
