use core::task::{Context, Poll, Waker};

use spin::Mutex;

/// Lifecycle phase of a waiter. A node resolves at most once.
#[derive(Clone, Copy, PartialEq, Eq)]
enum WaitPhase {
  Pending,
  Notified,
  Cancelled,
}

struct WaitNodeInner {
  phase: WaitPhase,
  waker: Option<Waker>,
}

/// A suspended operation's resume continuation.
///
/// The node carries try-set semantics: it transitions from pending to exactly
/// one of notified or cancelled, and later transitions are rejected. A waiter
/// can therefore never be resumed twice, even when a normal wakeup races a
/// cancellation.
///
/// Callers serialize `notify`/`cancel` under their own lock; the node's
/// internal mutex only protects the waker cell against concurrent polls.
pub struct WaitNode {
  inner: Mutex<WaitNodeInner>,
}

impl WaitNode {
  /// Creates a pending node with no registered waker.
  #[must_use]
  pub const fn new() -> Self {
    Self { inner: Mutex::new(WaitNodeInner { phase: WaitPhase::Pending, waker: None }) }
  }

  /// Resolves a pending node.
  ///
  /// Returns the registered task waker so the caller can invoke it after
  /// releasing its own locks; `None` when no task has polled the node yet or
  /// the node was already resolved.
  pub fn notify(&self) -> Option<Waker> {
    let mut inner = self.inner.lock();
    if inner.phase != WaitPhase::Pending {
      return None;
    }
    inner.phase = WaitPhase::Notified;
    inner.waker.take()
  }

  /// Cancels the node.
  ///
  /// Returns `true` when the node had already been notified: the caller is
  /// abandoning a wakeup it consumed and must hand it to another waiter.
  pub fn cancel(&self) -> bool {
    let mut inner = self.inner.lock();
    match inner.phase {
      | WaitPhase::Pending => {
        inner.phase = WaitPhase::Cancelled;
        inner.waker = None;
        false
      },
      | WaitPhase::Notified => true,
      | WaitPhase::Cancelled => false,
    }
  }

  /// Indicates whether the node is still waiting to be resolved.
  #[must_use]
  pub fn is_pending(&self) -> bool {
    self.inner.lock().phase == WaitPhase::Pending
  }

  /// Registers the task waker and reports whether the node has resolved.
  pub(crate) fn poll_notified(&self, cx: &mut Context<'_>) -> Poll<()> {
    let mut inner = self.inner.lock();
    match inner.phase {
      | WaitPhase::Notified => Poll::Ready(()),
      | WaitPhase::Pending | WaitPhase::Cancelled => {
        if inner.waker.as_ref().map_or(true, |waker| !waker.will_wake(cx.waker())) {
          inner.waker = Some(cx.waker().clone());
        }
        Poll::Pending
      },
    }
  }
}

impl Default for WaitNode {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use alloc::{sync::Arc, task::Wake};
  use core::{
    sync::atomic::{AtomicUsize, Ordering},
    task::{Context, Poll, Waker},
  };

  use super::*;

  struct CountingWake {
    wakes: AtomicUsize,
  }

  impl CountingWake {
    fn new() -> Arc<Self> {
      Arc::new(Self { wakes: AtomicUsize::new(0) })
    }

    fn count(&self) -> usize {
      self.wakes.load(Ordering::SeqCst)
    }
  }

  impl Wake for CountingWake {
    fn wake(self: Arc<Self>) {
      self.wakes.fetch_add(1, Ordering::SeqCst);
    }

    fn wake_by_ref(self: &Arc<Self>) {
      self.wakes.fetch_add(1, Ordering::SeqCst);
    }
  }

  #[test]
  fn notify_hands_back_registered_waker_once() {
    let node = WaitNode::new();
    let wake = CountingWake::new();
    let waker = Waker::from(wake.clone());
    let mut cx = Context::from_waker(&waker);

    assert_eq!(node.poll_notified(&mut cx), Poll::Pending);
    assert!(node.is_pending());

    let resumed = node.notify();
    assert!(resumed.is_some());
    assert!(!node.is_pending());
    assert!(node.notify().is_none());

    resumed.unwrap().wake();
    assert_eq!(wake.count(), 1);
    assert_eq!(node.poll_notified(&mut cx), Poll::Ready(()));
  }

  #[test]
  fn notify_before_first_poll_still_resolves() {
    let node = WaitNode::new();
    assert!(node.notify().is_none());

    let wake = CountingWake::new();
    let waker = Waker::from(wake);
    let mut cx = Context::from_waker(&waker);
    assert_eq!(node.poll_notified(&mut cx), Poll::Ready(()));
  }

  #[test]
  fn cancelled_node_rejects_notify() {
    let node = WaitNode::new();
    assert!(!node.cancel());
    assert!(node.notify().is_none());
    assert!(!node.is_pending());
  }

  #[test]
  fn cancel_after_notify_reports_consumed_wakeup() {
    let node = WaitNode::new();
    assert!(node.notify().is_none());
    assert!(node.cancel());
  }
}
