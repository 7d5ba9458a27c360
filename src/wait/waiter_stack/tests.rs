use alloc::{sync::Arc, task::Wake, vec::Vec};
use core::task::{Context, Poll, Waker};

use super::*;
use crate::wait::WaitNode;

struct NoopWake;

impl Wake for NoopWake {
  fn wake(self: Arc<Self>) {}
}

fn registered_waker(node: &Arc<WaitNode>) -> Waker {
  let waker = Waker::from(Arc::new(NoopWake));
  let mut cx = Context::from_waker(&waker);
  assert_eq!(node.poll_notified(&mut cx), Poll::Pending);
  waker
}

#[test]
fn wake_one_resolves_most_recent_waiter() {
  let mut stack = WaiterStack::new();
  let first = stack.register();
  let second = stack.register();
  let _first_waker = registered_waker(&first);
  let _second_waker = registered_waker(&second);
  assert_eq!(stack.len(), 2);

  assert!(stack.wake_one().is_some());
  assert!(first.is_pending());
  assert!(!second.is_pending());

  assert!(stack.wake_one().is_some());
  assert!(!first.is_pending());
  assert!(stack.is_empty());
}

#[test]
fn wake_one_on_empty_stack_is_noop() {
  let mut stack = WaiterStack::new();
  assert!(stack.wake_one().is_none());
}

#[test]
fn wake_one_without_registered_waker_still_resolves() {
  let mut stack = WaiterStack::new();
  let node = stack.register();
  assert!(stack.wake_one().is_none());
  assert!(!node.is_pending());
  assert!(stack.is_empty());
}

#[test]
fn wake_all_resolves_every_waiter() {
  let mut stack = WaiterStack::new();
  let nodes: Vec<_> = (0..3).map(|_| stack.register()).collect();
  let _wakers: Vec<_> = nodes.iter().map(registered_waker).collect();

  let woken = stack.wake_all();
  assert_eq!(woken.len(), 3);
  assert!(stack.is_empty());
  assert!(nodes.iter().all(|node| !node.is_pending()));
}

#[test]
fn remove_matches_by_pointer_identity() {
  let mut stack = WaiterStack::new();
  let kept = stack.register();
  let removed = stack.register();

  assert!(stack.remove(&removed));
  assert!(!stack.remove(&removed));
  assert_eq!(stack.len(), 1);

  assert!(stack.wake_one().is_none());
  assert!(!kept.is_pending());
  assert!(removed.is_pending());
}
