use alloc::{sync::Arc, vec::Vec};
use core::task::Waker;

use super::wait_node::WaitNode;

#[cfg(test)]
mod tests;

/// Number of waiter slots pre-allocated at construction.
const INITIAL_WAITER_SLOTS: usize = 16;

/// LIFO collection of parked waiters.
///
/// Backed by a `Vec` used as a stack: registration and wake both touch the
/// same end, so a wake is O(1). Storage starts with room for
/// [`INITIAL_WAITER_SLOTS`] waiters, doubles on overflow, and never shrinks.
/// Wake order among waiters is LIFO and carries no fairness guarantee; only
/// item delivery order through the queue is FIFO.
pub struct WaiterStack {
  nodes: Vec<Arc<WaitNode>>,
}

impl WaiterStack {
  /// Creates an empty stack.
  #[must_use]
  pub fn new() -> Self {
    Self { nodes: Vec::with_capacity(INITIAL_WAITER_SLOTS) }
  }

  /// Registers a fresh waiter and returns its node.
  pub fn register(&mut self) -> Arc<WaitNode> {
    let node = Arc::new(WaitNode::new());
    self.nodes.push(node.clone());
    node
  }

  /// Pops and resolves the most recently parked waiter.
  ///
  /// Returns the task waker to invoke once the caller releases its locks;
  /// `None` when no waiter was parked or the resolved waiter has not been
  /// polled yet.
  pub fn wake_one(&mut self) -> Option<Waker> {
    self.nodes.pop().and_then(|node| node.notify())
  }

  /// Resolves every parked waiter, returning the wakers to invoke.
  pub fn wake_all(&mut self) -> Vec<Waker> {
    let mut wakers = Vec::with_capacity(self.nodes.len());
    // split_off keeps the existing allocation; the stack never shrinks
    for node in self.nodes.split_off(0) {
      if let Some(waker) = node.notify() {
        wakers.push(waker);
      }
    }
    wakers
  }

  /// Removes a specific waiter by pointer identity.
  ///
  /// Waiter order carries no guarantee, so the hole is filled with
  /// `swap_remove`. Returns `false` when the node was not parked here.
  pub fn remove(&mut self, node: &Arc<WaitNode>) -> bool {
    match self.nodes.iter().position(|candidate| Arc::ptr_eq(candidate, node)) {
      | Some(index) => {
        self.nodes.swap_remove(index);
        true
      },
      | None => false,
    }
  }

  /// Number of parked waiters.
  #[must_use]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Indicates whether no waiter is parked.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }
}

impl Default for WaiterStack {
  fn default() -> Self {
    Self::new()
  }
}
