use alloc::sync::Arc;
use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::wait_node::WaitNode;

/// Future side of a waiter registration.
///
/// Resolves once the paired [`WaitNode`] is notified. The handle itself does
/// not cancel on drop; the owner that parked is responsible for deregistering
/// the node from its waiter collection.
pub struct WaitHandle {
  node: Arc<WaitNode>,
}

impl WaitHandle {
  /// Wraps a registered node.
  #[must_use]
  pub const fn new(node: Arc<WaitNode>) -> Self {
    Self { node }
  }

  /// The underlying node.
  #[must_use]
  pub const fn node(&self) -> &Arc<WaitNode> {
    &self.node
  }
}

impl Future for WaitHandle {
  type Output = ();

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
    self.node.poll_notified(cx)
  }
}
