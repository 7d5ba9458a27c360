//! Waiter primitives parking suspended queue operations.
//!
//! A parked operation registers a [`WaitNode`] in a [`WaiterStack`] and
//! awaits its [`WaitHandle`]. Nodes resolve at most once: a normal wakeup and
//! a cancellation race deterministically, which is what rules out double
//! resumes.

mod wait_handle;
mod wait_node;
mod waiter_stack;

pub use wait_handle::WaitHandle;
pub use wait_node::WaitNode;
pub use waiter_stack::WaiterStack;
