#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_async)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::empty_enum)]
#![deny(dropping_copy_types)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![no_std]

//! Bounded, closable FIFO queue with asynchronous backpressure.
//!
//! Producers suspend while the queue is full, consumers suspend while it is
//! empty, and both are woken in O(1) without polling or unbounded memory
//! growth. Closing the queue is monotonic: parked producers fail with
//! [`QueueError::Closed`], buffered items remain consumable, and consumers
//! observe end-of-stream (`None`) once the buffer drains.
//!
//! The crate is `no_std` (plus `alloc`) and runtime-agnostic: suspension is
//! expressed through hand-rolled futures over explicit waiter registrations
//! in the [`wait`] module, so any executor can drive it.
//!
//! ```
//! use bounded_queue_rs::BoundedQueue;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let queue = BoundedQueue::new(2).unwrap();
//! queue.offer(1).await.unwrap();
//! queue.offer(2).await.unwrap();
//! queue.close();
//! assert_eq!(queue.poll().await, Some(1));
//! assert_eq!(queue.poll().await, Some(2));
//! assert_eq!(queue.poll().await, None);
//! # }
//! ```

extern crate alloc;

pub mod queue;
pub mod wait;

pub use queue::{BoundedQueue, CapacityError, OfferFuture, PollFuture, QueueError};
