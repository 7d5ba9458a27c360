//! Bounded FIFO queue with asynchronous backpressure.

mod bounded_queue;
mod capacity_error;
mod offer_future;
mod offer_step;
mod poll_future;
mod poll_step;
mod queue_core;
mod queue_error;
mod queue_state;
mod ring_storage;

pub use bounded_queue::BoundedQueue;
pub use capacity_error::CapacityError;
pub use offer_future::OfferFuture;
pub use poll_future::PollFuture;
pub use queue_error::QueueError;
