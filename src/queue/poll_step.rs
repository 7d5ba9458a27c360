use crate::wait::WaitHandle;

/// Outcome of one locked attempt to remove an element.
pub(crate) enum PollStep<T> {
  /// The oldest buffered element.
  Item(T),
  /// The queue is closed and drained; no further element will arrive.
  EndOfStream,
  /// The queue is empty but still open; a waiter was registered for the next
  /// element.
  Parked(WaitHandle),
}
