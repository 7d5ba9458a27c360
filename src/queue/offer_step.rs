use crate::wait::WaitHandle;

/// Outcome of one locked attempt to insert an element.
pub(crate) enum OfferStep<T> {
  /// The element was buffered.
  Accepted,
  /// The queue is closed; the element is handed back.
  Rejected(T),
  /// The queue is full; the element is handed back and a waiter was
  /// registered for the next free slot.
  Parked { item: T, waiter: WaitHandle },
}
