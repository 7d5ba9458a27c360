/// Errors reported by queue operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// The queue is full and cannot accept the element right now. Carries the
  /// rejected element.
  Full(T),
  /// The queue is closed and accepts no new elements. Carries the rejected
  /// element, which was never inserted.
  Closed(T),
  /// The queue has no elements to consume.
  Empty,
  /// The queue is closed and every buffered element has been drained.
  Disconnected,
}

impl<T> QueueError<T> {
  /// Extracts the payload carried by variants that preserve the element on
  /// failure.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Full(item) | Self::Closed(item) => Some(item),
      | Self::Empty | Self::Disconnected => None,
    }
  }
}
