/// Error returned when constructing a queue with an invalid capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
  requested: usize,
}

impl CapacityError {
  pub(crate) const fn new(requested: usize) -> Self {
    Self { requested }
  }

  /// The capacity value that was rejected.
  #[must_use]
  pub const fn requested(&self) -> usize {
    self.requested
  }
}

impl core::fmt::Display for CapacityError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "queue capacity must be at least 1, got {}", self.requested)
  }
}

#[cfg(test)]
mod tests {
  use alloc::format;

  use super::*;

  #[test]
  fn display_names_the_rejected_value() {
    let error = CapacityError::new(0);
    assert_eq!(error.requested(), 0);
    assert_eq!(format!("{error}"), "queue capacity must be at least 1, got 0");
  }
}
