//! Priority-ordered iteration over a signal set.

use crate::{Signal, Signals};

/// Iterator over a [`Signals`] set in priority order.
#[derive(Clone, Debug)]
pub struct SignalsIter {
  rest: Signals,
}

impl SignalsIter {
  pub(crate) const fn new(rest: Signals) -> Self {
    Self { rest }
  }
}

impl Iterator for SignalsIter {
  type Item = Signal;

  fn next(&mut self) -> Option<Self::Item> {
    let signal = self.rest.first_signal()?;
    self.rest.clear_signal(signal);
    Some(signal)
  }
}
