use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Statistics {
  pub(crate) accuracy: f64,
  pub(crate) elapsed: Duration,
  pub(crate) mistakes: usize,
  pub(crate) typed_symbols: usize,
  pub(crate) wpm: f64,
}

impl Display for Statistics {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Mistakes: {}\nTyped symbols: {}\nAccuracy: {:.0}%\nWPM: {:.1}\nTime: {}s",
      self.mistakes,
      self.typed_symbols,
      self.accuracy,
      self.wpm,
      self.elapsed.as_secs_f64().round()
    )
  }
}
