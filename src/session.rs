use super::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Keystroke {
  Accepted,
  Completed,
  Ignored,
}

/// One attempt at typing a target text.
///
/// `typed` always holds exactly `cursor` characters, and `mistakes` is a
/// bitset over target positions that is only ever set below the cursor.
#[derive(Clone, Debug, Default)]
pub(crate) struct Session {
  cursor: usize,
  pub(crate) end_time: Option<Instant>,
  mistake_count: usize,
  mistakes: Vec<bool>,
  pub(crate) start_time: Option<Instant>,
  target: Vec<char>,
  typed: Vec<char>,
  typed_symbol_count: usize,
}

impl Session {
  pub(crate) fn new(target: Vec<char>) -> Self {
    let mut session = Self::default();
    session.reset(target);
    session
  }

  pub(crate) fn reset(&mut self, target: Vec<char>) {
    self.cursor = 0;
    self.end_time = None;
    self.mistake_count = 0;
    self.mistakes = vec![false; target.len()];
    self.start_time = None;
    self.typed = Vec::with_capacity(target.len());
    self.typed_symbol_count = 0;
    self.target = target;
  }

  pub(crate) fn type_character(&mut self, c: char) -> Keystroke {
    let Some(&expected) = self.target.get(self.cursor) else {
      return Keystroke::Ignored;
    };

    self.typed_symbol_count += 1;

    if self.typed_symbol_count == 1 {
      self.start_time = Some(Instant::now());
    }

    if c != expected {
      self.mistake_count += 1;
      self.mistakes[self.cursor] = true;
    }

    self.typed.push(c);
    self.cursor += 1;

    if self.is_complete() {
      self.finish();
      Keystroke::Completed
    } else {
      Keystroke::Accepted
    }
  }

  pub(crate) fn backspace(&mut self) -> bool {
    if self.cursor == 0 {
      return false;
    }

    self.cursor -= 1;
    self.mistakes[self.cursor] = false;
    self.typed.pop();

    true
  }

  /// Marks the attempt as finished. Later calls keep the first end time.
  pub(crate) fn finish(&mut self) {
    if self.end_time.is_none() {
      self.end_time = Some(Instant::now());
    }
  }

  /// Percentage of accepted keystrokes that were not mistakes, counting
  /// every mistake made during the attempt, including erased ones.
  pub(crate) fn accuracy(&self) -> f64 {
    if self.typed_symbol_count == 0 {
      return 0.0;
    }

    let accuracy =
      100.0 - self.mistake_count as f64 / (self.typed_symbol_count as f64 / 100.0);

    accuracy.clamp(0.0, 100.0)
  }

  pub(crate) fn elapsed(&self) -> Option<Duration> {
    Some(self.end_time?.saturating_duration_since(self.start_time?))
  }

  pub(crate) fn wpm(&self) -> f64 {
    let minutes = self
      .elapsed()
      .map(|elapsed| elapsed.as_secs_f64() / 60.0)
      .unwrap_or_default();

    if minutes <= 0.0 {
      return 0.0;
    }

    let wpm = (self.cursor as f64 / 5.0) / minutes;

    if wpm.is_finite() { wpm } else { 0.0 }
  }

  pub(crate) fn statistics(&self) -> Statistics {
    Statistics {
      accuracy: self.accuracy(),
      elapsed: self.elapsed().unwrap_or_default(),
      mistakes: self.mistake_count,
      typed_symbols: self.typed_symbol_count,
      wpm: self.wpm(),
    }
  }

  pub(crate) fn cursor(&self) -> usize {
    self.cursor
  }

  pub(crate) fn is_complete(&self) -> bool {
    self.cursor == self.target.len()
  }

  pub(crate) fn is_mistake(&self, index: usize) -> bool {
    self.mistakes.get(index).copied().unwrap_or(false)
  }

  pub(crate) fn mistake_count(&self) -> usize {
    self.mistake_count
  }

  pub(crate) fn target(&self) -> &[char] {
    &self.target
  }

  pub(crate) fn typed(&self) -> &[char] {
    &self.typed
  }

  pub(crate) fn typed_symbol_count(&self) -> usize {
    self.typed_symbol_count
  }
}

#[cfg(test)]
mod tests {
  use {super::*, approx::assert_abs_diff_eq};

  fn session(target: &str) -> Session {
    Session::new(target.chars().collect())
  }

  fn typed(session: &Session) -> String {
    session.typed().iter().collect()
  }

  fn live_mistakes(session: &Session) -> Vec<usize> {
    (0..session.target().len())
      .filter(|&i| session.is_mistake(i))
      .collect()
  }

  #[test]
  fn type_correct_char() {
    let mut session = session("hello");

    assert_eq!(session.type_character('h'), Keystroke::Accepted);

    assert_eq!(session.cursor(), 1);
    assert_eq!(typed(&session), "h");
    assert_eq!(session.mistake_count(), 0);
    assert_eq!(session.typed_symbol_count(), 1);
    assert!(session.start_time.is_some());
    assert!(session.end_time.is_none());
  }

  #[test]
  fn type_incorrect_char() {
    let mut session = session("hello");

    assert_eq!(session.type_character('x'), Keystroke::Accepted);

    assert_eq!(session.cursor(), 1);
    assert_eq!(typed(&session), "x");
    assert_eq!(session.mistake_count(), 1);
    assert_eq!(live_mistakes(&session), [0]);
  }

  #[test]
  fn start_time_set_on_first_keystroke_only() {
    let mut session = session("hello");

    session.type_character('h');
    let start = session.start_time;

    session.type_character('e');

    assert_eq!(session.start_time, start);
  }

  #[test]
  fn complete_typing() {
    let mut session = session("cat");

    assert_eq!(session.type_character('c'), Keystroke::Accepted);
    assert_eq!(session.type_character('a'), Keystroke::Accepted);
    assert_eq!(session.type_character('t'), Keystroke::Completed);

    assert_eq!(session.cursor(), 3);
    assert!(live_mistakes(&session).is_empty());
    assert_eq!(session.mistake_count(), 0);
    assert_eq!(session.accuracy(), 100.0);
    assert!(session.end_time.is_some());
    assert!(session.elapsed().is_some());
  }

  #[test]
  fn typing_past_end_is_ignored() {
    let mut session = session("hi");

    session.type_character('h');
    session.type_character('i');

    assert_eq!(session.type_character('x'), Keystroke::Ignored);
    assert_eq!(session.cursor(), 2);
    assert_eq!(typed(&session), "hi");
    assert_eq!(session.typed_symbol_count(), 2);
    assert_eq!(session.mistake_count(), 0);
  }

  #[test]
  fn backspace() {
    let mut session = session("hello");

    for c in "he".chars() {
      assert_eq!(session.type_character(c), Keystroke::Accepted);
    }

    assert_eq!(typed(&session), "he");
    assert_eq!(session.cursor(), 2);

    assert!(session.backspace());

    assert_eq!(typed(&session), "h");
    assert_eq!(session.cursor(), 1);
  }

  #[test]
  fn backspace_empty() {
    let mut session = session("hello");

    assert!(!session.backspace());

    assert_eq!(typed(&session), "");
    assert_eq!(session.cursor(), 0);
  }

  #[test]
  fn backspace_clears_live_mistake_but_keeps_count() {
    let mut session = session("cat");

    session.type_character('c');
    session.type_character('x');

    assert_eq!(live_mistakes(&session), [1]);

    session.backspace();

    assert!(live_mistakes(&session).is_empty());
    assert_eq!(session.mistake_count(), 1);

    assert_eq!(session.type_character('a'), Keystroke::Accepted);
    assert_eq!(session.type_character('t'), Keystroke::Completed);

    assert_eq!(typed(&session), "cat");
    assert_eq!(session.mistake_count(), 1);
    assert_eq!(session.typed_symbol_count(), 4);
  }

  #[test]
  fn typed_length_tracks_cursor() {
    let mut session = session("the quick brown fox");

    let script = "thx\u{8}\u{8}\u{8}\u{8}e quock\u{8}\u{8}\u{8}ick zz\u{8}brown fox!";

    for c in script.chars() {
      if c == '\u{8}' {
        session.backspace();
      } else {
        session.type_character(c);
      }

      assert_eq!(session.typed().len(), session.cursor());
      assert!(session.cursor() <= session.target().len());
      assert!(live_mistakes(&session).iter().all(|&i| i < session.cursor()));
    }
  }

  #[test]
  fn mistake_count_never_decreases() {
    let mut session = session("abcdef");
    let mut previous = 0;

    for c in "axc\u{8}\u{8}zzzz\u{8}\u{8}def".chars() {
      if c == '\u{8}' {
        session.backspace();
      } else {
        session.type_character(c);
      }

      assert!(session.mistake_count() >= previous);
      previous = session.mistake_count();
    }
  }

  #[test]
  fn reset_mid_attempt() {
    let mut session = session("hello");

    session.type_character('h');
    session.type_character('x');

    session.reset("world".chars().collect());

    assert_eq!(session.cursor(), 0);
    assert_eq!(typed(&session), "");
    assert!(live_mistakes(&session).is_empty());
    assert_eq!(session.mistake_count(), 0);
    assert_eq!(session.typed_symbol_count(), 0);
    assert!(session.start_time.is_none());
    assert!(session.end_time.is_none());
    assert_eq!(session.target().iter().collect::<String>(), "world");
  }

  #[test]
  fn accuracy() {
    let mut session = session("test");

    assert_eq!(session.accuracy(), 0.0);

    session.type_character('t');
    assert_eq!(session.accuracy(), 100.0);

    session.type_character('x');
    assert_eq!(session.accuracy(), 50.0);

    session.type_character('s');
    assert_abs_diff_eq!(session.accuracy(), 66.66, epsilon = 0.01);

    session.type_character('t');
    assert_abs_diff_eq!(session.accuracy(), 75.0, epsilon = 0.01);
  }

  #[test]
  fn accuracy_counts_erased_mistakes() {
    let mut session = session("cat");

    for c in "cx".chars() {
      session.type_character(c);
    }
    session.backspace();
    for c in "at".chars() {
      session.type_character(c);
    }

    assert_abs_diff_eq!(session.accuracy(), 100.0 - 1.0 / (4.0 / 100.0), epsilon = 0.01);
  }

  #[test]
  fn accuracy_all_wrong_is_zero() {
    let mut session = session("abc");

    for c in "xyz".chars() {
      session.type_character(c);
    }

    assert_eq!(session.accuracy(), 0.0);
  }

  #[test]
  fn elapsed_requires_both_timestamps() {
    let mut session = session("hello");

    assert_eq!(session.elapsed(), None);

    session.type_character('h');
    assert_eq!(session.elapsed(), None);

    session.finish();
    assert!(session.elapsed().is_some());
  }

  #[test]
  fn finish_keeps_first_end_time() {
    let mut session = session("hello");

    session.finish();
    let end = session.end_time;
    session.finish();

    assert_eq!(session.end_time, end);
  }

  #[test]
  fn wpm() {
    let mut session = session("hello world test");

    for c in "hello worl".chars() {
      session.type_character(c);
    }

    let now = Instant::now();
    session.start_time = Some(now - Duration::from_secs(60));
    session.end_time = Some(now);

    assert_abs_diff_eq!(session.wpm(), 2.0, epsilon = 0.01);

    session.start_time = Some(now - Duration::from_secs(30));

    assert_abs_diff_eq!(session.wpm(), 4.0, epsilon = 0.01);

    for c in "d test".chars() {
      session.type_character(c);
    }

    session.end_time = Some(now);

    assert_abs_diff_eq!(session.wpm(), 6.4, epsilon = 0.01);
  }

  #[test]
  fn wpm_before_completion() {
    let mut session = session("hello");
    session.type_character('h');
    assert_eq!(session.wpm(), 0.0);
  }

  #[test]
  fn statistics_snapshot() {
    let mut session = session("cat");

    for c in "cxt".chars() {
      session.type_character(c);
    }

    let statistics = session.statistics();

    assert_eq!(statistics.mistakes, 1);
    assert_eq!(statistics.typed_symbols, 3);
    assert_abs_diff_eq!(statistics.accuracy, 66.66, epsilon = 0.01);
  }
}
