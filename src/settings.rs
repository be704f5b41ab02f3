const CHAR_LIMIT: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Input {
  pub(crate) prompt: &'static str,
  pub(crate) value: String,
}

impl Input {
  fn insert(&mut self, c: char) -> bool {
    if !c.is_ascii_digit() || self.value.chars().count() >= CHAR_LIMIT {
      return false;
    }

    self.value.push(c);

    true
  }
}

/// The settings form: a column of inputs followed by a submit slot.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Settings {
  pub(crate) focus: usize,
  pub(crate) inputs: Vec<Input>,
}

impl Settings {
  pub(crate) fn new(word_count: usize) -> Self {
    Self {
      focus: 0,
      inputs: vec![Input {
        prompt: "Words count",
        value: word_count.to_string(),
      }],
    }
  }

  fn slots(&self) -> usize {
    self.inputs.len() + 1
  }

  pub(crate) fn focus_next(&mut self) {
    self.focus = (self.focus + 1) % self.slots();
  }

  pub(crate) fn focus_previous(&mut self) {
    self.focus = (self.focus + self.slots() - 1) % self.slots();
  }

  pub(crate) fn submit_focused(&self) -> bool {
    self.focus == self.inputs.len()
  }

  pub(crate) fn insert(&mut self, c: char) -> bool {
    self
      .inputs
      .get_mut(self.focus)
      .is_some_and(|input| input.insert(c))
  }

  pub(crate) fn delete(&mut self) -> bool {
    self
      .inputs
      .get_mut(self.focus)
      .is_some_and(|input| input.value.pop().is_some())
  }

  pub(crate) fn word_count(&self) -> Option<usize> {
    self
      .inputs
      .first()
      .and_then(|input| input.value.parse().ok())
      .filter(|&count| count > 0)
  }
}
