use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
  Confirm,
  Delete,
  Down,
  Escape,
  Tab,
  Text(String),
  Up,
}

impl Action {
  pub(crate) fn from_event(event: Event) -> Option<Self> {
    match event {
      Event::Key(key) if key.kind == event::KeyEventKind::Release => None,
      Event::Key(key) => match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Escape),
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Backspace => Some(Self::Delete),
        KeyCode::BackTab | KeyCode::Up => Some(Self::Up),
        KeyCode::Char(c) => Some(Self::Text(c.to_string())),
        KeyCode::Down => Some(Self::Down),
        KeyCode::Enter => Some(Self::Confirm),
        KeyCode::Esc => Some(Self::Escape),
        KeyCode::Tab => Some(Self::Tab),
        _ => None,
      },
      Event::Paste(text) => Some(Self::Text(text)),
      _ => None,
    }
  }

  /// The single character carried by a text action, if it carries exactly one.
  pub(crate) fn character(&self) -> Option<char> {
    let Self::Text(text) = self else {
      return None;
    };

    let mut chars = text.chars();

    match (chars.next(), chars.next()) {
      (Some(c), None) => Some(c),
      _ => None,
    }
  }
}
