use super::*;

/// Foreground and background as 256-color palette indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Style {
  pub(crate) bg: Option<u8>,
  pub(crate) bold: bool,
  pub(crate) fg: Option<u8>,
}

impl Style {
  pub(crate) const PLAIN: Style = Style {
    bg: None,
    bold: false,
    fg: None,
  };

  const fn fg(color: u8) -> Self {
    Self {
      bg: None,
      bold: false,
      fg: Some(color),
    }
  }

  const fn bg(color: u8) -> Self {
    Self {
      bg: Some(color),
      bold: false,
      fg: None,
    }
  }

  const fn bold(self) -> Self {
    Self { bold: true, ..self }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Theme {
  pub(crate) cursor: Style,
  pub(crate) focused: Style,
  pub(crate) mistake: Style,
  pub(crate) placeholder: Style,
  pub(crate) text: Style,
  pub(crate) title: Style,
}

impl Default for Theme {
  fn default() -> Self {
    Self {
      cursor: Style::bg(87),
      focused: Style::fg(205),
      mistake: Style {
        bg: Some(202),
        bold: false,
        fg: Some(234),
      },
      placeholder: Style::fg(254),
      text: Style::fg(238).bold(),
      title: Style::fg(99).bold(),
    }
  }
}
