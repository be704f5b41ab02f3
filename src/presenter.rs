use super::*;

const WIDTH: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Span {
  pub(crate) style: Style,
  pub(crate) text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Line {
  pub(crate) spans: Vec<Span>,
}

impl Line {
  fn styled(text: impl Into<String>, style: Style) -> Self {
    Self {
      spans: vec![Span {
        style,
        text: text.into(),
      }],
    }
  }

  fn plain(text: impl Into<String>) -> Self {
    Self::styled(text, Style::PLAIN)
  }

  /// Appends `c`, extending the last span when the style matches.
  fn push(&mut self, c: char, style: Style) {
    match self.spans.last_mut() {
      Some(span) if span.style == style => span.text.push(c),
      _ => self.spans.push(Span {
        style,
        text: c.to_string(),
      }),
    }
  }

  fn width(&self) -> usize {
    self.spans.iter().map(|span| span.text.chars().count()).sum()
  }
}

/// A rendered screen, top to bottom.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Frame {
  pub(crate) lines: Vec<Line>,
}

impl Frame {
  #[cfg(test)]
  pub(crate) fn text(&self) -> String {
    self
      .lines
      .iter()
      .map(|line| line.spans.iter().map(|span| span.text.as_str()).collect::<String>())
      .collect::<Vec<String>>()
      .join("\n")
  }
}

pub(crate) fn render<S: TextSource>(controller: &Controller<S>, theme: &Theme) -> Frame {
  let lines = match controller.screen() {
    Screen::Menu => vec![Line::plain("menu")],
    Screen::ModeSelect => mode_select(controller),
    Screen::Results => controller
      .session()
      .statistics()
      .to_string()
      .lines()
      .map(Line::plain)
      .collect(),
    Screen::Settings => settings(controller.settings(), theme),
    Screen::Typing => typing(controller.session(), theme),
  };

  Frame { lines }
}

fn mode_select<S: TextSource>(controller: &Controller<S>) -> Vec<Line> {
  let mut lines = Mode::ALL
    .iter()
    .enumerate()
    .map(|(i, mode)| {
      if i == controller.selection() {
        Line::plain(format!("> {}", mode.label()))
      } else {
        Line::plain(mode.label())
      }
    })
    .collect::<Vec<Line>>();

  let settings = if controller.settings_enabled() {
    " • s settings"
  } else {
    ""
  };

  lines.push(Line::plain(if controller.show_help() {
    format!("↑/k move up • ↓/j move down • enter chose/finish • ? toggle help{settings} • esc quit")
  } else {
    format!("? toggle help{settings} • esc quit")
  }));

  lines
}

fn typing(session: &Session, theme: &Theme) -> Vec<Line> {
  let target = session.target();

  let mut lines = vec![Line::styled(
    format!(
      "Mistakes: {} {:.0}%",
      session.mistake_count(),
      session.accuracy()
    ),
    theme.title,
  )];

  let cells = session
    .typed()
    .iter()
    .enumerate()
    .map(|(i, &c)| match target.get(i) {
      Some(&expected) if session.is_mistake(i) => (expected, theme.mistake),
      _ => (c, theme.text),
    })
    .chain(
      target
        .iter()
        .enumerate()
        .skip(session.cursor())
        .map(|(i, &c)| {
          if i == session.cursor() {
            (c, theme.cursor)
          } else {
            (c, theme.placeholder)
          }
        }),
    );

  let mut line = Line::default();

  for (c, style) in cells {
    if line.width() == WIDTH {
      lines.push(std::mem::take(&mut line));
    }

    line.push(c, style);
  }

  if !line.spans.is_empty() {
    lines.push(line);
  }

  lines
}

fn settings(settings: &Settings, theme: &Theme) -> Vec<Line> {
  let style = |focused: bool| if focused { theme.focused } else { Style::PLAIN };

  settings
    .inputs
    .iter()
    .enumerate()
    .map(|(i, input)| {
      Line::styled(
        format!("{} > {}", input.prompt, input.value),
        style(i == settings.focus),
      )
    })
    .chain([Line::styled("[ Submit ]", style(settings.submit_focused()))])
    .collect()
}
