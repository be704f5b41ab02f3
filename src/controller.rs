use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
  Menu,
  ModeSelect,
  Results,
  Settings,
  Typing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
  Continue,
  Quit,
}

/// Routes input to the handler for the active screen and owns the attempt.
#[derive(Debug)]
pub(crate) struct Controller<S = FileTextSource> {
  corpus: Corpus,
  mode: Mode,
  mode_select: bool,
  screen: Screen,
  selection: usize,
  session: Session,
  settings: Settings,
  settings_enabled: bool,
  show_help: bool,
  source: S,
  submitted_word_count: Option<usize>,
  word_count: usize,
}

impl<S: TextSource> Controller<S> {
  /// Loads the corpus and picks a first text. Fails if no attempt can be
  /// started from this source.
  pub(crate) fn new(mut source: S, config: &Config) -> Result<Self, Error> {
    let corpus = source.load_corpus()?;
    let target = source.pick_random(&corpus)?;

    Ok(Self {
      corpus,
      mode: Mode::Text,
      mode_select: config.mode_select,
      screen: if config.mode_select {
        Screen::ModeSelect
      } else {
        Screen::Typing
      },
      selection: 0,
      session: Session::new(target),
      settings: Settings::new(config.word_count),
      settings_enabled: config.settings_enabled,
      show_help: false,
      source,
      submitted_word_count: None,
      word_count: config.word_count,
    })
  }

  pub(crate) fn handle(&mut self, action: Action) -> Result<Flow, Error> {
    if action == Action::Escape {
      info!(screen = ?self.screen, "quit requested");
      return Ok(Flow::Quit);
    }

    match self.screen {
      Screen::Menu => Ok(Flow::Continue),
      Screen::ModeSelect => self.handle_mode_select(action),
      Screen::Results => Ok(self.handle_results(action)),
      Screen::Settings => Ok(self.handle_settings(action)),
      Screen::Typing => self.handle_typing(action),
    }
  }

  fn handle_mode_select(&mut self, action: Action) -> Result<Flow, Error> {
    match action {
      Action::Up => self.selection = self.selection.saturating_sub(1),
      Action::Down => self.selection = (self.selection + 1).min(Mode::ALL.len() - 1),
      Action::Confirm => {
        self.mode = Mode::ALL[self.selection.min(Mode::ALL.len() - 1)];
        self.restart()?;
        self.transition(Screen::Typing);
      }
      Action::Text(_) => match action.character() {
        Some('k') => self.selection = self.selection.saturating_sub(1),
        Some('j') => self.selection = (self.selection + 1).min(Mode::ALL.len() - 1),
        Some('?') => self.show_help = !self.show_help,
        Some('s') if self.settings_enabled => {
          self.settings = Settings::new(self.word_count);
          self.transition(Screen::Settings);
        }
        _ => {}
      },
      Action::Delete | Action::Escape | Action::Tab => {}
    }

    Ok(Flow::Continue)
  }

  fn handle_typing(&mut self, action: Action) -> Result<Flow, Error> {
    match action {
      Action::Tab => self.restart()?,
      Action::Confirm => {
        self.session.finish();
        self.complete();
      }
      Action::Delete => {
        self.session.backspace();
      }
      Action::Text(ref text) => match action.character() {
        Some(c) => {
          if self.session.type_character(c) == Keystroke::Completed {
            self.complete();
          }
        }
        None => debug!(
          len = text.chars().count(),
          "ignored keystroke without exactly one character"
        ),
      },
      Action::Down | Action::Escape | Action::Up => {}
    }

    Ok(Flow::Continue)
  }

  fn handle_results(&mut self, action: Action) -> Flow {
    if matches!(action, Action::Tab | Action::Confirm) {
      self.selection = 0;

      if self.mode_select {
        self.transition(Screen::ModeSelect);
      } else if let Err(error) = self.restart() {
        warn!(%error, "failed to start a new attempt");
      } else {
        self.transition(Screen::Typing);
      }
    }

    Flow::Continue
  }

  fn handle_settings(&mut self, action: Action) -> Flow {
    match action {
      Action::Up => self.settings.focus_previous(),
      Action::Down => self.settings.focus_next(),
      Action::Confirm if self.settings.submit_focused() => {
        self.submitted_word_count = self.settings.word_count();
        info!(word_count = ?self.submitted_word_count, "settings submitted");
        return Flow::Quit;
      }
      Action::Confirm | Action::Tab => self.settings.focus_next(),
      Action::Delete => {
        self.settings.delete();
      }
      Action::Text(_) => {
        if let Some(c) = action.character() {
          self.settings.insert(c);
        }
      }
      Action::Escape => {}
    }

    Flow::Continue
  }

  fn restart(&mut self) -> Result<(), Error> {
    let target = match self.mode {
      Mode::Words => self.source.generate_phrase(self.word_count),
      Mode::Text => self.source.pick_random(&self.corpus)?,
    };

    if target.is_empty() {
      return Err(Error::EmptySelection);
    }

    info!(mode = self.mode.label(), len = target.len(), "starting attempt");

    self.session.reset(target);

    Ok(())
  }

  fn complete(&mut self) {
    let statistics = self.session.statistics();

    info!(
      accuracy = statistics.accuracy,
      mistakes = statistics.mistakes,
      typed_symbols = statistics.typed_symbols,
      wpm = statistics.wpm,
      "attempt finished"
    );

    self.transition(Screen::Results);
  }

  fn transition(&mut self, screen: Screen) {
    info!(from = ?self.screen, to = ?screen, "screen changed");
    self.screen = screen;
  }

  pub(crate) fn screen(&self) -> Screen {
    self.screen
  }

  pub(crate) fn selection(&self) -> usize {
    self.selection
  }

  pub(crate) fn session(&self) -> &Session {
    &self.session
  }

  pub(crate) fn settings(&self) -> &Settings {
    &self.settings
  }

  pub(crate) fn settings_enabled(&self) -> bool {
    self.settings_enabled
  }

  pub(crate) fn show_help(&self) -> bool {
    self.show_help
  }

  pub(crate) fn submitted_word_count(&self) -> Option<usize> {
    self.submitted_word_count
  }
}
