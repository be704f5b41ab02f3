use super::*;

const TICK: Duration = Duration::from_millis(100);

/// Raw-mode terminal on the alternate screen, restored when dropped.
pub(crate) struct Console;

impl Console {
  pub(crate) fn enter() -> Result<Self> {
    terminal::enable_raw_mode()?;

    let console = Self;

    command!(EnterAlternateScreen, EnableBracketedPaste, Hide)?;

    Ok(console)
  }

  pub(crate) fn draw(&mut self, frame: &Frame) -> Result {
    let mut out = stdout().lock();

    queue!(out, Clear(ClearType::All))?;

    for (row, line) in frame.lines.iter().enumerate() {
      let row = u16::try_from(row)?;

      queue!(out, MoveTo(0, row))?;

      for span in &line.spans {
        if let Some(fg) = span.style.fg {
          queue!(out, SetForegroundColor(Color::AnsiValue(fg)))?;
        }

        if let Some(bg) = span.style.bg {
          queue!(out, SetBackgroundColor(Color::AnsiValue(bg)))?;
        }

        if span.style.bold {
          queue!(out, SetAttribute(Attribute::Bold))?;
        }

        queue!(
          out,
          Print(&span.text),
          SetAttribute(Attribute::Reset),
          ResetColor
        )?;
      }
    }

    out.flush()?;

    Ok(())
  }
}

impl Drop for Console {
  fn drop(&mut self) {
    if let Err(error) = command!(Show, DisableBracketedPaste, LeaveAlternateScreen) {
      warn!(%error, "failed to leave alternate screen");
    }

    if let Err(error) = terminal::disable_raw_mode() {
      warn!(%error, "failed to disable raw mode");
    }
  }
}

/// Processes one input event at a time until the controller asks to quit,
/// redrawing after every event.
pub(crate) fn run<S: TextSource>(controller: &mut Controller<S>, theme: &Theme) -> Result {
  let mut console = Console::enter()?;

  console.draw(&render(controller, theme))?;

  loop {
    if !event::poll(TICK)? {
      continue;
    }

    let event = event::read()?;

    if matches!(event, Event::Resize(..)) {
      console.draw(&render(controller, theme))?;
      continue;
    }

    let Some(action) = Action::from_event(event) else {
      continue;
    };

    if controller.handle(action)? == Flow::Quit {
      break;
    }

    console.draw(&render(controller, theme))?;
  }

  Ok(())
}
