use {
  crate::{
    action::Action,
    arguments::Arguments,
    config::Config,
    controller::{Controller, Flow, Screen},
    error::Error,
    presenter::{Frame, render},
    session::{Keystroke, Session},
    settings::Settings,
    statistics::Statistics,
    text_source::{Corpus, FileTextSource, Mode, TextSource},
    theme::{Style, Theme},
  },
  anyhow::Context,
  clap::Parser,
  crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyModifiers},
    execute, queue,
    style::{
      Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
  },
  rand::seq::SliceRandom,
  serde::{Deserialize, Serialize},
  std::{
    fmt::{self, Display, Formatter},
    fs,
    io::{Write, stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  tracing::{debug, info, warn},
};

macro_rules! command {
  ($($cmd:expr),+ $(,)?) => {
    { execute!(stdout(), $($cmd),+) }
  };
}

mod action;
mod arguments;
mod config;
mod console;
mod controller;
mod error;
mod logging;
mod presenter;
mod session;
mod settings;
mod statistics;
mod text_source;
mod theme;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
