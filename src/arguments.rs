use super::*;

#[derive(Debug, Default, Parser)]
#[clap(about = "Terminal typing practice")]
pub(crate) struct Arguments {
  #[clap(long, help = "Read configuration from <CONFIG>")]
  config: Option<PathBuf>,
  #[clap(long, help = "Write logs to <LOG_FILE>")]
  log_file: Option<PathBuf>,
  #[clap(long, help = "Start typing a corpus text immediately")]
  no_mode_select: bool,
  #[clap(long, help = "Disable the settings screen")]
  no_settings: bool,
  #[clap(long, help = "Load candidate texts from <TEXTS>")]
  texts: Option<PathBuf>,
  #[clap(long, short, help = "Number of words in generated phrases")]
  word_count: Option<usize>,
}

impl Arguments {
  fn config_path(&self) -> PathBuf {
    self.config.clone().unwrap_or_else(Config::default_path)
  }

  fn merge(&self, mut config: Config) -> Config {
    if let Some(log_file) = &self.log_file {
      config.log_file = Some(log_file.clone());
    }

    if let Some(texts) = &self.texts {
      config.texts_path = texts.clone();
    }

    if let Some(word_count) = self.word_count {
      config.word_count = word_count;
    }

    if self.no_mode_select {
      config.mode_select = false;
    }

    if self.no_settings {
      config.settings_enabled = false;
    }

    config
  }

  pub(crate) fn run(self) -> Result {
    let path = self.config_path();

    let config = self.merge(Config::load(&path)?);

    let _guard = logging::init(&config)?;

    info!(config = %path.display(), texts = %config.texts_path.display(), "starting");

    let mut controller = Controller::new(FileTextSource::new(&config.texts_path), &config)?;

    console::run(&mut controller, &config.theme)?;

    if let Some(word_count) = controller.submitted_word_count() {
      let mut stored = Config::load(&path)?;
      stored.word_count = word_count;
      stored.save(&path)?;
      info!(word_count, config = %path.display(), "saved settings");
    }

    Ok(())
  }
}
