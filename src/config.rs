use super::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct Config {
  #[serde(default)]
  pub(crate) log_file: Option<PathBuf>,
  #[serde(default = "default_log_level")]
  pub(crate) log_level: String,
  #[serde(default = "default_true")]
  pub(crate) mode_select: bool,
  #[serde(default = "default_true")]
  pub(crate) settings_enabled: bool,
  #[serde(default = "default_texts_path")]
  pub(crate) texts_path: PathBuf,
  #[serde(default = "default_word_count")]
  pub(crate) word_count: usize,
  #[serde(default)]
  pub(crate) theme: Theme,
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_texts_path() -> PathBuf {
  PathBuf::from("texts")
}

fn default_true() -> bool {
  true
}

fn default_word_count() -> usize {
  10
}

impl Default for Config {
  fn default() -> Self {
    Self {
      log_file: None,
      log_level: default_log_level(),
      mode_select: default_true(),
      settings_enabled: default_true(),
      texts_path: default_texts_path(),
      word_count: default_word_count(),
      theme: Theme::default(),
    }
  }
}

impl Config {
  pub(crate) fn default_path() -> PathBuf {
    dirs::config_dir()
      .unwrap_or_else(|| PathBuf::from("."))
      .join("typer")
      .join("config.toml")
  }

  /// Reads the config at `path`, falling back to defaults if it does not exist.
  pub(crate) fn load(path: &Path) -> Result<Self> {
    if !path.exists() {
      return Ok(Self::default());
    }

    let content = fs::read_to_string(path)
      .with_context(|| format!("failed to read config file {}", path.display()))?;

    Ok(toml::from_str(&content).map_err(|source| Error::Config {
      path: path.to_owned(),
      source,
    })?)
  }

  pub(crate) fn save(&self, path: &Path) -> Result {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    fs::write(path, toml::to_string_pretty(self)?)
      .with_context(|| format!("failed to write config file {}", path.display()))?;

    Ok(())
  }
}
