use super::*;

/// Failures that prevent an attempt from being started.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("failed to parse config file {}", path.display())]
  Config {
    path: PathBuf,
    source: toml::de::Error,
  },
  #[error("text corpus {} contains no texts", path.display())]
  EmptyCorpus { path: PathBuf },
  #[error("chosen text is empty")]
  EmptySelection,
  #[error("failed to read text corpus {}", path.display())]
  ResourceUnavailable {
    path: PathBuf,
    source: std::io::Error,
  },
}
