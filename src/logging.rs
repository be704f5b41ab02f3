use {
  super::*,
  tracing_appender::non_blocking::WorkerGuard,
  tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

/// Installs a file-backed subscriber when a log file is configured.
///
/// Standard output belongs to the UI, so nothing is logged unless a file is
/// set. `RUST_LOG` takes precedence over the configured level. The returned
/// guard flushes pending records when dropped and must outlive the program's
/// last log call.
pub(crate) fn init(config: &Config) -> Result<Option<WorkerGuard>> {
  let Some(path) = &config.log_file else {
    return Ok(None);
  };

  let (directory, file_name) = split(path)?;

  fs::create_dir_all(directory)
    .with_context(|| format!("failed to create log directory {}", directory.display()))?;

  let (writer, guard) =
    tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));

  let filter =
    EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;

  tracing_subscriber::registry()
    .with(filter)
    .with(fmt::layer().with_writer(writer).with_ansi(false))
    .try_init()?;

  Ok(Some(guard))
}

fn split(path: &Path) -> Result<(&Path, &std::ffi::OsStr)> {
  let file_name = path
    .file_name()
    .with_context(|| format!("log file path {} has no file name", path.display()))?;

  let directory = path
    .parent()
    .filter(|parent| !parent.as_os_str().is_empty())
    .unwrap_or(Path::new("."));

  Ok((directory, file_name))
}
