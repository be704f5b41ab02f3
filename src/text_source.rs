use super::*;

/// Common English words used for generated phrases.
const WORDS: &[&str] = &[
  "about", "after", "also", "back", "because", "come", "could", "day", "even", "first", "from",
  "give", "good", "have", "into", "just", "know", "like", "look", "make", "most", "new", "now",
  "only", "other", "over", "people", "say", "some", "take", "than", "that", "their", "then",
  "there", "these", "think", "time", "two", "use", "want", "way", "well", "what", "when", "which",
  "who", "will", "with", "work", "would", "year", "your",
];

/// Which kind of target text an attempt is played with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
  Words,
  Text,
}

impl Mode {
  pub(crate) const ALL: [Mode; 2] = [Mode::Words, Mode::Text];

  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Words => "words",
      Self::Text => "text",
    }
  }
}

/// Candidate texts, one per non-blank line, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Corpus {
  texts: Vec<String>,
}

impl Corpus {
  pub(crate) fn parse(content: &str) -> Self {
    Self {
      texts: content
        .trim_matches('\n')
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect(),
    }
  }

  pub(crate) fn texts(&self) -> &[String] {
    &self.texts
  }
}

pub(crate) trait TextSource {
  fn load_corpus(&self) -> Result<Corpus, Error>;

  fn pick_random(&mut self, corpus: &Corpus) -> Result<Vec<char>, Error>;

  fn generate_phrase(&mut self, word_count: usize) -> Vec<char>;
}

#[derive(Debug, Clone)]
pub(crate) struct FileTextSource {
  path: PathBuf,
}

impl FileTextSource {
  pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

impl TextSource for FileTextSource {
  fn load_corpus(&self) -> Result<Corpus, Error> {
    let content = fs::read_to_string(&self.path).map_err(|source| Error::ResourceUnavailable {
      path: self.path.clone(),
      source,
    })?;

    let corpus = Corpus::parse(&content);

    if corpus.texts().is_empty() {
      return Err(Error::EmptyCorpus {
        path: self.path.clone(),
      });
    }

    info!(path = %self.path.display(), texts = corpus.texts().len(), "loaded text corpus");

    Ok(corpus)
  }

  fn pick_random(&mut self, corpus: &Corpus) -> Result<Vec<char>, Error> {
    let text = corpus
      .texts()
      .choose(&mut rand::thread_rng())
      .ok_or(Error::EmptySelection)?;

    if text.is_empty() {
      return Err(Error::EmptySelection);
    }

    Ok(text.chars().collect())
  }

  fn generate_phrase(&mut self, word_count: usize) -> Vec<char> {
    let mut generator = rand::thread_rng();

    (0..word_count.max(1))
      .filter_map(|_| WORDS.choose(&mut generator))
      .cloned()
      .collect::<Vec<&str>>()
      .join(" ")
      .chars()
      .collect()
  }
}
