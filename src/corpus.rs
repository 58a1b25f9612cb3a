//! Word-list loading.
//!
//! The index assumes a corpus of distinct, reasonably short points. This
//! module turns a one-word-per-line file into exactly that: overlong lines are
//! dropped, words are optionally lowercased, and repeats are skipped. Every
//! skipped line is kept in a [`LoadReport`] so callers can show or persist it.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Individual warnings logged for overlong words before going quiet.
const TOO_LONG_WARN_LIMIT: usize = 10;
/// Individual warnings logged for duplicate words before going quiet.
const DUPLICATE_WARN_LIMIT: usize = 15;

/// Corpus loading options.
#[derive(Clone, Debug)]
pub struct CorpusOptions {
    /// Words longer than this many characters are skipped.
    pub max_word_len: usize,
    /// Lowercase every word before deduplication.
    pub lowercase: bool,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            max_word_len: 50,
            lowercase: true,
        }
    }
}

impl CorpusOptions {
    /// Set the maximum word length in characters.
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Enable or disable lowercasing.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

/// Lines skipped while loading a corpus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines longer than `max_word_len`, as read.
    pub too_long: Vec<String>,
    /// Lines that repeated an earlier word, as read.
    pub duplicates: Vec<String>,
}

impl LoadReport {
    /// True when nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.too_long.is_empty() && self.duplicates.is_empty()
    }

    /// Write `too_long_words.txt` and `duplicates.txt` into `dir`.
    ///
    /// Only non-empty lists are written. Returns the paths written.
    pub fn write_skipped(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for (name, lines) in [
            ("too_long_words.txt", &self.too_long),
            ("duplicates.txt", &self.duplicates),
        ] {
            if lines.is_empty() {
                continue;
            }
            let path = dir.join(name);
            let mut body = lines.join("\n");
            body.push('\n');
            fs::write(&path, body)?;
            written.push(path);
        }
        Ok(written)
    }
}

/// A deduplicated word list in first-occurrence order.
#[derive(Clone, Debug)]
pub struct Corpus {
    words: Vec<String>,
    report: LoadReport,
}

impl Corpus {
    /// Load a corpus from a file.
    pub fn from_path(path: impl AsRef<Path>, options: &CorpusOptions) -> Result<Self> {
        let path = path.as_ref();
        log::info!("reading corpus from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), options)
    }

    /// Load a corpus from any line-oriented reader.
    pub fn from_reader<R: BufRead>(reader: R, options: &CorpusOptions) -> Result<Self> {
        if options.max_word_len == 0 {
            return Err(Error::InvalidParameter {
                name: "max_word_len",
                message: "must be at least 1",
            });
        }

        let mut words = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut report = LoadReport::default();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }

            if word.chars().count() > options.max_word_len {
                report.too_long.push(line.clone());
                match report.too_long.len() {
                    n if n <= TOO_LONG_WARN_LIMIT => log::warn!(
                        "skipping word longer than {} characters: {word:?}",
                        options.max_word_len
                    ),
                    n if n == TOO_LONG_WARN_LIMIT + 1 => log::warn!(
                        "more than {TOO_LONG_WARN_LIMIT} overlong words, further messages suppressed"
                    ),
                    _ => {}
                }
                continue;
            }

            let word = if options.lowercase {
                word.to_lowercase()
            } else {
                word.to_string()
            };

            if seen.contains(&word) {
                report.duplicates.push(line);
                match report.duplicates.len() {
                    n if n <= DUPLICATE_WARN_LIMIT => log::warn!("skipping duplicate word {word:?}"),
                    n if n == DUPLICATE_WARN_LIMIT + 1 => log::warn!(
                        "more than {DUPLICATE_WARN_LIMIT} duplicate words, further messages suppressed"
                    ),
                    _ => {}
                }
                continue;
            }

            seen.insert(word.clone());
            words.push(word);
        }

        if words.is_empty() {
            return Err(Error::EmptyInput);
        }

        log::info!(
            "loaded {} words, skipped {} overlong and {} duplicate",
            words.len(),
            report.too_long.len(),
            report.duplicates.len()
        );

        Ok(Self { words, report })
    }

    /// Loaded words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// What was skipped while loading.
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Split into the word list and the load report.
    pub fn into_parts(self) -> (Vec<String>, LoadReport) {
        (self.words, self.report)
    }
}
