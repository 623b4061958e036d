//! Corpus loading: turning `<id>,<label>[,...]` lines into an id→label map.
//!
//! Each line is searched for the first `<digits>,<token>` occurrence. Only
//! the first two comma-separated fields matter; anything after the label is
//! ignored. Label tokens are kept verbatim (modulo surrounding whitespace)
//! so an unrecognized token loads fine and is only rejected when it is used
//! as a matrix key.
//!
//! # Example
//!
//! ```rust
//! use concord::corpus::Corpus;
//!
//! let corpus = Corpus::parse("1,pos,some tweet\n2,neg\n", "inline").unwrap();
//! assert_eq!(corpus.len(), 2);
//! assert_eq!(corpus.get("1"), Some("pos"));
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::error::{Error, Result};

// The label class matches raw bytes so text after the label need not be UTF-8.
static RECORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+),((?-u:[^,])+)").unwrap());

/// A single `(id, label)` pair read from a corpus line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRecord {
    /// Tweet id, kept as text so leading zeros survive
    pub id: String,
    /// Raw label token
    pub label: String,
}

impl LabeledRecord {
    /// Extract a record from one line, or `None` if the line has no
    /// `<digits>,<token>` occurrence.
    pub fn parse_line(line: &str) -> Option<Self> {
        Self::parse_bytes(line.as_bytes())
    }

    /// Like [`LabeledRecord::parse_line`] on a raw line.
    ///
    /// Invalid UTF-8 inside the label is replaced with U+FFFD, which makes
    /// the token an unknown label once it is compared.
    pub fn parse_bytes(line: &[u8]) -> Option<Self> {
        let caps = RECORD.captures(line)?;
        Some(Self {
            id: String::from_utf8_lossy(&caps[1]).into_owned(),
            label: String::from_utf8_lossy(&caps[2]).trim().to_string(),
        })
    }
}

/// Labels assigned by one annotator, keyed by tweet id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    source: String,
    labels: BTreeMap<String, String>,
}

impl Corpus {
    /// Create an empty corpus tagged with `source` for diagnostics.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            labels: BTreeMap::new(),
        }
    }

    /// Open and parse a corpus file.
    ///
    /// The file handle lives only for the duration of this call, so it is
    /// released whether parsing succeeds or not.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_reader(BufReader::new(file), path.display().to_string())?;
        log::info!("Loaded {} ids from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// Parse a corpus from any line-oriented reader.
    ///
    /// Lines are scanned as bytes; only the id and label have to be text.
    /// A line without a `<digits>,<token>` match is a fatal parse error.
    /// When an id repeats, the later line wins.
    pub fn from_reader<R: BufRead>(reader: R, source: impl Into<String>) -> Result<Self> {
        let mut corpus = Self::new(source);

        for (line_num, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|source| Error::Read {
                source_name: corpus.source.clone(),
                line: line_num + 1,
                source,
            })?;
            let record = LabeledRecord::parse_bytes(&line).ok_or_else(|| Error::Parse {
                source_name: corpus.source.clone(),
                line: line_num + 1,
                content: String::from_utf8_lossy(&line).trim_end_matches('\r').to_string(),
            })?;

            log::debug!("{} {}", record.id, record.label);
            if let Some(previous) = corpus.insert(record.id.clone(), record.label) {
                log::debug!(
                    "{}:{}: id {} relabeled (was {})",
                    corpus.source,
                    line_num + 1,
                    record.id,
                    previous
                );
            }
        }

        Ok(corpus)
    }

    /// Parse a corpus held in memory.
    pub fn parse(text: &str, source: impl Into<String>) -> Result<Self> {
        Self::from_reader(text.as_bytes(), source)
    }

    /// Build a corpus from `(id, label)` pairs, later pairs overwriting
    /// earlier ones.
    pub fn from_pairs<I, K, V>(source: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut corpus = Self::new(source);
        for (id, label) in pairs {
            corpus.insert(id, label);
        }
        corpus
    }

    /// Set the label of `id`, returning the label it replaced.
    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) -> Option<String> {
        self.labels.insert(id.into(), label.into())
    }

    /// Label token for `id`.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if no ids were loaded.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(id, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(id, label)| (id.as_str(), label.as_str()))
    }

    /// Where this corpus came from.
    pub fn source(&self) -> &str {
        &self.source
    }
}
