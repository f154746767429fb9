//! First-order Markov chain built from word transition counts

use super::text::{split_documents, tokenize};
use crate::error::PrimerResult;
use crate::probability::Distribution;
use rand::Rng;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Lyrics CSV columns: artist, song, link, text
const ARTIST_COLUMN: usize = 0;
const LYRICS_COLUMN: usize = 3;

/// Initial distribution plus a transition table
///
/// Transition weights are raw counts of how often one word follows
/// another; they are normalised when sampling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkovChain {
    initial: Distribution<String>,
    transitions: HashMap<String, Distribution<String>>,
}

impl MarkovChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the distribution the first word is drawn from
    pub fn with_initial(mut self, initial: Distribution<String>) -> Self {
        self.initial = initial;
        self
    }

    /// Set the distribution of words following `word`
    pub fn with_transitions(
        mut self,
        word: impl Into<String>,
        next: Distribution<String>,
    ) -> Self {
        self.transitions.insert(word.into(), next);
        self
    }

    /// Count one tokenized document: its first word and every consecutive
    /// word pair
    pub fn observe(&mut self, tokens: &[String]) {
        let Some(first) = tokens.first() else {
            return;
        };
        self.initial.increment(first.clone());

        for pair in tokens.windows(2) {
            self.transitions
                .entry(pair[0].clone())
                .or_default()
                .increment(pair[1].clone());
        }
    }

    /// Build a chain from a single text
    pub fn from_text(text: &str) -> Self {
        let mut chain = Self::new();
        chain.observe(&tokenize(text));
        chain
    }

    /// Build a chain from many documents; each contributes one initial word
    pub fn from_documents<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chain = Self::new();
        let mut count = 0usize;
        for document in documents {
            chain.observe(&tokenize(document.as_ref()));
            count += 1;
        }
        tracing::debug!(
            documents = count,
            states = chain.state_count(),
            "built markov chain"
        );
        chain
    }

    /// Build a chain from a text file whose documents are separated by
    /// blank lines
    pub fn from_file(path: impl AsRef<Path>) -> PrimerResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::from_documents(split_documents(&content)))
    }

    /// Build a chain from a lyrics CSV, keeping only the songs by `artist`
    ///
    /// Each matching row's lyrics column is one document. A header row is
    /// treated like any other row, so it only counts if its first column
    /// happens to equal `artist`. Rows too short to hold lyrics are skipped.
    pub fn from_csv<R: Read>(reader: R, artist: &str) -> PrimerResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut chain = Self::new();
        let mut songs = 0usize;
        for record in reader.records() {
            let record = record?;
            if record.get(ARTIST_COLUMN) != Some(artist) {
                continue;
            }
            let Some(lyrics) = record.get(LYRICS_COLUMN) else {
                tracing::trace!(row = ?record.position().map(|p| p.line()), "row has no lyrics");
                continue;
            };
            chain.observe(&tokenize(lyrics.trim()));
            songs += 1;
        }

        tracing::debug!(
            artist,
            songs,
            states = chain.state_count(),
            "built markov chain from csv"
        );
        Ok(chain)
    }

    /// [`from_csv`](Self::from_csv) on a file path
    pub fn from_csv_file(path: impl AsRef<Path>, artist: &str) -> PrimerResult<Self> {
        Self::from_csv(File::open(path.as_ref())?, artist)
    }

    pub fn initial(&self) -> &Distribution<String> {
        &self.initial
    }

    /// Distribution of words following `word`, if it was ever followed
    pub fn next_distribution(&self, word: &str) -> Option<&Distribution<String>> {
        self.transitions.get(word).filter(|d| !d.is_empty())
    }

    /// Number of words with at least one recorded successor
    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    /// Generate a word sequence
    ///
    /// The first word is drawn from the initial distribution, then at most
    /// `max_words` further words follow. Generation stops early at a word
    /// with no recorded successor.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_words: usize,
    ) -> PrimerResult<Vec<String>> {
        let mut sequence = vec![self.initial.sample(rng)?.clone()];

        for _ in 0..max_words {
            let Some(current) = sequence.last() else {
                break;
            };
            let Some(next) = self.next_distribution(current) else {
                tracing::trace!(word = %current, "no successor, stopping");
                break;
            };
            let word = next.sample(rng)?.clone();
            sequence.push(word);
        }

        Ok(sequence)
    }
}
