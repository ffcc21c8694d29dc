use rand::Rng;

use crate::error::CorpusError;

/// Word list bundled into the binary.
const EMBEDDED_WORDS: &str = include_str!("../data/words.txt");
const EMBEDDED_NAME: &str = "data/words.txt";

/// Immutable word list used to synthesize filler text.
///
/// Loaded once at process start and injected into every component that
/// samples text. Lines starting with `#` and blank lines are skipped.
#[derive(Clone, Debug)]
pub struct Corpus {
    words: Vec<String>,
}

impl Corpus {
    /// Load the corpus bundled with the binary.
    pub fn embedded() -> Result<Self, CorpusError> {
        Self::from_lines(EMBEDDED_NAME, EMBEDDED_WORDS.lines())
    }

    /// Build a corpus from raw lines, applying comment/blank filtering.
    pub fn from_lines<'a>(
        name: &str,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, CorpusError> {
        let words: Vec<String> = lines
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect();
        if words.is_empty() {
            return Err(CorpusError::Empty {
                name: name.to_owned(),
            });
        }
        Ok(Self { words })
    }

    /// Number of distinct entries in the corpus.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the corpus holds no words. Construction rejects
    /// empty corpora, so this is always `false` for a built `Corpus`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sample one word uniformly at random.
    pub fn sample_word<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }

    /// Sample between `min` and `max` words (inclusive), drawn uniformly
    /// with replacement and joined by single spaces.
    pub fn sample_words<R: Rng>(&self, rng: &mut R, min: usize, max: usize) -> String {
        let count = rng.gen_range(min..=max);
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            words.push(self.sample_word(rng));
        }
        words.join(" ")
    }
}
