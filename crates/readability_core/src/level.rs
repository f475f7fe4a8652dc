use std::fmt;

use serde::{Deserialize, Serialize};

use crate::syllables::count_syllables;
use crate::text::{count_words, lexical_words, split_sentences};

const BEGINNER_MAX_SENTENCE_LENGTH: f64 = 12.0;
const BEGINNER_MAX_COMPLEX_PERCENT: f64 = 10.0;
const INTERMEDIATE_MAX_SENTENCE_LENGTH: f64 = 20.0;
const INTERMEDIATE_MAX_COMPLEX_PERCENT: f64 = 20.0;

/// Words with at least this many estimated syllables count as complex.
const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Coarse three-tier estimate of text difficulty.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum ReadingLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ReadingLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Intermediate figures behind a [`ReadingLevel`] classification.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextComplexity {
    pub sentences: usize,
    pub words: usize,
    pub lexical_words: usize,
    pub complex_words: usize,
}

impl TextComplexity {
    /// Whitespace-delimited words per sentence; 0 when there are no sentences.
    pub fn average_sentence_length(&self) -> f64 {
        if self.sentences == 0 {
            return 0.0;
        }
        self.words as f64 / self.sentences as f64
    }

    /// Share of lexical words with three or more syllables, in percent.
    pub fn complex_word_percentage(&self) -> f64 {
        if self.lexical_words == 0 {
            return 0.0;
        }
        (self.complex_words as f64 * 100.0) / self.lexical_words as f64
    }

    /// Applies the inclusive thresholds in order; the first match wins.
    pub fn level(&self) -> ReadingLevel {
        if self.sentences == 0 {
            return ReadingLevel::Beginner;
        }
        let avg = self.average_sentence_length();
        let complex = self.complex_word_percentage();
        if avg <= BEGINNER_MAX_SENTENCE_LENGTH && complex <= BEGINNER_MAX_COMPLEX_PERCENT {
            ReadingLevel::Beginner
        } else if avg <= INTERMEDIATE_MAX_SENTENCE_LENGTH
            && complex <= INTERMEDIATE_MAX_COMPLEX_PERCENT
        {
            ReadingLevel::Intermediate
        } else {
            ReadingLevel::Advanced
        }
    }
}

/// Single pass over `text` collecting sentence, word and complexity counts.
pub fn analyze_complexity(text: &str) -> TextComplexity {
    let sentences = split_sentences(text).len();
    if sentences == 0 {
        return TextComplexity::default();
    }

    let lexical = lexical_words(text);
    let complex_words = lexical
        .iter()
        .filter(|word| count_syllables(word) >= COMPLEX_WORD_SYLLABLES)
        .count();

    TextComplexity {
        sentences,
        words: count_words(text),
        lexical_words: lexical.len(),
        complex_words,
    }
}

pub fn estimate_reading_level(text: &str) -> ReadingLevel {
    analyze_complexity(text).level()
}

/// Absent text is treated as empty and classifies as [`ReadingLevel::Beginner`].
pub fn estimate_reading_level_opt(text: Option<&str>) -> ReadingLevel {
    text.map_or_else(ReadingLevel::default, estimate_reading_level)
}
