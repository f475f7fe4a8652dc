use std::fmt;

use serde::{Serialize, Serializer};

/// Average adult silent reading speed.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time, rounded up to whole minutes.
///
/// Displays as `< 1 min`, `1 min` or `{n} mins`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ReadingTime {
    minutes: u64,
}

impl ReadingTime {
    /// Builds a reading time from an untrusted numeric word count.
    ///
    /// NaN, infinite, zero and negative values all yield `< 1 min`.
    pub fn from_word_estimate(words: f64) -> Self {
        if !words.is_finite() || words <= 0.0 {
            return Self::default();
        }
        let minutes = (words / WORDS_PER_MINUTE as f64).ceil();
        Self {
            minutes: minutes as u64,
        }
    }

    pub fn minutes(&self) -> u64 {
        self.minutes
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.minutes {
            0 => f.write_str("< 1 min"),
            1 => f.write_str("1 min"),
            n => write!(f, "{n} mins"),
        }
    }
}

impl Serialize for ReadingTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Estimates reading time for `word_count` words at [`WORDS_PER_MINUTE`].
pub fn estimate_reading_time(word_count: usize) -> ReadingTime {
    ReadingTime {
        minutes: word_count.div_ceil(WORDS_PER_MINUTE) as u64,
    }
}
