//! Readability core: pure reading-time and reading-level estimation.
mod level;
mod metrics;
mod reading_time;
mod syllables;
mod text;

pub use level::{
    analyze_complexity, estimate_reading_level, estimate_reading_level_opt, ReadingLevel,
    TextComplexity,
};
pub use metrics::DocumentMetrics;
pub use reading_time::{estimate_reading_time, ReadingTime, WORDS_PER_MINUTE};
pub use syllables::count_syllables;
pub use text::{count_characters, count_words, split_sentences};
