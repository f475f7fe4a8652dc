use serde::Serialize;

use crate::level::{estimate_reading_level, ReadingLevel};
use crate::reading_time::{estimate_reading_time, ReadingTime};
use crate::text::{count_characters, count_words};

/// Everything the status bar shows about a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DocumentMetrics {
    pub characters: usize,
    pub words: usize,
    pub reading_time: ReadingTime,
    pub reading_level: ReadingLevel,
}

impl DocumentMetrics {
    pub fn from_text(text: &str) -> Self {
        let words = count_words(text);
        Self {
            characters: count_characters(text),
            words,
            reading_time: estimate_reading_time(words),
            reading_level: estimate_reading_level(text),
        }
    }
}
