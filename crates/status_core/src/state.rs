use readability_core::DocumentMetrics;

use crate::view_model::{AppViewModel, StatusBarView};

/// Character limit the editor ships with.
pub const DEFAULT_CHARACTER_LIMIT: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    metrics: DocumentMetrics,
    character_limit: Option<usize>,
    revision: u64,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            metrics: DocumentMetrics::default(),
            character_limit: Some(DEFAULT_CHARACTER_LIMIT),
            revision: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_character_limit(limit: Option<usize>) -> Self {
        Self {
            character_limit: limit,
            ..Self::default()
        }
    }

    pub fn metrics(&self) -> &DocumentMetrics {
        &self.metrics
    }

    pub fn character_limit(&self) -> Option<usize> {
        self.character_limit
    }

    /// Number of content changes applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_over_limit(&self) -> bool {
        self.character_limit
            .is_some_and(|limit| self.metrics.characters > limit)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            status: StatusBarView {
                characters: self.metrics.characters,
                character_limit: self.character_limit,
                over_limit: self.is_over_limit(),
                words: self.metrics.words,
                reading_time: self.metrics.reading_time.to_string(),
                reading_level: self.metrics.reading_level,
            },
            revision: self.revision,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Replaces the metrics, marking dirty only if anything visible changed.
    pub(crate) fn set_metrics(&mut self, metrics: DocumentMetrics) {
        self.revision += 1;
        if self.metrics != metrics {
            self.metrics = metrics;
            self.dirty = true;
        }
    }

    pub(crate) fn set_character_limit(&mut self, limit: Option<usize>) {
        if self.character_limit != limit {
            self.character_limit = limit;
            self.dirty = true;
        }
    }
}
