use readability_core::ReadingLevel;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub status: StatusBarView,
    pub revision: u64,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarView {
    pub characters: usize,
    pub character_limit: Option<usize>,
    pub over_limit: bool,
    pub words: usize,
    pub reading_time: String,
    pub reading_level: ReadingLevel,
}

impl StatusBarView {
    /// Single-line rendering, e.g.
    /// `Characters: 12 / 10000 | Words: 2 | Reading time: 1 min | Level: Beginner`.
    pub fn status_line(&self) -> String {
        let characters = match self.character_limit {
            Some(limit) => format!("{} / {}", self.characters, limit),
            None => self.characters.to_string(),
        };
        format!(
            "Characters: {characters} | Words: {words} | Reading time: {time} | Level: {level}",
            words = self.words,
            time = self.reading_time,
            level = self.reading_level,
        )
    }
}
