/// One validated word entry. Built by [`crate::loader`], consumed once by a serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub(crate) words: Vec<String>,
    pub(crate) readings: Vec<String>,
    pub(crate) japanese_readings: Vec<String>,
    pub(crate) word_class: String,
    pub(crate) explanation: Option<String>,
}

impl WordRecord {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn readings(&self) -> &[String] {
        &self.readings
    }

    pub fn japanese_readings(&self) -> &[String] {
        &self.japanese_readings
    }

    pub fn word_class(&self) -> &str {
        &self.word_class
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    pub fn reading_sources(&self, scope: ReadingScope) -> impl Iterator<Item = &[String]> {
        let japanese: &[String] = match scope {
            ReadingScope::All => &self.japanese_readings,
            ReadingScope::ReadingsOnly => &[],
        };
        [self.readings.as_slice(), japanese].into_iter()
    }

    /// First field holding a tab or line break, which would split a dictionary line.
    pub fn layout_breaking_field(&self) -> Option<&str> {
        self.words
            .iter()
            .chain(&self.readings)
            .chain(&self.japanese_readings)
            .map(String::as_str)
            .chain([self.word_class.as_str()])
            .chain(self.explanation.as_deref())
            .find(|f| f.contains(['\t', '\n', '\r']))
    }

    pub fn line_count(&self, scope: ReadingScope) -> usize {
        let readings: usize = self.reading_sources(scope).map(<[String]>::len).sum();
        self.words.len() * readings
    }
}

/// Which reading lists feed the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadingScope {
    #[default]
    All,
    /// Leave out `japanese_reading`.
    ReadingsOnly,
}
