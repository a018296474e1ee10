//! Extractor configuration

use crate::stoplist::StopwordList;

/// Configuration fixed at extractor construction
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) stopwords: StopwordList,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stopwords: StopwordList::english(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured stopwords
    pub fn stopwords(&self) -> &StopwordList {
        &self.stopwords
    }

}

/// Fluent builder for [`Config`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    stopwords: Option<StopwordList>,
    extra: Vec<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit stopword list
    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords = Some(StopwordList::new(words));
        self
    }

    /// Use stopwords parsed from stoplist text
    pub fn stopword_text(mut self, text: &str) -> Self {
        self.stopwords = Some(StopwordList::parse(text));
        self
    }

    /// Use the embedded English stoplist (the default)
    pub fn english_stopwords(mut self) -> Self {
        self.stopwords = Some(StopwordList::english());
        self
    }

    /// Add stopwords on top of the selected list
    pub fn extend_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra
            .extend(words.into_iter().map(|word| word.as_ref().to_string()));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        let mut stopwords = self.stopwords.unwrap_or_else(StopwordList::english);
        if !self.extra.is_empty() {
            stopwords.extend(&self.extra);
        }

        Config { stopwords }
    }
}
