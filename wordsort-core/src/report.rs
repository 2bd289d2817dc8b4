use std::{fmt, io::Write};

use crate::{
    config::Config,
    sorter::{collect_words, sort_words},
    tokenizer::{scanner::Tokenizer, token::Word},
};

/// A header followed by the words of one line, ordered by length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub header: String,
    pub words: Vec<Word>,
}

impl Report {
    /// Tokenizes `line`, keeps its words and sorts them as `config` says.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordsort_core::{config::Config, report::Report};
    /// let report = Report::build("a,bb,c", &Config::default());
    /// assert_eq!(report.to_string(), "Words sorted by size:\na\nc\nbb\n");
    /// ```
    #[tracing::instrument(level = "debug", skip(line, config), fields(len = line.len()))]
    pub fn build(line: &str, config: &Config) -> Self {
        let mut words = collect_words(Tokenizer::new(line));
        sort_words(&mut words, config.order);
        Self {
            header: config.header.clone(),
            words,
        }
    }

    /// Writes the header and then one word per line.
    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(out, "{}", self.header)?;
        for word in &self.words {
            writeln!(out, "{}", word.render())?;
        }
        out.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for word in &self.words {
            writeln!(f, "{}", word)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorter::SortOrder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_line_prints_only_header() {
        let report = Report::build("", &Config::default());
        assert!(report.words.is_empty());
        assert_eq!(report.to_string(), "Words sorted by size:\n");
    }

    #[test]
    fn test_write_to_matches_display() {
        let report = Report::build("the quick brown fox", &Config::default());
        let mut buffer = Vec::new();
        report.write_to(&mut buffer).unwrap();
        let written = String::from_utf8(buffer).unwrap();
        assert_eq!(written, report.to_string());
        assert_eq!(written, "Words sorted by size:\nthe\nfox\nquick\nbrown\n");
    }

    #[test]
    fn test_custom_header_and_order() {
        let config = Config {
            header: "Longest first:".to_string(),
            order: SortOrder::Descending,
        };
        let report = Report::build("I am here", &config);
        assert_eq!(report.to_string(), "Longest first:\nhere\nam\nI\n");
    }
}
