//! # Token Model
//!
//! Every character of the input is classified into exactly one of three
//! token kinds:
//!
//! * [`Word`]: a maximal run of ASCII letters
//! * [`Separator`]: any single character that is neither a letter nor NUL
//! * [`Token::Terminal`]: the end-of-input sentinel
//!
//! The set of kinds is closed, so [`Token`] is a plain enum and callers
//! match on it exhaustively.

use std::fmt;

/// The character that marks the end of input, rendered by [`Token::Terminal`].
pub const TERMINAL: char = '\0';

/// A maximal run of one or more ASCII letters.
///
/// Two words are equal when their text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Builds a word from `text`, returning `None` unless `text` is non-empty
    /// and made only of ASCII letters.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordsort_core::tokenizer::token::Word;
    /// assert!(Word::new("fox").is_some());
    /// assert!(Word::new("").is_none());
    /// assert!(Word::new("a b").is_none());
    /// ```
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if !text.is_empty() && text.chars().all(Self::is_letter) {
            Some(Self(text))
        } else {
            None
        }
    }

    /// Wraps a run the scanner has already checked letter by letter.
    pub(crate) fn from_run(run: &str) -> Self {
        debug_assert!(!run.is_empty() && run.chars().all(Self::is_letter));
        Self(run.to_string())
    }

    /// The ASCII-letter predicate: `a-z` or `A-Z`, nothing else.
    pub fn is_letter(c: char) -> bool {
        c.is_ascii_alphabetic()
    }

    /// Number of characters in the word.
    pub fn size(&self) -> usize {
        // ASCII only, so bytes and characters coincide.
        self.0.len()
    }

    pub fn render(&self) -> String {
        self.0.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single character that is neither an ASCII letter nor [`TERMINAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Separator(char);

impl Separator {
    /// Returns `None` for letters and for the terminal character.
    pub fn new(c: char) -> Option<Self> {
        if Word::is_letter(c) || c == TERMINAL {
            None
        } else {
            Some(Self(c))
        }
    }

    /// Wraps a character the scanner has already classified.
    pub(crate) fn from_char(c: char) -> Self {
        debug_assert!(!Word::is_letter(c) && c != TERMINAL);
        Self(c)
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    pub fn render(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of a [`Token`] without its payload.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum TokenKind {
    Word,
    Separator,
    Terminal,
}

/// One classified unit of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(Word),
    Separator(Separator),
    /// End of input. Carries no payload and renders as a lone NUL.
    Terminal,
}

impl Token {
    /// Canonical text of the token.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordsort_core::tokenizer::token::{Separator, Token, Word};
    /// let word = Token::Word(Word::new("fox").unwrap());
    /// assert_eq!(word.render(), "fox");
    /// let comma = Token::Separator(Separator::new(',').unwrap());
    /// assert_eq!(comma.render(), ",");
    /// assert_eq!(Token::Terminal.render(), "\0");
    /// ```
    pub fn render(&self) -> String {
        match self {
            Token::Word(word) => word.render(),
            Token::Separator(separator) => separator.render(),
            Token::Terminal => TERMINAL.to_string(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Word(_) => TokenKind::Word,
            Token::Separator(_) => TokenKind::Separator,
            Token::Terminal => TokenKind::Terminal,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Token::Terminal)
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Token::Word(word) => Some(word),
            _ => None,
        }
    }

    pub fn into_word(self) -> Option<Word> {
        match self {
            Token::Word(word) => Some(word),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => fmt::Display::fmt(word, f),
            Token::Separator(separator) => fmt::Display::fmt(separator, f),
            Token::Terminal => write!(f, "{}", TERMINAL),
        }
    }
}
