//! # Scanner
//!
//! [`Tokenizer`] walks a borrowed input string with a forward-only byte
//! cursor and produces one [`Token`] per call to [`Tokenizer::next_token`].
//!
//! ## Scan Step
//!
//! 1. Consume consecutive ASCII letters from the cursor.
//! 2. If any were consumed, return them as a [`Word`]. The character after
//!    the run is left for the next call.
//! 3. Otherwise look at the character under the cursor:
//!    * NUL yields [`Token::Terminal`] and the cursor stays on it.
//!    * Anything else is consumed and returned as a [`Separator`].
//! 4. At the end of input, return [`Token::Terminal`].
//!
//! Because the cursor never moves past an embedded NUL, every call after
//! the first NUL returns `Terminal` again. Callers stop at the first
//! `Terminal`; [`Tokenizer::tokens`] does that for them.

use std::iter::FusedIterator;

use super::token::{Separator, TERMINAL, Token, Word};

/// Forward-only scanner over a single input string.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    /// Byte offset of the next unread character. Always on a char boundary.
    cursor: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, cursor: 0 }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Current byte offset into the input.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// True once every further call to [`next_token`](Self::next_token)
    /// would return [`Token::Terminal`].
    pub fn is_exhausted(&self) -> bool {
        self.remaining().is_empty() || self.remaining().starts_with(TERMINAL)
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.cursor..]
    }

    /// Scans and returns the next token.
    ///
    /// Never fails: every character is a letter, NUL or a separator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wordsort_core::tokenizer::scanner::Tokenizer;
    /// # use wordsort_core::tokenizer::token::TokenKind;
    /// let mut tokenizer = Tokenizer::new("a,b");
    /// assert_eq!(tokenizer.next_token().render(), "a");
    /// assert_eq!(tokenizer.next_token().render(), ",");
    /// assert_eq!(tokenizer.next_token().render(), "b");
    /// assert_eq!(tokenizer.next_token().kind(), TokenKind::Terminal);
    /// ```
    #[tracing::instrument(level = "trace", skip(self), fields(cursor = self.cursor), ret)]
    pub fn next_token(&mut self) -> Token {
        let rest = self.remaining();

        // Letters are ASCII, so the run length in bytes is a valid slice end.
        let run = rest.bytes().take_while(u8::is_ascii_alphabetic).count();
        if run > 0 {
            self.cursor += run;
            return Token::Word(Word::from_run(&rest[..run]));
        }

        match rest.chars().next() {
            // The cursor is not advanced past NUL.
            Some(TERMINAL) => Token::Terminal,
            Some(c) => {
                self.cursor += c.len_utf8();
                Token::Separator(Separator::from_char(c))
            }
            None => Token::Terminal,
        }
    }

    /// Converts the scanner into an iterator that yields every token up to
    /// and including the first [`Token::Terminal`], then stops.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens {
            tokenizer: self,
            finished: false,
        }
    }
}

/// Iterator returned by [`Tokenizer::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    tokenizer: Tokenizer<'a>,
    finished: bool,
}

impl Tokens<'_> {
    pub fn position(&self) -> usize {
        self.tokenizer.position()
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.tokenizer.next_token();
        self.finished = token.is_terminal();
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}

/// Tokenizes `input` up to and including the first terminal.
///
/// # Examples
///
/// ```
/// # use wordsort_core::tokenizer::scanner::tokenize;
/// let rendered: Vec<String> = tokenize("hi there").iter().map(|t| t.render()).collect();
/// assert_eq!(rendered, vec!["hi", " ", "there", "\0"]);
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input).tokens().collect()
}
