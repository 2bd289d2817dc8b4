//! # Tokenizer Component
//!
//! The tokenizer splits a line of text into words and separators.
//!
//! ## Design Principles
//!
//! * **Total Classification**: every character is a letter, the NUL
//!   terminal, or a separator, so scanning never fails.
//! * **Lazy Scanning**: tokens are produced one at a time on demand.
//! * **Forward-only Cursor**: the scanner borrows its input read-only and
//!   keeps a single byte offset as its only mutable state.
//!
//! ## Component Structure
//!
//! * [`token`]: the closed token model ([`Token`](token::Token),
//!   [`Word`](token::Word), [`Separator`](token::Separator))
//! * [`scanner`]: the [`Tokenizer`](scanner::Tokenizer) and its iterator adaptor
//!
//! ## Usage Example
//!
//! ```rust
//! use wordsort_core::tokenizer::scanner::Tokenizer;
//!
//! let words: Vec<String> = Tokenizer::new("the quick brown fox")
//!     .tokens()
//!     .filter_map(|token| token.into_word())
//!     .map(|word| word.render())
//!     .collect();
//! assert_eq!(words, vec!["the", "quick", "brown", "fox"]);
//! ```

pub mod scanner;
pub mod token;
