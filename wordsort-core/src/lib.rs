//! # wordsort
//!
//! Reads a line of text, splits it into words and separators, and orders
//! the words by length.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Line → Tokenizer → Word Collection → Stable Sort → Report
//! ```
//!
//! ### Stage 1: Tokenization
//!
//! The [`tokenizer`] module scans the line lazily. Each call yields one
//! [`Token`](tokenizer::token::Token): a word (maximal run of ASCII
//! letters), a single-character separator, or the terminal sentinel.
//!
//! ### Stage 2: Collection and Sorting
//!
//! The [`sorter`] module keeps the words seen before the first terminal and
//! sorts them by length with a stable sort, so words of equal length keep
//! their order from the input.
//!
//! ### Stage 3: Reporting
//!
//! The [`report`] module renders a header line followed by one word per line.
//! Its header and sort direction come from [`config`].

pub mod config;
pub mod error;
pub mod report;
pub mod sorter;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use report::Report;
