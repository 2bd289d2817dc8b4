//! Word collection and length ordering.

use serde::{Deserialize, Serialize};

use crate::tokenizer::{scanner::Tokenizer, token::Word};

/// Direction of the length ordering. Ties always keep input order.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Pulls tokens until the first terminal and keeps only the words.
pub fn collect_words(tokenizer: Tokenizer<'_>) -> Vec<Word> {
    let words: Vec<Word> = tokenizer.tokens().filter_map(|t| t.into_word()).collect();
    tracing::debug!("Collected {} words", words.len());
    words
}

/// Stable sort by [`Word::size`].
pub fn sort_words(words: &mut [Word], order: SortOrder) {
    match order {
        SortOrder::Ascending => words.sort_by_key(Word::size),
        // Reversing the key rather than the slice keeps equal words in input order.
        SortOrder::Descending => words.sort_by_key(|w| std::cmp::Reverse(w.size())),
    }
}

pub fn sort_by_size(words: &mut [Word]) {
    sort_words(words, SortOrder::Ascending);
}
