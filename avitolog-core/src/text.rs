//! Splitting comment text into words and masking banned words.
//!
//! Words are classified by a plain lookup in a fixed separator set
//! instead of a pattern matching engine.

use std::iter;

const SEPARATORS: &[char] = &[
    ' ', '\t', '\n', '\r', ',', '.', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'',
    '<', '>', '/', '\\', '|', '@', '#', '$', '%', '^', '&', '*', '-', '_', '+', '=', '~', '`',
];

/// Replacement for every character of a censored word.
pub const MASK_CHAR: char = '*';

pub fn is_word_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// A maximal run of either word or separator characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    is_word: bool,
    text: &'a str,
}

impl<'a> Token<'a> {
    pub const fn is_word(&self) -> bool {
        self.is_word
    }

    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Splits the text into alternating runs of word and separator characters.
///
/// Nothing is dropped: concatenating all tokens yields the original text.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current_is_word = None;
    for (pos, c) in text.char_indices() {
        let is_word = !is_word_separator(c);
        match current_is_word {
            None => {
                current_is_word = Some(is_word);
            }
            Some(current) if current == is_word => {}
            Some(current) => {
                tokens.push(Token {
                    is_word: current,
                    text: &text[start..pos],
                });
                start = pos;
                current_is_word = Some(is_word);
            }
        }
    }
    if let Some(is_word) = current_is_word {
        tokens.push(Token {
            is_word,
            text: &text[start..],
        });
    }
    tokens
}

/// Masks every word that contains one of the banned words.
///
/// Matching is case-insensitive and also hits banned words that are
/// part of a longer word. A matching word is replaced as a whole by
/// [`MASK_CHAR`]s, one per character, so the result always has the
/// same number of characters as the input. Separators and words
/// without a match are kept as they are.
pub fn censor<I>(text: &str, banned_words: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let banned_words: Vec<_> = banned_words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();
    if banned_words.is_empty() {
        return text.to_owned();
    }
    let mut censored = String::with_capacity(text.len());
    for token in tokenize(text) {
        if token.is_word() && contains_any(&token.as_str().to_lowercase(), &banned_words) {
            censored.extend(iter::repeat(MASK_CHAR).take(token.char_count()));
        } else {
            censored.push_str(token.as_str());
        }
    }
    censored
}

fn contains_any(word: &str, banned_words: &[String]) -> bool {
    banned_words.iter().any(|banned| word.contains(banned.as_str()))
}
