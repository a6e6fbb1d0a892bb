use std::mem;

use crate::error::StatzError;

/// Word characters besides alphanumerics when nothing else is configured
pub const DEFAULT_EXTRA_WORD_CHARS: &[char] = &['\''];

/// Rules for splitting a character stream into words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// When false, words are folded to lowercase before counting
    pub case_sensitive: bool,
    /// Characters that are part of words in addition to alphanumerics
    pub extra_word_chars: Vec<char>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        TokenizerOptions {
            case_sensitive: true,
            extra_word_chars: DEFAULT_EXTRA_WORD_CHARS.to_vec(),
        }
    }
}

impl TokenizerOptions {
    pub fn is_word_char(&self, c: char) -> bool {
        c.is_alphanumeric() || self.extra_word_chars.contains(&c)
    }

    /// Apply the case policy to a word
    ///
    /// Used both on words read from the corpus and on tracked words supplied
    /// by the caller, so that lookups agree with the tally keys.
    pub fn normalize_word(&self, word: &str) -> String {
        if self.case_sensitive {
            word.to_string()
        } else {
            word.to_lowercase()
        }
    }
}

/// A unit produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Every character of the corpus, word character or separator
    Char(char),
    /// A maximal run of word characters
    Word(String),
}

/// Interleaved character/word stream over a fallible character iterator
///
/// A word is emitted right before the separator that ends it, or at end of
/// input. After an error the stream ends and the unfinished word is dropped.
pub struct Tokens<I> {
    chars: I,
    options: TokenizerOptions,
    word: String,
    pending: Option<Token>,
    done: bool,
}

impl<I> Tokens<I>
where
    I: Iterator<Item = Result<char, StatzError>>,
{
    pub fn new(chars: I, options: TokenizerOptions) -> Self {
        Tokens {
            chars,
            options,
            word: String::new(),
            pending: None,
            done: false,
        }
    }

    fn take_word(&mut self) -> Option<String> {
        if self.word.is_empty() {
            return None;
        }
        let word = mem::take(&mut self.word);
        Some(self.options.normalize_word(&word))
    }
}

impl<I> Iterator for Tokens<I>
where
    I: Iterator<Item = Result<char, StatzError>>,
{
    type Item = Result<Token, StatzError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(Ok(token));
        }
        if self.done {
            return None;
        }

        match self.chars.next() {
            Some(Ok(c)) if self.options.is_word_char(c) => {
                self.word.push(c);
                Some(Ok(Token::Char(c)))
            }
            Some(Ok(c)) => match self.take_word() {
                Some(word) => {
                    self.pending = Some(Token::Char(c));
                    Some(Ok(Token::Word(word)))
                }
                None => Some(Ok(Token::Char(c))),
            },
            Some(Err(err)) => {
                self.done = true;
                self.word.clear();
                Some(Err(err))
            }
            None => {
                self.done = true;
                self.take_word().map(|word| Ok(Token::Word(word)))
            }
        }
    }
}

/// Split `text` into at most `parts` slices without cutting through a word
///
/// Each boundary is moved forward to the next separator, so every slice
/// tokenizes to the same words it contributes to the whole text.
pub fn chunk_boundaries<'a>(
    text: &'a str,
    options: &TokenizerOptions,
    parts: usize,
) -> Vec<&'a str> {
    if parts <= 1 || text.is_empty() {
        return vec![text];
    }

    let mut slices = Vec::with_capacity(parts);
    let mut start = 0;
    for i in 1..parts {
        let target = text.len() * i / parts;
        if target <= start {
            continue;
        }
        let boundary = text[start..]
            .char_indices()
            .map(|(idx, c)| (start + idx, c))
            .skip_while(|(idx, _)| *idx < target)
            .find(|(_, c)| !options.is_word_char(*c))
            .map(|(idx, _)| idx);

        match boundary {
            Some(idx) if idx > start => {
                slices.push(&text[start..idx]);
                start = idx;
            }
            Some(_) => {}
            None => break,
        }
    }
    slices.push(&text[start..]);
    slices
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tokenizer_tests;
