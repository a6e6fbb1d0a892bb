//! Corpus module for turning a text source into characters and words
//!
//! A corpus is read in a single streaming pass: bytes are decoded into
//! characters, and the tokenizer groups word characters into words while
//! still passing every character through for counting.

mod encoding;
mod reader;
mod source;
mod tokenizer;

// Re-export public types
pub use encoding::TextEncoding;
pub use reader::{CorpusChars, CorpusReader, CorpusTokens};
pub use source::{CorpusSource, STDIO_MARKER};
pub use tokenizer::{Token, TokenizerOptions, Tokens, chunk_boundaries};
