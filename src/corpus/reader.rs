use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, Read};

use super::encoding::TextEncoding;
use super::source::CorpusSource;
use super::tokenizer::{TokenizerOptions, Tokens};
use crate::error::StatzError;

const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Token stream over an opened corpus source
pub type CorpusTokens = Tokens<CorpusChars<Box<dyn Read>>>;

/// Read a corpus from a file or stdin
///
/// Each call to [`chars`](Self::chars) or [`tokens`](Self::tokens) opens the
/// source again and starts a fresh pass. Standard input can only be drained
/// once; a second pass over it sees an empty stream.
#[derive(Debug, Clone)]
pub struct CorpusReader {
    source: CorpusSource,
    encoding: TextEncoding,
}

impl CorpusReader {
    pub fn new(source: CorpusSource, encoding: TextEncoding) -> Self {
        CorpusReader { source, encoding }
    }

    pub fn source(&self) -> &CorpusSource {
        &self.source
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Start a pass yielding decoded characters
    ///
    /// # Returns
    /// * `Ok(CorpusChars)` - Lazy character stream
    /// * `Err(StatzError::Io)` - If the file cannot be opened
    pub fn chars(&self) -> Result<CorpusChars<Box<dyn Read>>, StatzError> {
        let reader: Box<dyn Read> = match &self.source {
            CorpusSource::Path(path) => Box::new(File::open(path)?),
            CorpusSource::Stdin => Box::new(io::stdin().lock()),
        };
        log::debug!("Reading corpus {} as {}", self.source, self.encoding);
        Ok(CorpusChars::new(reader, self.encoding))
    }

    /// Start a pass yielding interleaved characters and words
    pub fn tokens(&self, options: &TokenizerOptions) -> Result<CorpusTokens, StatzError> {
        Ok(Tokens::new(self.chars()?, options.clone()))
    }
}

/// Incremental decoder from a byte reader to characters
///
/// Incomplete UTF-8 sequences at the end of a read are carried over to the
/// next one. Characters decoded before an invalid sequence are yielded first,
/// then a single [`StatzError::Decode`], then the stream ends.
pub struct CorpusChars<R> {
    reader: R,
    encoding: TextEncoding,
    buffer: Vec<u8>,
    pending: Vec<u8>,
    decoded: VecDeque<char>,
    offset: u64,
    failure: Option<StatzError>,
    finished: bool,
}

impl<R: Read> CorpusChars<R> {
    pub fn new(reader: R, encoding: TextEncoding) -> Self {
        CorpusChars {
            reader,
            encoding,
            buffer: vec![0; READ_BUFFER_SIZE],
            pending: Vec::new(),
            decoded: VecDeque::new(),
            offset: 0,
            failure: None,
            finished: false,
        }
    }

    /// Number of bytes decoded so far
    pub fn offset(&self) -> u64 {
        self.offset
    }

    fn fill(&mut self) {
        let read = loop {
            match self.reader.read(&mut self.buffer) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.failure = Some(StatzError::Io(e));
                    return;
                }
            }
        };

        if read == 0 {
            if self.pending.is_empty() {
                self.finished = true;
            } else {
                // Truncated multi-byte sequence at end of input
                self.failure = Some(StatzError::Decode {
                    offset: self.offset,
                    encoding: self.encoding,
                });
            }
            return;
        }

        match self.encoding {
            TextEncoding::Latin1 => {
                self.decoded
                    .extend(self.buffer[..read].iter().map(|&b| char::from(b)));
                self.offset += read as u64;
            }
            TextEncoding::Utf8 => {
                self.pending.extend_from_slice(&self.buffer[..read]);
                self.decode_pending_utf8();
            }
        }
    }

    fn decode_pending_utf8(&mut self) {
        let (valid_len, invalid) = match std::str::from_utf8(&self.pending) {
            Ok(text) => {
                self.decoded.extend(text.chars());
                (self.pending.len(), false)
            }
            Err(err) => {
                let valid_len = err.valid_up_to();
                if let Ok(text) = std::str::from_utf8(&self.pending[..valid_len]) {
                    self.decoded.extend(text.chars());
                }
                (valid_len, err.error_len().is_some())
            }
        };

        self.pending.drain(..valid_len);
        self.offset += valid_len as u64;

        if invalid {
            self.failure = Some(StatzError::Decode {
                offset: self.offset,
                encoding: self.encoding,
            });
        }
    }
}

impl<R: Read> Iterator for CorpusChars<R> {
    type Item = Result<char, StatzError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.decoded.pop_front() {
                return Some(Ok(c));
            }
            if let Some(err) = self.failure.take() {
                self.finished = true;
                return Some(Err(err));
            }
            if self.finished {
                return None;
            }
            self.fill();
        }
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
