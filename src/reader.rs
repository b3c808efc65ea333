use std::io::Read;

use encoding_rs::{Decoder, DecoderResult, UTF_8};

use crate::error::{Error, Position};

const CHUNK_SIZE: usize = 4096;

/// A character source with push-back and line tracking.
///
/// Bytes are read from the underlying reader in chunks and decoded to
/// characters. UTF-8 is assumed unless a byte order mark says UTF-16.
///
/// `\r`, `\r\n` and `\n` are all read as a single `\n`. Characters pushed
/// back with [`PushbackReader::unread`] are returned by the following reads,
/// last pushed first, and do not move the position.
pub struct PushbackReader<R: Read> {
    inner: R,
    decoder: Decoder,
    bytes: Vec<u8>,
    decoded: String,
    offset: usize,
    finished: bool,
    pushed_back: Vec<char>,
    line: usize,
    column: usize,
    after_cr: bool,
}

impl<R: Read> PushbackReader<R> {
    pub fn new(inner: R) -> Self {
        PushbackReader {
            inner,
            decoder: UTF_8.new_decoder(),
            bytes: vec![0; CHUNK_SIZE],
            decoded: String::new(),
            offset: 0,
            finished: false,
            pushed_back: Vec::new(),
            line: 1,
            column: 0,
            after_cr: false,
        }
    }

    /// Read the next character, or `None` at the end of the input.
    pub fn read(&mut self) -> Result<Option<char>, Error> {
        if let Some(c) = self.pushed_back.pop() {
            return Ok(Some(c));
        }
        loop {
            let c = match self.next_decoded()? {
                Some(c) => c,
                None => return Ok(None),
            };
            if self.after_cr {
                self.after_cr = false;
                if c == '\n' {
                    continue;
                }
            }
            match c {
                '\n' => self.newline(),
                '\r' => {
                    self.after_cr = true;
                    self.newline();
                    return Ok(Some('\n'));
                }
                _ => self.column += 1,
            }
            return Ok(Some(c));
        }
    }

    /// Push a character back so the next [`PushbackReader::read`] returns it.
    pub fn unread(&mut self, c: char) {
        self.pushed_back.push(c);
    }

    /// Line and column of the last character read from the input.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn newline(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    fn next_decoded(&mut self) -> Result<Option<char>, Error> {
        loop {
            if let Some(c) = self.decoded[self.offset..].chars().next() {
                self.offset += c.len_utf8();
                return Ok(Some(c));
            }
            if self.finished {
                return Ok(None);
            }
            self.fill()?;
        }
    }

    fn fill(&mut self) -> Result<(), Error> {
        let n = self.inner.read(&mut self.bytes)?;
        let last = n == 0;
        self.decoded.clear();
        self.offset = 0;
        let mut input = &self.bytes[..n];
        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length_without_replacement(input.len())
                .unwrap_or(CHUNK_SIZE);
            self.decoded.reserve(needed);
            let (result, read) =
                self.decoder
                    .decode_to_string_without_replacement(input, &mut self.decoded, last);
            input = &input[read..];
            match result {
                DecoderResult::InputEmpty => break,
                DecoderResult::OutputFull => continue,
                DecoderResult::Malformed(_, _) => {
                    return Err(Error::MalformedInput {
                        position: self.position(),
                    })
                }
            }
        }
        if last {
            self.finished = true;
        }
        Ok(())
    }
}
