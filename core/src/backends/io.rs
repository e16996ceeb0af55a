use std::io::{self, Read, Write};
use std::ops::RangeInclusive;

use crate::{InputError, LispInput, LispOutput, OutputError};

/// Reads UTF-8 characters from any [`io::Read`].
///
/// Bytes are pulled one at a time, so wrap unbuffered sources (files,
/// sockets, stdin) in an [`io::BufReader`] first.
///
/// `ErrorKind::Interrupted` is retried; every other read error is returned
/// as [`InputError::Io`]. Malformed UTF-8 is reported with the byte offset of
/// the offending sequence. Decoding resumes where [`str::from_utf8`] would:
/// a byte that breaks a sequence is not consumed by the failed read and
/// starts the next one.
#[derive(Debug)]
pub struct IoInput<R> {
    reader: R,
    offset: usize,
    pending: Option<u8>,
}

impl<R: Read> IoInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            offset: 0,
            pending: None,
        }
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_byte(&mut self) -> Result<Option<u8>, InputError> {
        if let Some(byte) = self.pending.take() {
            self.offset += 1;
            return Ok(Some(byte));
        }
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.offset += 1;
                    return Ok(Some(byte[0]));
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    tracing::debug!(offset = self.offset, error = %err, "input read failed");
                    return Err(err.into());
                }
            }
        }
    }

    fn unread(&mut self, byte: u8) {
        self.pending = Some(byte);
        self.offset -= 1;
    }
}

/// Length of the multi-byte sequence introduced by `lead` and the range its
/// second byte must fall in, or `None` if `lead` cannot start one.
///
/// The narrowed ranges after `E0`, `ED`, `F0` and `F4` rule out overlong
/// forms, surrogates and code points past `U+10FFFF`.
fn sequence_shape(lead: u8) -> Option<(usize, RangeInclusive<u8>)> {
    let shape = match lead {
        0xC2..=0xDF => (2, 0x80..=0xBF),
        0xE0 => (3, 0xA0..=0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => (3, 0x80..=0xBF),
        0xED => (3, 0x80..=0x9F),
        0xF0 => (4, 0x90..=0xBF),
        0xF1..=0xF3 => (4, 0x80..=0xBF),
        0xF4 => (4, 0x80..=0x8F),
        _ => return None,
    };
    Some(shape)
}

impl<R: Read> LispInput for IoInput<R> {
    type Error = InputError;

    fn next_char(&mut self) -> Result<Option<char>, Self::Error> {
        let start = self.offset;
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };
        if first.is_ascii() {
            return Ok(Some(char::from(first)));
        }
        let (len, second) =
            sequence_shape(first).ok_or(InputError::InvalidUtf8 { offset: start })?;

        let mut buf = [first, 0, 0, 0];
        for (i, slot) in buf.iter_mut().enumerate().take(len).skip(1) {
            let expected = if i == 1 { second.clone() } else { 0x80..=0xBF };
            match self.read_byte()? {
                Some(byte) if expected.contains(&byte) => *slot = byte,
                Some(byte) => {
                    self.unread(byte);
                    return Err(InputError::InvalidUtf8 { offset: start });
                }
                None => return Err(InputError::TruncatedUtf8 { offset: start }),
            }
        }

        let decoded = core::str::from_utf8(&buf[..len])
            .map_err(|_| InputError::InvalidUtf8 { offset: start })?;
        Ok(decoded.chars().next())
    }
}

/// Writes characters as UTF-8 to any [`io::Write`].
///
/// After [`close`](Self::close) every write fails with
/// [`OutputError::Closed`].
#[derive(Debug)]
pub struct IoOutput<W: Write> {
    writer: W,
    closed: bool,
}

impl<W: Write> IoOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            closed: false,
        }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn flush(&mut self) -> Result<(), OutputError> {
        if self.closed {
            return Err(OutputError::Closed);
        }
        self.writer.flush().map_err(OutputError::from)
    }

    /// Flushes the writer and rejects all further output.
    ///
    /// The stream counts as closed even if the final flush fails.
    pub fn close(&mut self) -> Result<(), OutputError> {
        let flushed = self.flush();
        self.closed = true;
        flushed
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LispOutput for IoOutput<W> {
    type Error = OutputError;

    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        if self.closed {
            return Err(OutputError::Closed);
        }
        let mut buf = [0u8; 4];
        self.writer
            .write_all(c.encode_utf8(&mut buf).as_bytes())
            .map_err(|err| {
                tracing::debug!(error = %err, "output write failed");
                OutputError::from(err)
            })
    }
}
