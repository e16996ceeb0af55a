use core::convert::Infallible;

use crate::{InputError, LispInput, LispOutput, Seekable};

/// Reads characters from an owned string.
///
/// Used for evaluating a string as source and for tests. Supports seeking by
/// character position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringInput {
    text: String,
    /// Byte offset of the next character.
    offset: usize,
    /// Character index of the next character.
    position: usize,
}

impl StringInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            offset: 0,
            position: 0,
        }
    }

    /// The full text, including what has already been read.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The text that has not been read yet.
    #[inline]
    pub fn remaining(&self) -> &str {
        &self.text[self.offset..]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.text.len()
    }
}

impl From<&str> for StringInput {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StringInput {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl LispInput for StringInput {
    type Error = Infallible;

    fn next_char(&mut self) -> Result<Option<char>, Self::Error> {
        let next = self.remaining().chars().next();
        if let Some(c) = next {
            self.offset += c.len_utf8();
            self.position += 1;
        }
        Ok(next)
    }
}

impl Seekable for StringInput {
    #[inline]
    fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, position: usize) -> Result<(), InputError> {
        let mut indices = self.text.char_indices().map(|(idx, _)| idx);
        let offset = match indices.nth(position) {
            Some(offset) => offset,
            None => {
                let len = self.text.chars().count();
                if position != len {
                    return Err(InputError::OutOfBounds { position, len });
                }
                self.text.len()
            }
        };
        self.offset = offset;
        self.position = position;
        Ok(())
    }
}

/// Collects written characters into a `String`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringOutput {
    buf: String,
}

impl StringOutput {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Discards everything written so far, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl LispOutput for StringOutput {
    type Error = Infallible;

    #[inline]
    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        self.buf.push(c);
        Ok(())
    }
}
