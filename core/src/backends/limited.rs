use crate::{LispOutput, OutputError};

/// An in-memory sink that holds at most `capacity` characters.
///
/// Once full, every further [`put_char`](LispOutput::put_char) fails with
/// [`OutputError::Full`]. Characters written before that point are kept,
/// which makes this the reference for partial-write behaviour: writing a
/// string longer than the remaining room stores its prefix and then fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitedOutput {
    buf: String,
    len: usize,
    capacity: usize,
}

impl LimitedOutput {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: String::new(),
            len: 0,
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of characters written.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Characters that can still be written.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.len)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl LispOutput for LimitedOutput {
    type Error = OutputError;

    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        if self.len >= self.capacity {
            return Err(OutputError::Full {
                capacity: self.capacity,
            });
        }
        self.buf.push(c);
        self.len += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_to_capacity() {
        let mut out = LimitedOutput::new(3);
        out.write_str("abc").unwrap();
        assert_eq!(out.remaining(), 0);
        assert!(matches!(out.put_char('d'), Err(OutputError::Full { capacity: 3 })));
        assert_eq!(out.as_str(), "abc");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let mut out = LimitedOutput::new(2);
        out.write_str("λ→").unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out.as_str().len(), 5);
    }

    #[test]
    fn test_zero_capacity() {
        let mut out = LimitedOutput::new(0);
        out.write_str("").unwrap();
        assert!(out.is_empty());
        assert!(out.write_str("x").is_err());
        assert_eq!(out.into_string(), "");
    }
}
