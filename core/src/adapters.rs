use crate::{InputStatus, LispInput};

/// Adds one character of lookahead to any input.
///
/// The peeked result is cached, including end of input, so peeking
/// repeatedly reads from the backend only once. A failed peek is returned to
/// the caller and not cached; the next call asks the backend again.
#[derive(Debug)]
pub struct PeekableInput<I> {
    input: I,
    peeked: Option<Option<char>>,
}

impl<I: LispInput> PeekableInput<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            peeked: None,
        }
    }

    /// Returns the next character without consuming it.
    pub fn peek_char(&mut self) -> Result<Option<char>, I::Error> {
        if let Some(peeked) = self.peeked {
            return Ok(peeked);
        }
        let next = self.input.next_char()?;
        self.peeked = Some(next);
        Ok(next)
    }

    /// Consumes the next character if it satisfies `pred`.
    pub fn next_char_if(
        &mut self,
        pred: impl FnOnce(char) -> bool,
    ) -> Result<Option<char>, I::Error> {
        match self.peek_char()? {
            Some(c) if pred(c) => {
                self.peeked = None;
                Ok(Some(c))
            }
            _ => Ok(None),
        }
    }

    #[inline]
    pub fn get_ref(&self) -> &I {
        &self.input
    }

    /// Returns the wrapped input. A character that was peeked but not
    /// consumed is lost.
    #[inline]
    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: LispInput> LispInput for PeekableInput<I> {
    type Error = I::Error;

    fn next_char(&mut self) -> Result<Option<char>, Self::Error> {
        match self.peeked.take() {
            Some(peeked) => Ok(peeked),
            None => self.input.next_char(),
        }
    }
}

/// Advances an [`InputStatus`] on every newline read through it.
///
/// This is where line numbers move: the status itself never watches a
/// stream. The line number is bumped as `'\n'` is handed out, so by the time
/// the caller sees the newline the status already points at the next line.
///
/// ```ignore
/// let mut status = InputStatus::from_file("init.ys");
/// let mut input = TrackedInput::new(StringInput::new("a\nb"), &mut status);
/// while input.next_char()?.is_some() {}
/// assert_eq!(status.line_number(), 2);
/// ```
#[derive(Debug)]
pub struct TrackedInput<'a, I> {
    input: I,
    status: &'a mut InputStatus,
}

impl<'a, I: LispInput> TrackedInput<'a, I> {
    pub fn new(input: I, status: &'a mut InputStatus) -> Self {
        Self { input, status }
    }

    #[inline]
    pub fn status(&self) -> &InputStatus {
        self.status
    }

    #[inline]
    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: LispInput> LispInput for TrackedInput<'_, I> {
    type Error = I::Error;

    fn next_char(&mut self) -> Result<Option<char>, Self::Error> {
        let next = self.input.next_char()?;
        if next == Some('\n') {
            self.status.next_line();
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::{IoInput, StringInput};
    use crate::InputError;
    use std::io;

    /// Input that fails once, then yields `c` forever.
    struct FlakyInput {
        failed: bool,
        c: char,
    }

    impl LispInput for FlakyInput {
        type Error = &'static str;

        fn next_char(&mut self) -> Result<Option<char>, Self::Error> {
            if !self.failed {
                self.failed = true;
                return Err("transient");
            }
            Ok(Some(self.c))
        }
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut input = PeekableInput::new(StringInput::new("ab"));
        assert_eq!(input.peek_char().unwrap(), Some('a'));
        assert_eq!(input.peek_char().unwrap(), Some('a'));
        assert_eq!(input.next_char().unwrap(), Some('a'));
        assert_eq!(input.next_char().unwrap(), Some('b'));
        assert_eq!(input.peek_char().unwrap(), None);
        assert_eq!(input.next_char().unwrap(), None);
    }

    #[test]
    fn test_peek_error_not_cached() {
        let mut input = PeekableInput::new(FlakyInput {
            failed: false,
            c: 'z',
        });
        assert_eq!(input.peek_char(), Err("transient"));
        assert_eq!(input.peek_char(), Ok(Some('z')));
        assert_eq!(input.next_char(), Ok(Some('z')));
    }

    #[test]
    fn test_next_char_if() {
        let mut input = PeekableInput::new(StringInput::new("12)"));
        let mut digits = String::new();
        while let Some(c) = input.next_char_if(|c| c.is_ascii_digit()).unwrap() {
            digits.push(c);
        }
        assert_eq!(digits, "12");
        assert_eq!(input.next_char().unwrap(), Some(')'));
        assert!(input.get_ref().is_at_end());
    }

    #[test]
    fn test_tracked_counts_newlines() {
        let mut status = InputStatus::from_file("list.ys");
        let mut input = TrackedInput::new(StringInput::new("(a\n b)\n"), &mut status);

        let mut lines_seen = Vec::new();
        while let Some(c) = input.next_char().unwrap() {
            lines_seen.push((c, input.status().line_number()));
        }
        drop(input);
        assert_eq!(lines_seen[2], ('\n', 2));
        assert_eq!(lines_seen[3], (' ', 2));
        assert_eq!(status.line_number(), 3);
        assert_eq!(status.file_name(), "list.ys");
    }

    #[test]
    fn test_tracked_through_peekable() {
        let mut status = InputStatus::from_file("peek.ys");
        let tracked = TrackedInput::new(StringInput::new("\n\nx"), &mut status);
        let mut input = PeekableInput::new(tracked);

        input.peek_char().unwrap();
        assert_eq!(input.get_ref().status().line_number(), 2);
        while input.next_char().unwrap().is_some() {}
        drop(input);
        assert_eq!(status.line_number(), 3);
    }

    #[test]
    fn test_tracked_propagates_errors() {
        let mut status = InputStatus::from_file("bad.ys");
        let mut input = TrackedInput::new(IoInput::new(&[b'\n', 0xFF][..]), &mut status);
        assert_eq!(input.next_char().unwrap(), Some('\n'));
        assert!(matches!(input.next_char(), Err(InputError::InvalidUtf8 { offset: 1 })));
        assert_eq!(input.status().line_number(), 2);
    }

    #[test]
    fn test_tracked_over_boxed_dyn() {
        let boxed: Box<dyn LispInput<Error = InputError>> =
            Box::new(IoInput::new(io::Cursor::new(b"a\nb".to_vec())));
        let mut status = InputStatus::new();
        let mut input = TrackedInput::new(boxed, &mut status);
        while input.next_char().unwrap().is_some() {}
        drop(input);
        assert_eq!(status.line_number(), 2);
    }
}
