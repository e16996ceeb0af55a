//! The `LispInput` contract: end of input versus failure, adapters, seeking.
use std::io;

use lispio::backends::{IoInput, StringInput};
use lispio::{InputError, InputStatus, LispInput, PeekableInput, Seekable, TrackedInput};
use test_case::test_case;

/// Yields its text, then fails as if the connection dropped.
struct AbruptInput {
    inner: StringInput,
}

impl LispInput for AbruptInput {
    type Error = InputError;

    fn next_char(&mut self) -> Result<Option<char>, Self::Error> {
        match self.inner.next_char() {
            Ok(Some(c)) => Ok(Some(c)),
            Ok(None) => Err(io::Error::from(io::ErrorKind::UnexpectedEof).into()),
            Err(never) => match never {},
        }
    }
}

enum Outcome {
    Finished(String),
    Failed(String, InputError),
}

fn drain<I: LispInput<Error = InputError>>(mut input: I) -> Outcome {
    let mut seen = String::new();
    loop {
        match input.next_char() {
            Ok(Some(c)) => seen.push(c),
            Ok(None) => return Outcome::Finished(seen),
            Err(err) => return Outcome::Failed(seen, err),
        }
    }
}

#[test]
fn test_clean_end_and_failure_are_distinct() {
    let clean = drain(IoInput::new("(a b)".as_bytes()));
    assert!(matches!(clean, Outcome::Finished(ref s) if s == "(a b)"));

    let abrupt = drain(AbruptInput {
        inner: StringInput::new("(a b"),
    });
    match abrupt {
        Outcome::Failed(seen, InputError::Io(err)) => {
            assert_eq!(seen, "(a b");
            assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        }
        _ => panic!("expected an I/O failure"),
    }
}

#[test]
fn test_end_of_input_repeats() {
    let mut input = IoInput::new(&b"x"[..]);
    assert_eq!(input.next_char().unwrap(), Some('x'));
    for _ in 0..3 {
        assert!(input.next_char().unwrap().is_none());
    }
}

#[test]
fn test_chars_yields_errors_in_place() {
    let mut input = IoInput::new(&[b'o', b'k', 0xFF, b'!'][..]);
    let mut chars = input.chars();
    assert_eq!(chars.next().unwrap().unwrap(), 'o');
    assert_eq!(chars.next().unwrap().unwrap(), 'k');
    assert!(matches!(chars.next(), Some(Err(InputError::InvalidUtf8 { offset: 2 }))));
}

#[test_case("", 1; "empty")]
#[test_case("no newline", 1; "single line")]
#[test_case("a\nb\n", 3; "trailing newline")]
#[test_case("\n\n\n", 4; "blank lines")]
#[test_case("a\r\nb", 2; "crlf")]
fn test_tracked_line_counts(text: &str, line: usize) {
    let mut status = InputStatus::from_file("lines.ys");
    let mut input = TrackedInput::new(StringInput::new(text), &mut status);
    while input.next_char().unwrap().is_some() {}
    drop(input);
    assert_eq!(status.line_number(), line);
}

#[test]
fn test_rewind_after_lookahead() {
    let mut input = StringInput::new("(define x 1)");
    let start = input.position();
    let head: String = input.chars().take(7).map(Result::unwrap).collect();
    assert_eq!(head, "(define");

    input.set_position(start).unwrap();
    let mut peekable = PeekableInput::new(input);
    assert_eq!(peekable.peek_char().unwrap(), Some('('));
    assert_eq!(peekable.into_inner().position(), 1);
}

#[test]
fn test_backend_selected_at_runtime() {
    fn open(from_bytes: bool) -> Box<dyn LispInput<Error = InputError>> {
        if from_bytes {
            Box::new(IoInput::new(io::Cursor::new(b"(x)\n(y)".to_vec())))
        } else {
            Box::new(AbruptInput {
                inner: StringInput::new("(x)\n(y)"),
            })
        }
    }

    let mut status = InputStatus::from_file("runtime.ys");
    let mut input = TrackedInput::new(open(true), &mut status);
    let text: Result<String, _> = input.chars().collect();
    drop(input);
    assert_eq!(text.unwrap(), "(x)\n(y)");
    assert_eq!(status.to_string(), "runtime.ys:2");

    let mut status = InputStatus::from_file("runtime.ys");
    let mut input = TrackedInput::new(open(false), &mut status);
    let text: Result<String, _> = input.chars().collect();
    drop(input);
    assert!(text.is_err());
    assert_eq!(status.line_number(), 2);
}
