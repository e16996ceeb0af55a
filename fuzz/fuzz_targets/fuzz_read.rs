#![no_main]

use libfuzzer_sys::fuzz_target;
use lispio::backends::IoInput;
use lispio::{InputError, InputStatus, LispInput, TrackedInput};

/// Reads `text` from `input` character by character.
fn expect_chars(input: &mut IoInput<&[u8]>, text: &str) {
    for expected in text.chars() {
        assert_eq!(input.next_char().ok().flatten(), Some(expected));
    }
}

fuzz_target!(|data: &[u8]| {
    let mut status = InputStatus::from_file("fuzz.ys");
    let mut input = TrackedInput::new(IoInput::new(data), &mut status);

    let mut decoded = String::new();
    let failed = loop {
        match input.next_char() {
            Ok(Some(c)) => decoded.push(c),
            Ok(None) => break false,
            Err(_) => break true,
        }
    };
    drop(input);

    // Valid UTF-8 decodes exactly; anything else must fail rather than end cleanly.
    match std::str::from_utf8(data) {
        Ok(text) => {
            assert!(!failed);
            assert_eq!(decoded, text);
            assert_eq!(status.line_number(), 1 + text.matches('\n').count());
        }
        Err(_) => assert!(failed),
    }

    // Reading past errors classifies and resumes exactly like `from_utf8`.
    let mut input = IoInput::new(data);
    let mut rest = data;
    loop {
        let at = data.len() - rest.len();
        let err = match std::str::from_utf8(rest) {
            Ok(text) => {
                expect_chars(&mut input, text);
                assert!(matches!(input.next_char(), Ok(None)));
                break;
            }
            Err(err) => err,
        };

        let valid = std::str::from_utf8(&rest[..err.valid_up_to()]).unwrap();
        expect_chars(&mut input, valid);
        let bad = at + err.valid_up_to();

        match (input.next_char(), err.error_len()) {
            (Err(InputError::InvalidUtf8 { offset }), Some(len)) => {
                assert_eq!(offset, bad);
                assert_eq!(input.offset(), bad + len);
                rest = &rest[err.valid_up_to() + len..];
            }
            (Err(InputError::TruncatedUtf8 { offset }), None) => {
                assert_eq!(offset, bad);
                assert_eq!(input.offset(), data.len());
                break;
            }
            (other, error_len) => panic!("{other:?} at {bad}, from_utf8 error_len {error_len:?}"),
        }
    }
});
