#![no_main]

use libfuzzer_sys::fuzz_target;
use lispio::LispOutput;
use lispio::backends::LimitedOutput;

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    text: String,
    capacity: u8,
}

fuzz_target!(|input: Input| {
    let capacity = usize::from(input.capacity);
    let mut out = LimitedOutput::new(capacity);
    let result = out.write_str(&input.text);

    let len = input.text.chars().count();
    let expected: String = input.text.chars().take(capacity).collect();
    assert_eq!(out.as_str(), expected);
    assert_eq!(result.is_err(), len > capacity);
});
