#![no_main]

use libfuzzer_sys::fuzz_target;
use lispio::{InputContexts, InputStatus, StreamConfig};

#[derive(Debug, arbitrary::Arbitrary)]
enum Op {
    Push(String),
    Pop,
    NextLine,
}

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    start: InputStatus,
    limit: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let config = StreamConfig::new().with_max_context_depth(usize::from(input.limit));
    let mut contexts = InputContexts::with_config(config);
    contexts.status_mut().restore_from(&input.start);

    let mut model: Vec<InputStatus> = Vec::new();
    for op in input.ops {
        match op {
            Op::Push(name) => {
                let before = contexts.status().clone();
                if contexts.push(name.clone()).is_ok() {
                    model.push(before);
                    assert_eq!(contexts.status(), &InputStatus::from_file(name));
                } else {
                    assert_eq!(contexts.status(), &before);
                }
            }
            Op::Pop => {
                let expected = model.pop();
                assert_eq!(contexts.pop(), expected.is_some());
                if let Some(expected) = expected {
                    assert_eq!(contexts.status(), &expected);
                }
            }
            Op::NextLine => contexts.status_mut().next_line(),
        }
        assert!(contexts.depth() <= usize::from(input.limit));
        assert!(contexts.status().line_number() >= 1);
    }

    contexts.unwind();
    assert_eq!(contexts.status().file_name(), input.start.file_name());
});
