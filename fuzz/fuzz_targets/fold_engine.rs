#![no_main]

use fold_core::{fold_bytes, BreakColumn};
use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Case {
    width: u8,
    input: Vec<u8>,
}

fuzz_target!(|case: Case| {
    let Some(width) = BreakColumn::new(usize::from(case.width)) else {
        return;
    };
    let output = fold_bytes(&case.input, width);

    for line in output.split(|&b| b == b'\n') {
        assert!(line.len() < width.get());
    }

    // Inserted line feeds only ever precede a non-line-feed byte, so walking
    // both streams in order separates them from natural ones.
    let mut expected = case.input.iter().peekable();
    for &byte in &output {
        if expected.peek() == Some(&&byte) {
            expected.next();
        } else {
            assert_eq!(byte, b'\n');
        }
    }
    assert!(expected.next().is_none());

    assert_eq!(fold_bytes(&output, width), output);
});
