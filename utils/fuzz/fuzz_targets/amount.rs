#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use xdrkit_utils::{denormalize, is_valid_amount, normalize};

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Parse { text: String },
    Format { value: i64 },
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Parse { text } => {
            let Ok(value) = normalize(text.as_str()) else {
                assert!(!is_valid_amount(&text, true));
                return;
            };
            // Parsing then formatting only drops redundant zeros and signs
            assert_eq!(normalize(denormalize(value).as_str()).unwrap(), value);
            assert_eq!(is_valid_amount(&text, true), value >= 0);
        }

        FuzzInput::Format { value } => {
            let text = denormalize(value);
            assert_eq!(normalize(text.as_str()).unwrap(), value);
            assert_eq!(denormalize(normalize(text.as_str()).unwrap()), text);
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
