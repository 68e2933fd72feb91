#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use xdrkit_utils::{from_hex, from_hex_formatted, hex};

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Hex { data: Vec<u8> },
    FromHex { text: String },
    FromHexFormatted { text: String },
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Hex { data } => {
            let text = hex(&data);
            assert_eq!(text.len(), data.len() * 2);
            assert_eq!(from_hex(&text).unwrap(), data);
            assert_eq!(from_hex_formatted(&format!("0x{text}")).unwrap(), data);
        }

        FuzzInput::FromHex { text } => {
            if let Some(data) = from_hex(&text) {
                assert_eq!(hex(&data), text.to_ascii_lowercase());
            }
        }

        FuzzInput::FromHexFormatted { text } => {
            let _ = from_hex_formatted(&text);
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
