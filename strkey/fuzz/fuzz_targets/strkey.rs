#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use xdrkit_strkey::{base32, decode, decode_check, encode_check, VersionByte};

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Decode { text: String },
    DecodeBytes { data: Vec<u8> },
    Encode { version: u8, payload: Vec<u8> },
    Corrupt { version: u8, payload: Vec<u8>, index: usize, replacement: u8 },
}

fn version(byte: u8) -> VersionByte {
    VersionByte::ALL[usize::from(byte) % VersionByte::ALL.len()]
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Decode { text } => {
            // Anything accepted must be the canonical text of its value
            if let Ok(key) = decode(&text) {
                assert_eq!(key.to_string(), text);
            }
        }

        FuzzInput::DecodeBytes { data } => {
            if let Some(decoded) = base32::decode(&base32::encode(&data)) {
                assert_eq!(decoded, data);
            } else {
                panic!("encoded base32 rejected");
            }
        }

        FuzzInput::Encode { version: byte, payload } => {
            let version = version(byte);
            if let Ok(text) = encode_check(version, &payload) {
                assert!(text.starts_with(version.prefix()));
                assert_eq!(decode_check(version, &text).unwrap(), payload);
            }
        }

        FuzzInput::Corrupt {
            version: byte,
            payload,
            index,
            replacement,
        } => {
            let version = version(byte);
            let Ok(text) = encode_check(version, &payload) else {
                return;
            };
            let index = index % text.len();
            let replacement = base32::ALPHABET[usize::from(replacement) % 32];
            if text.as_bytes()[index] == replacement {
                return;
            }
            let mut corrupted = text.into_bytes();
            corrupted[index] = replacement;
            let corrupted = String::from_utf8(corrupted).unwrap();
            assert!(decode_check(version, &corrupted).is_err());
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
