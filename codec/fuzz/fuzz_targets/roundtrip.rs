#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use xdrkit_codec::{BytesM, Codec, DecodeExt, Encode, EncodeSize, StringM, VecM};

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
    Fixed3([u8; 3]),
    Fixed32([u8; 32]),
    Opaque(Vec<u8>),
    String(Vec<u8>),
    Array(Vec<u64>),
    Optional(Option<u32>),
}

fn roundtrip<T>(value: &T)
where
    T: Codec<Cfg = ()> + PartialEq + std::fmt::Debug,
{
    let encoded = value.encode();
    assert_eq!(encoded.len(), value.encode_size());
    assert_eq!(encoded.len() % 4, 0);
    let decoded = T::decode_cfg(encoded, &()).expect("failed to decode an encoded value");
    assert_eq!(&decoded, value);
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::I32(v) => roundtrip(&v),
        FuzzInput::U32(v) => roundtrip(&v),
        FuzzInput::I64(v) => roundtrip(&v),
        FuzzInput::U64(v) => roundtrip(&v),
        FuzzInput::F64(v) => {
            // NaN != NaN, so compare bit patterns instead
            let decoded = f64::decode(v.encode()).unwrap();
            assert_eq!(decoded.to_bits(), v.to_bits());
        }
        FuzzInput::Bool(v) => roundtrip(&v),
        FuzzInput::Fixed3(v) => roundtrip(&v),
        FuzzInput::Fixed32(v) => roundtrip(&v),
        FuzzInput::Opaque(v) => match BytesM::<64>::try_from(v.clone()) {
            Ok(value) => roundtrip(&value),
            Err(_) => assert!(v.len() > 64),
        },
        FuzzInput::String(v) => match StringM::<28>::try_from(v.clone()) {
            Ok(value) => roundtrip(&value),
            Err(_) => assert!(v.len() > 28),
        },
        FuzzInput::Array(v) => match VecM::<u64, 16>::try_from(v.clone()) {
            Ok(value) => roundtrip(&value),
            Err(_) => assert!(v.len() > 16),
        },
        FuzzInput::Optional(v) => roundtrip(&v),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
