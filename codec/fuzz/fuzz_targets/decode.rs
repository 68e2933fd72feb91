#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use xdrkit_codec::{xdr_enum, xdr_struct, xdr_union, BytesM, DecodeExt, Encode, StringM, VecM};

xdr_enum! {
    pub enum Kind {
        Empty = 0,
        Text = 1,
        Items = 2,
    }
}

xdr_union! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Payload: Kind {
        Empty = Kind::Empty,
        Text(StringM<28>) = Kind::Text,
        Items(VecM<BytesM<8>, 8>) = Kind::Items,
    }
}

xdr_struct! {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Message {
        pub key: [u8; 5],
        pub sequence: Option<u64>,
        pub payload: Payload,
        pub flags: VecM<bool, 4>,
    }
}

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary input must never panic, and anything accepted must be canonical.
    if let Ok(message) = Message::decode(Bytes::copy_from_slice(data)) {
        assert_eq!(message.encode(), data);
    }
});
