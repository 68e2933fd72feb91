//! Canonical RFC 4648 base32 without padding.
//!
//! Decoding accepts only text that [encode] could have produced: uppercase alphabet characters,
//! no `=` padding, a length that a whole number of bytes maps to, and zero unused trailing bits.

/// The RFC 4648 base32 alphabet.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

const INVALID: u8 = 0xFF;

const DECODE: [u8; 256] = decode_table();

const fn decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the length of the text encoding of `len` bytes.
pub const fn encoded_len(len: usize) -> usize {
    (len * 8).div_ceil(5)
}

/// Encodes `data` as base32 text.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));
    let mut acc: u16 = 0;
    let mut bits = 0;
    for &byte in data {
        acc = (acc << 8) | u16::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[usize::from((acc >> bits) & 0x1F)] as char);
        }
        acc &= (1 << bits) - 1;
    }
    if bits > 0 {
        out.push(ALPHABET[usize::from((acc << (5 - bits)) & 0x1F)] as char);
    }
    out
}

/// Decodes base32 text, returning `None` if it is not canonical.
pub fn decode(text: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() * 5 / 8);
    let mut acc: u16 = 0;
    let mut bits = 0;
    for &c in text.as_bytes() {
        let value = DECODE[usize::from(c)];
        if value == INVALID {
            return None;
        }
        acc = (acc << 5) | u16::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
        acc &= (1 << bits) - 1;
    }

    // A full character left over, or unused bits set, could not come from encode
    if bits >= 5 || acc != 0 {
        return None;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
    use test_case::test_case;

    #[test_case(b"", ""; "empty")]
    #[test_case(b"f", "MY"; "one byte")]
    #[test_case(b"fo", "MZXQ"; "two bytes")]
    #[test_case(b"foo", "MZXW6"; "three bytes")]
    #[test_case(b"foob", "MZXW6YQ"; "four bytes")]
    #[test_case(b"fooba", "MZXW6YTB"; "five bytes")]
    #[test_case(b"foobar", "MZXW6YTBOI"; "six bytes")]
    fn test_rfc4648_vectors(data: &[u8], text: &str) {
        assert_eq!(encode(data), text);
        assert_eq!(encoded_len(data.len()), text.len());
        assert_eq!(decode(text).unwrap(), data);
    }

    #[test_case("MZXW6==="; "padding")]
    #[test_case("mzxw6"; "lowercase")]
    #[test_case("MZXW1"; "digit outside alphabet")]
    #[test_case("MZ W6"; "whitespace")]
    #[test_case("M"; "one dangling character")]
    #[test_case("MZX"; "three characters")]
    #[test_case("MZXW6Y"; "six characters")]
    #[test_case("MZ"; "nonzero trailing bits")]
    #[test_case("MZXR"; "nonzero trailing bit in last character")]
    fn test_rejects_non_canonical(text: &str) {
        assert_eq!(decode(text), None);
    }

    #[test]
    fn test_random_round_trip() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..1_000 {
            let mut data = vec![0u8; rng.gen_range(0..128)];
            rng.fill_bytes(&mut data);
            let text = encode(&data);
            assert_eq!(text.len(), encoded_len(data.len()));
            assert_eq!(decode(&text).unwrap(), data);
        }
    }
}
