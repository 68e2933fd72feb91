//! Leverage common functionality across schema types.

pub mod amount;
pub use amount::{denormalize, is_valid_amount, normalize, Amount, AmountLike};

/// Converts bytes to a hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes.iter() {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

/// Converts a hexadecimal string to bytes.
pub fn from_hex(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}

/// Converts a hexadecimal string to bytes, stripping whitespace and/or a `0x` prefix. Commonly used
/// in testing to encode external test vectors without modification.
pub fn from_hex_formatted(hex: &str) -> Option<Vec<u8>> {
    let hex = hex.replace(['\t', '\n', '\r', ' '], "");
    let res = hex.strip_prefix("0x").unwrap_or(&hex);
    from_hex(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        // Test case 0: empty bytes
        let b = &[];
        let h = hex(b);
        assert_eq!(h, "");
        assert_eq!(from_hex(&h).unwrap(), b.to_vec());

        // Test case 1: multiple bytes
        let b = &[0x01, 0xab, 0xff];
        let h = hex(b);
        assert_eq!(h, "01abff");
        assert_eq!(from_hex(&h).unwrap(), b.to_vec());

        // Test case 2: odd number of characters
        assert!(from_hex("0102030").is_none());

        // Test case 3: invalid hexadecimal character
        assert!(from_hex("01g3").is_none());

        // Test case 4: sign accepted by from_str_radix
        assert!(from_hex("+1").is_none());

        // Test case 5: multi-byte character
        assert!(from_hex("é0").is_none());
    }

    #[test]
    fn test_from_hex_formatted() {
        let b = vec![0x01, 0x02, 0x03];

        // Test case 0: whitespace
        assert_eq!(from_hex_formatted("01 02 03").unwrap(), b);

        // Test case 1: 0x prefix
        assert_eq!(from_hex_formatted("0x010203").unwrap(), b);

        // Test case 2: 0x prefix + different whitespace chars
        let h = "    \n\n0x\r\n01
                            02\t03\n";
        assert_eq!(from_hex_formatted(h).unwrap(), b);
    }
}
