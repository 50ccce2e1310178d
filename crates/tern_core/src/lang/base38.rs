//! Base-38 encoding of package identifiers.
//!
//! A package id is 1 to 4 bytes drawn from a 38-symbol alphabet and packs into a `u32` below 38^4. The
//! digit `0` is reserved for padding, so every valid id encodes to a non-zero value and shorter ids sort
//! before their extensions.
//!
//! | symbols   | digits     |
//! |-----------|------------|
//! | `0`..=`9` | 1 ..= 10   |
//! | `?`       | 11         |
//! | `a`..=`z` | 12 ..= 37  |
//!
//! ## Examples
//! ```rust
//! use tern_core::lang::base38;
//!
//! assert!(base38::encode("json").is_some());
//! assert_eq!(base38::encode(""), None);
//! assert_eq!(base38::encode("JSON"), None);
//! ```

/// Maximum number of bytes in a package id.
pub const MAX_LEN: usize = 4;

fn digit(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0') + 1),
        b'?' => Some(11),
        b'a'..=b'z' => Some(u32::from(b - b'a') + 12),
        _ => None,
    }
}

/// Encode `s`, or return `None` if it is empty, longer than [`MAX_LEN`], or uses a symbol outside the
/// alphabet.
pub fn encode(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_LEN {
        return None;
    }
    let mut code = 0u32;
    for i in 0..MAX_LEN {
        let d = match bytes.get(i) {
            Some(&b) => digit(b)?,
            None => 0,
        };
        code = code * 38 + d;
    }
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_symbols() {
        assert_eq!(encode("0"), Some(38 * 38 * 38));
        assert_eq!(encode("?"), Some(11 * 38 * 38 * 38));
        assert_eq!(encode("zzzz"), Some(38 * 38 * 38 * 38 - 1));
    }

    #[test]
    fn test_prefix_sorts_first() {
        let short = encode("gi").unwrap();
        let long = encode("gif").unwrap();
        assert!(short < long);
    }

    #[test]
    fn test_rejects_out_of_alphabet_and_length() {
        assert_eq!(encode("gif!"), None);
        assert_eq!(encode("a b"), None);
        assert_eq!(encode("abcde"), None);
    }
}
