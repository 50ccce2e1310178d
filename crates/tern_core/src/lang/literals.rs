//! Literal helpers shared by the lexer and parser.
//!
//! - [`unescape`] turns a quoted string-literal spelling into its value.
//! - [`parse_number`] decodes decimal, hex (`0x`) and binary (`0b`) numeric spellings, with `_` separators.
//! - [`small_power_of_2`] answers the `iterate (length: N, unroll: M)` legality question.
//!
//! ## Examples
//! ```rust
//! use tern_core::lang::literals;
//!
//! assert_eq!(literals::unescape(r#""a\tb""#).as_deref(), Some("a\tb"));
//! assert_eq!(literals::small_power_of_2("0x40"), Some(64));
//! assert_eq!(literals::small_power_of_2("3"), None);
//! ```

/// Largest count accepted by [`small_power_of_2`].
pub const MAX_SMALL_POWER_OF_2: u64 = 256;

/// Decode a double-quoted string literal spelling (quotes included) into its value.
///
/// Supported escapes: `\\`, `\"`, `\'`, `\n`, `\r`, `\t`, `\0` and `\xHH`.
/// Returns `None` if the spelling is not quoted, contains an unknown escape, or a raw newline.
pub fn unescape(raw: &str) -> Option<String> {
    let inner = raw.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\n' => return None,
            '\\' => {
                let decoded = match chars.next()? {
                    '\\' => '\\',
                    '"' => '"',
                    '\'' => '\'',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    '0' => '\0',
                    'x' => {
                        let hi = chars.next()?.to_digit(16)?;
                        let lo = chars.next()?.to_digit(16)?;
                        char::from(u8::try_from(hi * 16 + lo).ok()?)
                    }
                    _ => return None,
                };
                out.push(decoded);
            }
            c => out.push(c),
        }
    }
    Some(out)
}

/// Return `true` if `spelling` looks like a numeric literal (starts with an ASCII digit).
pub fn is_number(spelling: &str) -> bool {
    spelling.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

/// Decode a numeric literal spelling that fits in a `u64`.
pub fn parse_number(spelling: &str) -> Option<u64> {
    if !is_number(spelling) {
        return None;
    }
    let cleaned: String = spelling.chars().filter(|c| *c != '_').collect();
    if let Some(hex) = cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = cleaned.strip_prefix("0b").or_else(|| cleaned.strip_prefix("0B")) {
        u64::from_str_radix(bin, 2).ok()
    } else {
        cleaned.parse::<u64>().ok()
    }
}

/// Decode `spelling` as a power of two in `1..=256`.
pub fn small_power_of_2(spelling: &str) -> Option<u32> {
    let n = parse_number(spelling)?;
    if n == 0 || n > MAX_SMALL_POWER_OF_2 || !n.is_power_of_two() {
        return None;
    }
    u32::try_from(n).ok()
}
