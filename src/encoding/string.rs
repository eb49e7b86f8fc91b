//! String truncation and the string payload encoding.

use super::prefix::BytePrefix;

/// V1 keys keep this many UTF-16 code units of a string.
pub const MAX_STRING_CHARS: usize = 100;

/// The string payload carries at most this many UTF-8 bytes (plus one).
pub const MAX_STRING_BYTES_TO_APPEND: usize = 100;

/// Truncate to the first [`MAX_STRING_CHARS`] UTF-16 code units.
///
/// A surrogate pair split by the cut leaves a lone surrogate, which becomes
/// U+FFFD once converted back; other clients produce the same bytes when
/// they UTF-8 encode the truncated string.
pub fn truncate(value: &str) -> String {
    let units: Vec<u16> = value.encode_utf16().take(MAX_STRING_CHARS).collect();
    String::from_utf16_lossy(&units)
}

/// Append the binary encoding of an (already truncated) string: the String
/// tag, each UTF-8 byte plus one, and a terminator for short strings. Long
/// strings are cut at 101 bytes and carry no terminator.
pub fn write_string_for_binary_encoding(value: &str, out: &mut Vec<u8>) {
    out.push(BytePrefix::String.byte());

    let bytes = value.as_bytes();
    let short_string = bytes.len() <= MAX_STRING_BYTES_TO_APPEND;
    let count = if short_string {
        bytes.len()
    } else {
        MAX_STRING_BYTES_TO_APPEND + 1
    };

    out.extend(bytes[..count].iter().map(|&b| b.saturating_add(1)));

    if short_string {
        out.push(BytePrefix::Undefined.byte());
    }
}
