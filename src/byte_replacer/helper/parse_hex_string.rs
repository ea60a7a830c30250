use crate::byte_replacer::error::ByteReplacerError;
use crate::byte_replacer::result::Result;

/// Parses space separated two digit hex tokens (e.g. `"4c 89 44"`) into bytes.
///
/// Tokens are separated by exactly one space and each must be two hex
/// digits, either case. The first bad token fails the whole pattern. An
/// empty string yields an empty vector.
pub fn parse_hex_string(hex_string: &str) -> Result<Vec<u8>> {
    parse_hex_field("pattern", hex_string)
}

/// Same as `parse_hex_string`, with `field` naming the config entry in errors.
pub(crate) fn parse_hex_field(field: &'static str, hex_string: &str) -> Result<Vec<u8>> {
    if hex_string.is_empty() {
        return Ok(vec![]);
    }

    hex_string
        .split(' ')
        .map(|token| {
            parse_hex_token(token).ok_or_else(|| ByteReplacerError::ParseError {
                field,
                pattern: hex_string.to_string(),
                token: token.to_string(),
            })
        })
        .collect()
}

fn parse_hex_token(token: &str) -> Option<u8> {
    // from_str_radix alone would accept "+f" and single digits
    if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(token, 16).ok()
}
