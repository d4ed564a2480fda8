//! Stateless byte classification predicates used by the edge predicates.

/// `a-z` or `A-Z`.
pub fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte.is_ascii_uppercase()
}

/// `0-9`.
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Space, tab, carriage return or line feed.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// The characters legal after a backslash in string and character literals.
pub fn is_escaped_char(byte: u8) -> bool {
    matches!(byte, b'n' | b'r' | b't' | b'"')
}

/// Carriage return, line feed or NUL. NUL counts as an end of line so that
/// single line comments terminate cleanly at the end of the buffer.
pub fn is_end_of_line(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n' | 0)
}
