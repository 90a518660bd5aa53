//! Scheme name boundary scan.
//!
//! The scheme name is the run of word characters that starts at offset 0 of
//! an instruction. Word characters are ASCII letters, ASCII digits and `_`;
//! non-ASCII letters and digits end the name.

/// Check whether `c` belongs to the scheme name character class.
#[must_use]
pub const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Byte length of the scheme name at the start of `instruction`.
///
/// Returns 0 for an empty instruction or one whose first character is not a
/// word character. Word characters after the first non-word character are
/// not part of the name. The result is always a `char` boundary.
#[must_use]
pub fn scheme_name_len(instruction: &str) -> usize {
    instruction
        .bytes()
        .position(|b| !is_word_char(char::from(b)))
        .unwrap_or(instruction.len())
}

/// Split `instruction` into its scheme name and the remaining parameter text.
#[must_use]
pub fn split_scheme_name(instruction: &str) -> (&str, &str) {
    instruction.split_at(scheme_name_len(instruction))
}
