//! # Field Splitting
//!
//! Splits a line of text into fields on a single delimiter character.
//!
//! Empty fields are kept: `"1..2"` yields `"1"`, `""`, `"2"`, and an empty
//! line yields exactly one empty field. Joining the fields back with the
//! delimiter always reproduces the input.

/// Lazily splits `s` on every occurrence of `delimiter`.
pub fn split(s: &str, delimiter: char) -> impl Iterator<Item = &str> + Clone {
    s.split(delimiter)
}

/// Returns the first field of `s`, or the whole string when `delimiter` is absent.
pub fn first_field(s: &str, delimiter: char) -> &str {
    split(s, delimiter).next().unwrap_or(s)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
