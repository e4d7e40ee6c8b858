//! # IPv4 Address Model
//!
//! A dotted-quad address held as four plain integers.
//!
//! Components are not range checked: anything that parses as an `i32` is
//! accepted, so `300.1.1.1` and `-1.0.0.0` are valid addresses here. Ordering
//! is lexicographic over the components, left to right.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::utils::text;

/// Number of components in an address.
pub const OCTETS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([i32; OCTETS]);

/// Failure to turn a line of text into an [`Address`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 4 dot-separated fields, found {found}")]
    MissingField { found: usize },

    #[error("field {index} ('{field}') is not an integer: {source}")]
    InvalidField {
        index: usize,
        field: String,
        #[source]
        source: ParseIntError,
    },
}

impl Address {
    pub const fn new(a: i32, b: i32, c: i32, d: i32) -> Self {
        Self([a, b, c, d])
    }

    pub const fn octets(&self) -> [i32; OCTETS] {
        self.0
    }
}

impl From<[i32; OCTETS]> for Address {
    fn from(octets: [i32; OCTETS]) -> Self {
        Self(octets)
    }
}

impl FromStr for Address {
    type Err = ParseError;

    /// Parses the first four `.`-separated fields of `s`.
    ///
    /// Fields past the fourth are ignored, so `1.1.1.1.1` is `1.1.1.1`.
    /// An empty field (`1..1.1`, or an empty string) is not an integer and fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = text::split(s, '.');
        let mut octets = [0; OCTETS];

        for (index, octet) in octets.iter_mut().enumerate() {
            let field = fields
                .next()
                .ok_or(ParseError::MissingField { found: index })?;

            *octet = field
                .parse::<i32>()
                .map_err(|source| ParseError::InvalidField {
                    index,
                    field: field.to_string(),
                    source,
                })?;
        }

        Ok(Self(octets))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
