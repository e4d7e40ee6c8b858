//! # Address Matching
//!
//! Predicates used by the filters.
//!
//! * [`Address::matches`] compares a leading run of components (1 to 4 of them).
//! * [`Address::matches_any`] is true when any component equals any of the values.

use crate::network::address::{Address, OCTETS};

impl Address {
    /// Checks that the first `N` components equal `parts`, in order.
    ///
    /// Components past `N` are unconstrained. `N` must be between 1 and 4,
    /// which is checked when the call is compiled.
    pub fn matches<const N: usize>(&self, parts: [i32; N]) -> bool {
        const { assert!(N >= 1 && N <= OCTETS, "an address has 1 to 4 matchable parts") };

        self.octets().iter().zip(parts).all(|(octet, part)| *octet == part)
    }

    /// Checks if any component equals any value in `values`.
    pub fn matches_any(&self, values: &[i32]) -> bool {
        let octets = self.octets();
        values.iter().any(|value| octets.contains(value))
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
