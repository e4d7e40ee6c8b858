//! # Address Filters
//!
//! Stable filters over an already ordered list of addresses. They borrow the
//! list, never reorder it, and yield matches lazily in their original order.

use crate::network::address::Address;

/// Yields every address whose leading components equal `parts`.
pub fn filter_prefix<const N: usize>(
    ips: &[Address],
    parts: [i32; N],
) -> impl Iterator<Item = &Address> {
    ips.iter().filter(move |ip| ip.matches(parts))
}

/// Yields every address with at least one component found in `values`.
pub fn filter_any<'a>(ips: &'a [Address], values: &'a [i32]) -> impl Iterator<Item = &'a Address> {
    ips.iter().filter(move |ip| ip.matches_any(values))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
