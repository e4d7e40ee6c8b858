//! The **driver** for a full run: read, sort, print everything, then print the
//! fixed filtered views.
//!
//! All input is consumed before anything is written. A line that fails to
//! parse aborts the run; once the read phase succeeds the only remaining
//! failure is the output stream itself.

use std::io::{BufRead, Write};

use ipfilter_common::network::address::Address;
use ipfilter_common::network::filter;
use tracing::debug;

mod reader;
mod writer;

/// Leading components selected by the first filter.
pub const FIRST_OCTET: [i32; 1] = [1];
/// Leading components selected by the second filter.
pub const FIRST_TWO_OCTETS: [i32; 2] = [46, 70];
/// Values searched in any position by the third filter.
pub const ANY_OCTET: [i32; 1] = [46];

/// Counts gathered over one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Addresses read, duplicates included.
    pub total: usize,
    /// Matches per filter, in the order the filters are printed.
    pub filtered: [usize; 3],
}

/// Executes the whole pipeline from `input` to `output`.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> anyhow::Result<Summary> {
    let mut ips: Vec<Address> = reader::read_addresses(input)?;
    debug!("Read {} addresses", ips.len());

    sort_descending(&mut ips);

    let total = writer::write_block(output, ips.iter())?;
    debug!("Printed {total} sorted addresses");

    let filtered = [
        writer::write_block(output, filter::filter_prefix(&ips, FIRST_OCTET))?,
        writer::write_block(output, filter::filter_prefix(&ips, FIRST_TWO_OCTETS))?,
        writer::write_block(output, filter::filter_any(&ips, &ANY_OCTET))?,
    ];
    debug!(
        "Filters matched {} / {} / {} addresses",
        filtered[0], filtered[1], filtered[2]
    );

    output.flush()?;

    Ok(Summary { total, filtered })
}

/// Sorts in reverse lexicographic order: highest first component first, ties
/// broken by the following components.
pub fn sort_descending(ips: &mut [Address]) {
    ips.sort_unstable_by(|a, b| b.cmp(a));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
