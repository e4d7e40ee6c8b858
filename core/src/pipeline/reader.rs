use std::io::BufRead;

use anyhow::Context;
use ipfilter_common::network::address::Address;
use ipfilter_common::utils::text;
use tracing::trace;

/// Columns after the address are separated by tabs and ignored.
const COLUMN_DELIMITER: char = '\t';

/// Reads every line of `input` into an address list, in input order.
///
/// Blank lines are skipped. The first line that does not parse aborts the
/// read with its 1-based line number attached.
pub fn read_addresses<R: BufRead>(input: R) -> anyhow::Result<Vec<Address>> {
    let mut ips: Vec<Address> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read input line {line_no}"))?;

        let Some(ip) = parse_line(&line)
            .with_context(|| format!("Failed to parse address on line {line_no}: '{line}'"))?
        else {
            trace!("Skipping blank line {line_no}");
            continue;
        };

        ips.push(ip);
    }

    Ok(ips)
}

/// Parses the address column of a single line, `None` for blank lines.
fn parse_line(line: &str) -> anyhow::Result<Option<Address>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let column = text::first_field(line, COLUMN_DELIMITER);
    Ok(Some(column.parse::<Address>()?))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
