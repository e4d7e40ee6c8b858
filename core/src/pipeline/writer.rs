use std::io::Write;

use ipfilter_common::network::address::Address;

/// Writes one dotted-quad address per line and returns how many were written.
pub fn write_block<'a, W, I>(output: &mut W, ips: I) -> std::io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Address>,
{
    let mut count: usize = 0;
    for ip in ips {
        writeln!(output, "{ip}")?;
        count += 1;
    }
    Ok(count)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
