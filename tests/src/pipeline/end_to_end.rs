#![cfg(test)]
use ipfilter_common::network::address::{Address, ParseError};
use ipfilter_core::pipeline::{self, Summary};
use std::io::Cursor;

fn run(input: &str) -> (anyhow::Result<Summary>, Vec<String>) {
    let mut out: Vec<u8> = Vec::new();
    let result = pipeline::run(Cursor::new(input), &mut out);
    let lines = String::from_utf8(out)
        .expect("pipeline output is not UTF-8")
        .lines()
        .map(str::to_string)
        .collect();
    (result, lines)
}

/// Sorted block followed by the block of addresses starting with 1.
#[test]
fn sorted_and_first_octet_blocks() {
    let input = "1.2.3.4\n2.2.3.4\n1.3.3.4\n3.2.3.4\n1.2.3.4\n";

    let (result, lines) = run(input);
    let summary = result.expect("pipeline failed");

    assert_eq!(summary.total, 5);
    assert_eq!(summary.filtered, [3, 0, 0]);
    assert_eq!(
        lines,
        [
            "3.2.3.4", "2.2.3.4", "1.3.3.4", "1.2.3.4", "1.2.3.4", // all
            "1.3.3.4", "1.2.3.4", "1.2.3.4", // first == 1
        ]
    );
}

#[test]
fn all_four_blocks_in_order() {
    let input = "\
113.162.145.156\t111\t0
157.39.22.224\t5\t6
46.70.225.39\t1\t0
1.70.44.170\t0\t1
46.49.43.85\t0\t0
1.29.168.152\t17\t0
39.46.86.85\t2\t0
46.70.29.76\t0\t5
1.1.234.8\t0\t0
";

    let (result, lines) = run(input);
    let summary = result.expect("pipeline failed");

    let expected = [
        // all, descending
        "157.39.22.224",
        "113.162.145.156",
        "46.70.225.39",
        "46.70.29.76",
        "46.49.43.85",
        "39.46.86.85",
        "1.70.44.170",
        "1.29.168.152",
        "1.1.234.8",
        // first == 1
        "1.70.44.170",
        "1.29.168.152",
        "1.1.234.8",
        // first == 46 and second == 70
        "46.70.225.39",
        "46.70.29.76",
        // any == 46
        "46.70.225.39",
        "46.70.29.76",
        "46.49.43.85",
        "39.46.86.85",
    ];

    assert_eq!(lines, expected);
    assert_eq!(summary, Summary { total: 9, filtered: [3, 2, 4] });
}

#[test]
fn filtered_blocks_keep_sorted_order() {
    let input = "46.1.1.1\n1.46.0.0\n46.70.0.1\n200.46.46.46\n46.70.0.0\n";

    let (result, lines) = run(input);
    assert!(result.is_ok());

    let sorted: Vec<Address> = lines[..5].iter().map(|l| l.parse().unwrap()).collect();
    let any_46: Vec<Address> = lines[5 + 1 + 2..].iter().map(|l| l.parse().unwrap()).collect();

    let expected: Vec<Address> = sorted
        .iter()
        .copied()
        .filter(|ip| ip.matches_any(&[46]))
        .collect();
    assert_eq!(any_46, expected);
    assert!(sorted.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn extra_fields_are_ignored() {
    let (result, lines) = run("1.1.1.1.1\n");
    assert!(result.is_ok());
    assert_eq!(lines, ["1.1.1.1", "1.1.1.1"]);
}

#[test]
fn bad_line_aborts_the_run() {
    let (result, lines) = run("1.2.3.4\n1..1.1\n5.6.7.8\n");

    let err = result.expect_err("a malformed line must fail the run");
    assert!(err.to_string().contains("line 2"));
    assert!(err.downcast_ref::<ParseError>().is_some());
    assert!(lines.is_empty(), "nothing is printed before input is fully read");
}

#[test]
fn short_line_aborts_the_run() {
    let (result, _) = run("1.2.3\n");
    let err = result.expect_err("three fields are not an address");
    assert_eq!(
        err.downcast_ref::<ParseError>(),
        Some(&ParseError::MissingField { found: 3 })
    );
}
