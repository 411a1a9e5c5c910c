//! Process-level check of the printed report.

use std::process::Command;

use prime_tables::{PRIMES, PRIME_PREFIX_SUMS};

#[test]
fn test_binary_prints_full_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_baked-primes"))
        .output()
        .expect("Error running the baked-primes binary");

    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], PRIMES.len().to_string());
    assert_eq!(lines[1], "====== NUMBERS ======");
    assert_eq!(lines[3], "======= SUMS ========");

    let numbers: Vec<u32> = lines[2]
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect();
    assert_eq!(numbers, PRIMES);

    let sums: Vec<u64> = lines[4]
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect();
    assert_eq!(sums, PRIME_PREFIX_SUMS);
}
