use std::io::{stdout, Write};

use prime_tables::{PRIMES, PRIME_PREFIX_SUMS};

fn main() {
    write_report(&mut stdout().lock(), &PRIMES, &PRIME_PREFIX_SUMS)
        .expect("Error writing report to stdout");
}

/// Writes the five-line report: the prime count, the `NUMBERS` banner,
/// every prime followed by a single space, the `SUMS` banner, and every
/// running total followed by a single space.
///
/// The tables are borrowed: a raised `PRIME_TABLE_LIMIT` makes them far
/// too large to copy onto the stack.
fn write_report<W: Write>(out: &mut W, primes: &[u32], sums: &[u64]) -> std::io::Result<()> {
    writeln!(out, "{}", primes.len())?;

    writeln!(out, "====== NUMBERS ======")?;
    for n in primes {
        write!(out, "{} ", n)?;
    }
    writeln!(out)?;

    writeln!(out, "======= SUMS ========")?;
    for s in sums {
        write!(out, "{} ", s)?;
    }
    writeln!(out)?;

    out.flush()
}
