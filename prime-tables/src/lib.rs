//! Every prime below a build-time limit (7920 unless overridden) in a
//! const-sized [ `u32` ] array, generated in build.rs. Also includes the
//! running totals of that array in a matching [ `u64` ] array, plus the
//! trial-division sieve the generated tables are cross-checked against.
//!
//! Set the `PRIME_TABLE_LIMIT` environment variable at build time to
//! regenerate the tables for a different exclusive upper bound; a value
//! that does not parse as `u32` fails the build.

pub mod sieve;

pub use sieve::{is_prime, prefix_sums, primes_below};

include!(concat!(env!("OUT_DIR"), "/prime_tables.rs"));
