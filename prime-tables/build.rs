use std::env::VarError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Exclusive upper bound used when `PRIME_TABLE_LIMIT` is not set at build time.
const DEFAULT_LIMIT: u32 = 7920;

fn main() {
    println!("cargo:rerun-if-env-changed=PRIME_TABLE_LIMIT");

    let limit = match std::env::var("PRIME_TABLE_LIMIT") {
        Ok(raw) => raw
            .parse()
            .expect("PRIME_TABLE_LIMIT must be an unsigned 32-bit integer"),
        Err(VarError::NotPresent) => DEFAULT_LIMIT,
        Err(VarError::NotUnicode(raw)) => {
            panic!("PRIME_TABLE_LIMIT must be an unsigned 32-bit integer, got {raw:?}")
        }
    };

    let mut primes: Vec<u32> = vec![];

    'outer: for i in 2..limit {
        for &p in &primes {
            if (p as u64) * (p as u64) > i as u64 {
                break;
            }
            if i % p == 0 {
                continue 'outer;
            }
        }
        primes.push(i);
    }

    let mut sums: Vec<u64> = Vec::with_capacity(primes.len());
    let mut total = 0u64;
    for &p in &primes {
        total += p as u64;
        sums.push(total);
    }

    let out_dir = std::env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("prime_tables.rs");
    let mut file = File::create(dest_path).unwrap();

    writeln!(
        file,
        "/// Exclusive upper bound the tables below were generated for, fixed in \
         `build.rs`. See more information in crate-level documentation."
    )
    .unwrap();
    writeln!(file, "pub const PRIME_LIMIT: u32 = {};", limit).unwrap();

    writeln!(
        file,
        "/// All {} primes below {} in a const-sized `[u32; {}]`, generated in \
         `build.rs`. See more information in crate-level documentation.",
        primes.len(),
        limit,
        primes.len()
    )
    .unwrap();
    writeln!(file, "pub static PRIMES: [u32; {}] = [", primes.len()).unwrap();
    for prime in &primes {
        writeln!(file, "    {},", prime).unwrap();
    }
    writeln!(file, "];").unwrap();

    writeln!(
        file,
        "/// Running totals of [`PRIMES`] in a const-sized `[u64; {}]`, generated in \
         `build.rs`: element `i` is the sum of `PRIMES[..=i]`.",
        sums.len()
    )
    .unwrap();
    writeln!(
        file,
        "pub static PRIME_PREFIX_SUMS: [u64; {}] = [",
        sums.len()
    )
    .unwrap();
    for sum in &sums {
        writeln!(file, "    {},", sum).unwrap();
    }
    writeln!(file, "];").unwrap();
}
