#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]

//! Prints how much work a `GrowableMap` does as it grows, next to the work a table
//! growing by a fixed increment would do for the same number of adds.
//!
//! Set `RUST_LOG=debug` to see every resize.

use bucketmap::{Config, GrowableMap, OccupancyReport};
use rand::Rng;

const MAX_EXPONENT: u32 = 16;
// Buckets added per resize by the arithmetic comparison table
const ARITHMETIC_STEP: usize = 2;

/// Units of work for `n` adds into a table that starts with `step` buckets and gains
/// `step` more whenever it is full
fn arithmetic_work(n: usize, step: usize) -> usize {
    let mut capacity = step;
    let mut work = 0;
    for count in 0..n {
        if count == capacity {
            work += count;
            capacity += step;
        }
        work += 1;
    }
    work
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env().init();

    let mut rng = rand::rng();
    let mut map = GrowableMap::with_config(Config::default())?;

    println!(
        "{:>8} {:>9} {:>8} {:>10} {:>9} {:>12}",
        "adds", "capacity", "resizes", "work", "per add", "arithmetic"
    );

    for exp in 1..=MAX_EXPONENT {
        let n = 1usize << exp;
        while map.stats().adds < n {
            map.add(rng.random::<u64>(), ());
        }

        let stats = map.stats();
        println!(
            "{:>8} {:>9} {:>8} {:>10} {:>9.3} {:>12.3}",
            n,
            map.capacity(),
            stats.resizes,
            stats.work(),
            stats.work_per_add(),
            arithmetic_work(n, ARITHMETIC_STEP) as f64 / n as f64,
        );
    }

    println!("{} distinct keys stored", map.len());
    println!("{}", OccupancyReport::of(map.buckets()));

    Ok(())
}
