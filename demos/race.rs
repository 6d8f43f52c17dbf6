//! Concurrent first-access example for singleton-variants.
//!
//! Demonstrates:
//! - Releasing many threads at once against a fresh cell
//! - The naive lazy cell constructing more than one instance
//! - The synchronized, double-checked and holder cells constructing exactly one
//! - Structured logs through `tracing` (set `RUST_LOG=debug` to see constructions)
//!
//! Run with: `cargo run --example race -- [variant] [threads]`
//! e.g. `cargo run --example race -- double-checked 100`

use singleton_variants::{
    DoubleChecked, Eager, Holder, NaiveLazy, SingletonApi, Synchronized, Variant,
};
use std::collections::HashSet;
use std::env;
use std::process::ExitCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_THREADS: usize = 32;

// Sized so every boxed instance gets its own address.
struct Payload {
    _id: u64,
}

fn build(constructions: &AtomicUsize) -> Payload {
    constructions.fetch_add(1, Ordering::SeqCst);
    thread::sleep(Duration::from_millis(10));
    Payload { _id: 0 }
}

/// Releases `threads` callers at once; returns the number of distinct instances seen.
fn race<S>(cell: &S, threads: usize) -> usize
where
    S: SingletonApi + Sync,
{
    let barrier = Barrier::new(threads);

    let addresses: HashSet<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    cell.get_instance() as *const S::Instance as usize
                })
            })
            .collect();

        handles
            .into_iter()
            .filter_map(|handle| handle.join().ok())
            .collect()
    });

    addresses.len()
}

fn run(variant: Variant, threads: usize) {
    let constructions = AtomicUsize::new(0);

    let distinct = match variant {
        Variant::Eager => race(&Eager::new(build(&constructions)), threads),
        Variant::NaiveLazy => race(&NaiveLazy::new(|| build(&constructions)), threads),
        Variant::Synchronized => race(&Synchronized::new(|| build(&constructions)), threads),
        Variant::DoubleChecked => race(&DoubleChecked::new(|| build(&constructions)), threads),
        Variant::Holder => race(&Holder::new(|| build(&constructions)), threads),
    };

    let constructed = constructions.load(Ordering::SeqCst);
    info!(%variant, threads, constructed, distinct, "race finished");

    println!(
        "{:<15} threads: {:>4}  constructed: {:>3}  distinct instances seen: {:>3}  {}",
        variant.to_string(),
        threads,
        constructed,
        distinct,
        if constructed == 1 { "ok" } else { "BROKEN" }
    );
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);

    let variants = match args.next() {
        Some(name) => match name.parse::<Variant>() {
            Ok(variant) => vec![variant],
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => Variant::ALL.to_vec(),
    };

    let threads = match args.next().map(|raw| raw.parse::<usize>()) {
        Some(Ok(threads)) if threads > 0 => threads,
        Some(_) => {
            eprintln!("thread count must be a positive integer");
            return ExitCode::FAILURE;
        }
        None => DEFAULT_THREADS,
    };

    println!("=== singleton-variants: Concurrent First Access ===\n");

    for variant in variants {
        run(variant, threads);
    }

    ExitCode::SUCCESS
}
