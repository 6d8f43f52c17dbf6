//! Configuration manager example for singleton-variants.
//!
//! Demonstrates:
//! - Per-object state versus process-wide state (why a singleton is wanted)
//! - A lazily created, thread-safe configuration manager with no public constructor
//! - Explicit startup initialization with `set`, and its rejection once initialized
//!
//! Run with: `cargo run --example configuration_manager`

use singleton_variants::DoubleChecked;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::RwLock;
use std::thread;

// -----------------------------------------------------------------------------
// Per-object counters: each analytics object counts on its own
// -----------------------------------------------------------------------------

#[derive(Default)]
struct RunAnalytics {
    run_count: u32,
}

impl RunAnalytics {
    fn increment_run_count(&mut self) {
        self.run_count += 1;
    }
}

// -----------------------------------------------------------------------------
// Process-wide configuration manager
// -----------------------------------------------------------------------------

mod config {
    use super::*;

    pub struct ConfigurationManager {
        values: RwLock<HashMap<String, String>>,
        reads: AtomicU32,
    }

    static INSTANCE: DoubleChecked<ConfigurationManager> =
        DoubleChecked::new(ConfigurationManager::load);

    impl ConfigurationManager {
        // Not public: callers go through `get_instance`.
        fn load() -> Self {
            println!("   ... loading configuration (happens once)");

            let values = [("environment", "production"), ("max_workers", "8")]
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();

            ConfigurationManager {
                values: RwLock::new(values),
                reads: AtomicU32::new(0),
            }
        }

        pub fn get_instance() -> &'static ConfigurationManager {
            INSTANCE.get_instance()
        }

        pub fn get(&self, key: &str) -> Option<String> {
            self.reads.fetch_add(1, Ordering::Relaxed);
            self.values
                .read()
                .unwrap_or_else(|p| p.into_inner())
                .get(key)
                .cloned()
        }

        pub fn set(&self, key: &str, value: &str) {
            self.values
                .write()
                .unwrap_or_else(|p| p.into_inner())
                .insert(key.to_string(), value.to_string());
        }

        pub fn reads(&self) -> u32 {
            self.reads.load(Ordering::Relaxed)
        }
    }
}

// A second manager that must be configured explicitly at startup.
static STARTUP_CONFIG: DoubleChecked<&'static str> = DoubleChecked::new(|| "unset");

fn main() {
    println!("=== singleton-variants: Configuration Manager ===\n");

    // -------------------------------------------------------------------------
    // 1. Per-object state is not shared
    // -------------------------------------------------------------------------
    println!("1. Per-object counters...");

    let mut first = RunAnalytics::default();
    let mut second = RunAnalytics::default();
    first.increment_run_count();
    second.increment_run_count();

    println!(
        "   first.run_count = {}, second.run_count = {} (not shared)",
        first.run_count, second.run_count
    );

    // -------------------------------------------------------------------------
    // 2. Many threads ask for the configuration at once
    // -------------------------------------------------------------------------
    println!("\n2. Ten threads requesting the configuration manager...");

    thread::scope(|s| {
        for worker in 0..10 {
            s.spawn(move || {
                let manager = config::ConfigurationManager::get_instance();
                if worker == 0 {
                    manager.set("last_writer", "worker-0");
                }
                manager.get("environment");
            });
        }
    });

    let manager = config::ConfigurationManager::get_instance();
    println!(
        "   environment = {:?}, reads across threads = {}",
        manager.get("environment"),
        manager.reads()
    );
    println!("   last_writer = {:?}", manager.get("last_writer"));

    // -------------------------------------------------------------------------
    // 3. Explicit initialization, then a second attempt
    // -------------------------------------------------------------------------
    println!("\n3. Explicit startup initialization...");

    match STARTUP_CONFIG.set("staging") {
        Ok(value) => println!("   initialized with {value:?}"),
        Err(err) => println!("   unexpected: {err}"),
    }

    match STARTUP_CONFIG.set("production") {
        Ok(value) => println!("   unexpected second initialization: {value:?}"),
        Err(err) => println!("   rejected: {err}"),
    }

    println!("   current = {:?}", STARTUP_CONFIG.get_instance());

    println!("\n=== Example completed successfully! ===");
}
