//! Basic usage example for singleton-variants.
//!
//! Demonstrates:
//! - Declaring one singleton per strategy with `define_singleton!`
//! - Eager instances existing before first access, lazy ones appearing on demand
//! - Repeated `get_instance()` calls returning the very same instance
//! - Observing constructions with `set_trace_callback`
//!
//! Run with: `cargo run --example basic_usage`

use singleton_variants::{clear_trace_callback, define_singleton, set_trace_callback};
use std::ptr;

#[derive(Debug)]
pub struct AppConfig {
    name: &'static str,
    version: u32,
    debug_mode: bool,
}

impl AppConfig {
    pub const DEFAULT: AppConfig = AppConfig {
        name: "MyApp",
        version: 1,
        debug_mode: true,
    };
}

fn load_config() -> AppConfig {
    println!("   ... building AppConfig");
    AppConfig {
        name: "MyApp (lazy)",
        version: 2,
        debug_mode: false,
    }
}

define_singleton!(eager_config: Eager<AppConfig> = AppConfig::DEFAULT;);
define_singleton!(naive_config: NaiveLazy<AppConfig> = load_config;);
define_singleton!(synchronized_config: Synchronized<AppConfig> = load_config;);
define_singleton!(dcl_config: DoubleChecked<AppConfig> = load_config;);
define_singleton!(holder_config: Holder<AppConfig> = load_config;);

macro_rules! show {
    ($module:ident) => {{
        println!("\n-- {} ({}) --", stringify!($module), $module::variant());
        println!("   initialized before access: {}", $module::is_initialized());

        let first = $module::get_instance();
        let second = $module::get_instance();

        println!("   instance: {:?}", first);
        println!("   same instance twice: {}", ptr::eq(first, second));
        println!("   initialized after access:  {}", $module::is_initialized());
    }};
}

fn main() {
    println!("=== singleton-variants: Basic Usage ===");

    set_trace_callback(|event| println!("   [trace] {event}"));

    show!(eager_config);
    show!(naive_config);
    show!(synchronized_config);
    show!(dcl_config);
    show!(holder_config);

    clear_trace_callback();

    let config = eager_config::get_instance();
    println!(
        "\n{} v{} (debug: {})",
        config.name, config.version, config.debug_mode
    );

    println!("\n=== Example completed successfully! ===");
}
