//! # Singleton Variants
//!
//! Thread-safe (and one deliberately unsafe) ways to guarantee a single shared
//! instance of a type per process.
//!
//! Every cell type exposes the same contract, `get_instance()`, and differs only in
//! when the instance is built and how concurrent first callers are coordinated.
//!
//! ## Quick Start
//!
//! ```rust
//! use singleton_variants::define_singleton;
//!
//! pub struct AppConfig {
//!     pub name: String,
//! }
//!
//! fn load_config() -> AppConfig {
//!     AppConfig { name: "judge".to_string() }
//! }
//!
//! define_singleton!(pub config: DoubleChecked<AppConfig> = load_config;);
//!
//! fn main() {
//!     let first = config::get_instance();
//!     let second = config::get_instance();
//!     assert!(std::ptr::eq(first, second));
//!     assert_eq!(first.name, "judge");
//! }
//! ```
//!
//! ## Variants
//!
//! - [`Eager`] - instance built before the cell exists (const-constructible statics)
//! - [`NaiveLazy`] - built on first call, races under concurrent first access
//! - [`Synchronized`] - built on first call, every call takes the lock
//! - [`DoubleChecked`] - built on first call, lock only while nothing is published
//! - [`Holder`] - built on first call through `OnceLock`'s exactly-once guarantee
//!
//! ## Tracing
//!
//! - [`set_trace_callback`] - observe constructions and rejected initializations
//! - [`clear_trace_callback`] - stop observing

mod double_checked;
mod eager;
mod holder;
mod macros;
mod naive_lazy;
mod singleton_error;
mod singleton_event;
mod singleton_trait;
mod slot;
mod synchronized;
mod variant;

pub use double_checked::DoubleChecked;
pub use eager::Eager;
pub use holder::Holder;
pub use naive_lazy::NaiveLazy;
pub use singleton_error::SingletonError;
pub use singleton_event::{clear_trace_callback, set_trace_callback, SingletonEvent, TraceCallback};
pub use singleton_trait::SingletonApi;
pub use synchronized::Synchronized;
pub use variant::Variant;
