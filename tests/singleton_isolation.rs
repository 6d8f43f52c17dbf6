//! Integration tests for singletons declared with `define_singleton!`.
//!
//! Each declaration owns its own static cell, so two singletons of the same payload
//! type never share an instance.

use singleton_variants::{define_singleton, Variant};
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, PartialEq)]
pub struct ConnectionString(String);

pub struct Limits {
    pub max_runs: u32,
    pub max_submits: u32,
}

impl Limits {
    pub const DEFAULT: Limits = Limits {
        max_runs: 100,
        max_submits: 20,
    };
}

static DATABASE_CONNECTS: AtomicUsize = AtomicUsize::new(0);

fn connect_database() -> ConnectionString {
    DATABASE_CONNECTS.fetch_add(1, Ordering::SeqCst);
    ConnectionString("postgresql://localhost".to_string())
}

fn connect_cache() -> ConnectionString {
    ConnectionString("redis://localhost".to_string())
}

define_singleton!(database: DoubleChecked<ConnectionString> = connect_database;);
define_singleton!(cache: Holder<ConnectionString> = connect_cache;);
define_singleton!(limits: Eager<Limits> = Limits::DEFAULT;);
define_singleton!(
    /// Greeting shown on the judge dashboard.
    pub greeting: Synchronized<String> = || "welcome".to_string();
);
define_singleton!(naive_counter: NaiveLazy<AtomicUsize> = || AtomicUsize::new(0););

#[test]
fn test_same_type_different_singletons() {
    let db = database::get_instance();
    let cache_val = cache::get_instance();

    assert_eq!(db, &ConnectionString("postgresql://localhost".to_string()));
    assert_eq!(cache_val, &ConnectionString("redis://localhost".to_string()));
    assert!(!ptr::eq(db, cache_val));
}

#[test]
fn test_repeated_access_constructs_once() {
    for _ in 0..5 {
        database::get_instance();
    }
    assert!(database::is_initialized());
    assert_eq!(DATABASE_CONNECTS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_eager_singleton_from_constant() {
    assert!(limits::is_initialized());
    assert_eq!(limits::get_instance().max_runs, 100);
    assert_eq!(limits::get_instance().max_submits, 20);
}

#[test]
fn test_variants_of_declared_singletons() {
    assert_eq!(database::variant(), Variant::DoubleChecked);
    assert_eq!(cache::variant(), Variant::Holder);
    assert_eq!(limits::variant(), Variant::Eager);
    assert_eq!(greeting::variant(), Variant::Synchronized);
    assert_eq!(naive_counter::variant(), Variant::NaiveLazy);
}

#[test]
fn test_shared_state_through_singleton() {
    // Mutation through the shared instance is visible to every accessor.
    naive_counter::get_instance().fetch_add(1, Ordering::SeqCst);
    naive_counter::get_instance().fetch_add(1, Ordering::SeqCst);

    assert_eq!(naive_counter::get_instance().load(Ordering::SeqCst), 2);
}

#[test]
fn test_public_singleton_with_closure() {
    assert_eq!(greeting::get_instance(), "welcome");
}

#[test]
fn test_singleton_scoping() {
    mod module_a {
        use singleton_variants::define_singleton;

        define_singleton!(scoped: Holder<String> = || "module A".to_string(););

        pub fn get_value() -> &'static str {
            scoped::get_instance()
        }
    }

    mod module_b {
        use singleton_variants::define_singleton;

        define_singleton!(scoped: Holder<String> = || "module B".to_string(););

        pub fn get_value() -> &'static str {
            scoped::get_instance()
        }
    }

    assert_eq!(module_a::get_value(), "module A");
    assert_eq!(module_b::get_value(), "module B");
}
