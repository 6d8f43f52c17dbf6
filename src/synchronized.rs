//! Synchronized lazy singleton: the whole accessor runs under one lock.

use std::sync::{Mutex, PoisonError};

use crate::singleton_event::emit_event;
use crate::slot::InstanceSlot;
use crate::{SingletonApi, SingletonError, SingletonEvent, Variant};

/// A lazy cell whose every `get_instance` call acquires a mutex.
///
/// The critical section covers check, construct and publish, so concurrent first
/// callers always share one instance. The price is a lock acquisition on every call,
/// long after the instance exists.
///
/// # Lock Poisoning Recovery
///
/// If the initializer panics, nothing is published and the lock is recovered by the
/// next caller, which retries construction.
///
/// # Examples
///
/// ```rust
/// use singleton_variants::Synchronized;
///
/// static ANALYTICS: Synchronized<Vec<&str>> = Synchronized::new(|| vec!["run", "submit"]);
///
/// let first = ANALYTICS.get_instance();
/// let second = ANALYTICS.get_instance();
/// assert!(std::ptr::eq(first, second));
/// ```
pub struct Synchronized<T, F = fn() -> T> {
    lock: Mutex<()>,
    slot: InstanceSlot<T>,
    init: F,
}

impl<T, F> Synchronized<T, F> {
    pub const fn new(init: F) -> Self {
        Self {
            lock: Mutex::new(()),
            slot: InstanceSlot::new(),
            init,
        }
    }

    pub fn is_initialized(&self) -> bool {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.slot.get().is_some()
    }

    /// Publishes a caller-built instance if none exists yet.
    ///
    /// # Errors
    ///
    /// - `SingletonError::AlreadyInitialized` if an instance was already published;
    ///   `value` is dropped.
    pub fn set(&self, value: T) -> Result<&T, SingletonError> {
        let guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        if self.slot.get().is_some() {
            drop(guard);
            emit_event(SingletonEvent::Rejected {
                type_name: std::any::type_name::<T>(),
                variant: Variant::Synchronized,
            });
            return Err(SingletonError::AlreadyInitialized {
                type_name: std::any::type_name::<T>(),
            });
        }

        let (instance, _) = self.slot.publish(Box::new(value));
        Ok(instance)
    }
}

impl<T, F: Fn() -> T> Synchronized<T, F> {
    pub fn get_instance(&self) -> &T {
        let guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(instance) = self.slot.get() {
            return instance;
        }

        let (instance, _) = self.slot.publish(Box::new((self.init)()));
        drop(guard);

        emit_event(SingletonEvent::Constructed {
            type_name: std::any::type_name::<T>(),
            variant: Variant::Synchronized,
        });

        instance
    }
}

impl<T, F: Fn() -> T> SingletonApi for Synchronized<T, F> {
    type Instance = T;

    fn get_instance(&self) -> &T {
        Synchronized::get_instance(self)
    }

    fn is_initialized(&self) -> bool {
        Synchronized::is_initialized(self)
    }

    fn variant(&self) -> Variant {
        Variant::Synchronized
    }
}
