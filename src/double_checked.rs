//! Double-checked locking singleton.
//!
//! The first check reads the published pointer with `Acquire` and returns without
//! locking once an instance exists. Only callers that saw an empty slot take the lock,
//! and they check again under it before constructing, because another caller may have
//! published between the first check and the lock acquisition.

use std::sync::{Mutex, PoisonError};

use crate::singleton_event::emit_event;
use crate::slot::InstanceSlot;
use crate::{SingletonApi, SingletonError, SingletonEvent, Variant};

/// A lazy cell that locks only while no instance has been published.
///
/// # Lock Poisoning Recovery
///
/// A panicking initializer publishes nothing; the next caller recovers the lock and
/// retries construction.
///
/// # Examples
///
/// ```rust
/// use singleton_variants::DoubleChecked;
/// use std::thread;
///
/// static CONFIG: DoubleChecked<String> = DoubleChecked::new(|| "prod".to_string());
///
/// let addresses: Vec<usize> = thread::scope(|s| {
///     let handles: Vec<_> = (0..4)
///         .map(|_| s.spawn(|| CONFIG.get_instance() as *const String as usize))
///         .collect();
///     handles.into_iter().map(|h| h.join().unwrap()).collect()
/// });
///
/// assert!(addresses.windows(2).all(|w| w[0] == w[1]));
/// ```
pub struct DoubleChecked<T, F = fn() -> T> {
    lock: Mutex<()>,
    slot: InstanceSlot<T>,
    init: F,
}

impl<T, F> DoubleChecked<T, F> {
    pub const fn new(init: F) -> Self {
        Self {
            lock: Mutex::new(()),
            slot: InstanceSlot::new(),
            init,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Publishes a caller-built instance if none exists yet.
    ///
    /// # Errors
    ///
    /// - `SingletonError::AlreadyInitialized` if an instance was already published;
    ///   `value` is dropped.
    pub fn set(&self, value: T) -> Result<&T, SingletonError> {
        let rejected = || {
            emit_event(SingletonEvent::Rejected {
                type_name: std::any::type_name::<T>(),
                variant: Variant::DoubleChecked,
            });
            SingletonError::AlreadyInitialized {
                type_name: std::any::type_name::<T>(),
            }
        };

        if self.slot.get().is_some() {
            return Err(rejected());
        }

        let guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        if self.slot.get().is_some() {
            drop(guard);
            return Err(rejected());
        }

        let (instance, _) = self.slot.publish(Box::new(value));
        Ok(instance)
    }
}

impl<T, F: Fn() -> T> DoubleChecked<T, F> {
    pub fn get_instance(&self) -> &T {
        if let Some(instance) = self.slot.get() {
            return instance;
        }

        let guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(instance) = self.slot.get() {
            return instance;
        }

        let (instance, _) = self.slot.publish(Box::new((self.init)()));
        drop(guard);

        emit_event(SingletonEvent::Constructed {
            type_name: std::any::type_name::<T>(),
            variant: Variant::DoubleChecked,
        });

        instance
    }
}

impl<T, F: Fn() -> T> SingletonApi for DoubleChecked<T, F> {
    type Instance = T;

    fn get_instance(&self) -> &T {
        DoubleChecked::get_instance(self)
    }

    fn is_initialized(&self) -> bool {
        DoubleChecked::is_initialized(self)
    }

    fn variant(&self) -> Variant {
        Variant::DoubleChecked
    }
}
