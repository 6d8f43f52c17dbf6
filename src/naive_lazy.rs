//! Naive lazy singleton: check, then construct, with nothing in between.
//!
//! Kept to demonstrate the defect the other lazy variants fix. It is memory safe,
//! but not singleton safe: concurrent first callers can each build an instance.

use crate::singleton_event::emit_event;
use crate::slot::InstanceSlot;
use crate::{SingletonApi, SingletonEvent, Variant};

/// A lazy cell that checks for an instance and builds one if absent, without a lock.
///
/// Sequential callers always share one instance. Threads that pass the emptiness check
/// before any of them publishes each construct their own; the last to publish wins
/// the slot, and the displaced instances stay alive for whoever already holds them.
///
/// # Examples
///
/// ```rust
/// use singleton_variants::NaiveLazy;
///
/// static COUNTER_NAME: NaiveLazy<String> = NaiveLazy::new(|| "submissions".to_string());
///
/// assert!(!COUNTER_NAME.is_initialized());
/// assert_eq!(COUNTER_NAME.get_instance(), "submissions");
/// assert!(COUNTER_NAME.is_initialized());
/// ```
pub struct NaiveLazy<T, F = fn() -> T> {
    slot: InstanceSlot<T>,
    init: F,
}

impl<T, F> NaiveLazy<T, F> {
    pub const fn new(init: F) -> Self {
        Self {
            slot: InstanceSlot::new(),
            init,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T, F: Fn() -> T> NaiveLazy<T, F> {
    pub fn get_instance(&self) -> &T {
        if let Some(instance) = self.slot.get() {
            return instance;
        }

        // Another caller may pass the check above before either of us publishes.
        let (instance, displaced) = self.slot.publish(Box::new((self.init)()));

        emit_event(SingletonEvent::Constructed {
            type_name: std::any::type_name::<T>(),
            variant: Variant::NaiveLazy,
        });
        if displaced {
            emit_event(SingletonEvent::Superseded {
                type_name: std::any::type_name::<T>(),
            });
        }

        instance
    }
}

impl<T, F: Fn() -> T> SingletonApi for NaiveLazy<T, F> {
    type Instance = T;

    fn get_instance(&self) -> &T {
        NaiveLazy::get_instance(self)
    }

    fn is_initialized(&self) -> bool {
        NaiveLazy::is_initialized(self)
    }

    fn variant(&self) -> Variant {
        Variant::NaiveLazy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};
    use std::ptr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_lazy_until_first_call() {
        let constructions = AtomicUsize::new(0);
        let naive = NaiveLazy::new(|| {
            constructions.fetch_add(1, Ordering::SeqCst);
            "instance".to_string()
        });

        assert!(!naive.is_initialized());
        assert_eq!(constructions.load(Ordering::SeqCst), 0);

        assert_eq!(naive.get_instance(), "instance");
        assert!(naive.is_initialized());
        assert_eq!(constructions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sequential_calls_share_instance() {
        let constructions = AtomicUsize::new(0);
        let naive = NaiveLazy::new(|| constructions.fetch_add(1, Ordering::SeqCst));

        let first = naive.get_instance();
        let second = naive.get_instance();

        assert!(ptr::eq(first, second));
        assert_eq!(constructions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_variant() {
        let naive: NaiveLazy<u8> = NaiveLazy::new(|| 0);
        assert_eq!(SingletonApi::variant(&naive), Variant::NaiveLazy);
    }

    #[test]
    fn test_recovers_after_panicking_initializer() {
        let attempts = AtomicUsize::new(0);
        let cell = NaiveLazy::new(|| {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("first construction fails");
            }
            "ready"
        });

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            cell.get_instance();
        }));
        assert!(result.is_err());
        assert!(!cell.is_initialized());

        assert_eq!(*cell.get_instance(), "ready");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }
}
