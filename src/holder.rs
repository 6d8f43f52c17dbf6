//! Static holder singleton, built on the standard library's once-initialization.

use std::sync::OnceLock;

use crate::singleton_event::emit_event;
use crate::{SingletonApi, SingletonEvent, Variant};

/// A lazy cell that defers to `OnceLock` for exactly-once construction.
///
/// No explicit lock appears here: `OnceLock` blocks concurrent first callers until the
/// winner's initializer returns, and later reads are a single atomic load.
///
/// # Examples
///
/// ```rust
/// use singleton_variants::Holder;
///
/// struct Pool {
///     size: usize,
/// }
///
/// static POOL: Holder<Pool> = Holder::new(|| Pool { size: 8 });
///
/// assert!(!POOL.is_initialized());
/// assert_eq!(POOL.get_instance().size, 8);
/// assert!(POOL.is_initialized());
/// ```
pub struct Holder<T, F = fn() -> T> {
    cell: OnceLock<T>,
    init: F,
}

impl<T, F> Holder<T, F> {
    pub const fn new(init: F) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T, F: Fn() -> T> Holder<T, F> {
    pub fn get_instance(&self) -> &T {
        let mut constructed = false;
        let instance = self.cell.get_or_init(|| {
            constructed = true;
            (self.init)()
        });

        // Emitted outside `get_or_init` so a callback may touch this cell again.
        if constructed {
            emit_event(SingletonEvent::Constructed {
                type_name: std::any::type_name::<T>(),
                variant: Variant::Holder,
            });
        }

        instance
    }
}

impl<T, F: Fn() -> T> SingletonApi for Holder<T, F> {
    type Instance = T;

    fn get_instance(&self) -> &T {
        Holder::get_instance(self)
    }

    fn is_initialized(&self) -> bool {
        Holder::is_initialized(self)
    }

    fn variant(&self) -> Variant {
        Variant::Holder
    }
}
