//! Atomically published instance storage shared by the pointer-based lazy cells.

use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};

/// A single heap-allocated instance published through an atomic pointer.
///
/// Once published, an instance stays allocated until the slot is dropped. An instance
/// displaced by a later `publish` is leaked, because earlier callers may still borrow it.
pub(crate) struct InstanceSlot<T> {
    ptr: AtomicPtr<T>,
    _owns: PhantomData<T>,
}

// SAFETY: the slot owns a `T` like `Box<T>` does, and hands out `&T` to any thread
// holding `&InstanceSlot<T>`. Construction may happen on one thread and the drop on
// another, hence `Send + Sync` for sharing, matching `OnceLock`.
unsafe impl<T: Send> Send for InstanceSlot<T> {}
unsafe impl<T: Send + Sync> Sync for InstanceSlot<T> {}

impl<T> InstanceSlot<T> {
    pub(crate) const fn new() -> Self {
        Self {
            ptr: AtomicPtr::new(ptr::null_mut()),
            _owns: PhantomData,
        }
    }

    /// Returns the published instance, if any.
    ///
    /// `Acquire` pairs with the release in `publish`, so a non-null pointer is only
    /// observed together with the fully constructed instance behind it.
    pub(crate) fn get(&self) -> Option<&T> {
        let ptr = self.ptr.load(Ordering::Acquire);
        // SAFETY: non-null pointers come from `Box::into_raw` in `publish` and are not
        // freed before `self` is dropped.
        unsafe { ptr.as_ref() }
    }

    /// Publishes `instance` and returns a reference to it, plus whether an already
    /// published instance was displaced.
    pub(crate) fn publish(&self, instance: Box<T>) -> (&T, bool) {
        let ptr = Box::into_raw(instance);
        let previous = self.ptr.swap(ptr, Ordering::AcqRel);

        // SAFETY: `ptr` was just produced by `Box::into_raw` and, like every published
        // pointer, lives until `self` is dropped.
        (unsafe { &*ptr }, !previous.is_null())
    }
}

impl<T> Drop for InstanceSlot<T> {
    fn drop(&mut self) {
        let ptr = *self.ptr.get_mut();
        if !ptr.is_null() {
            // SAFETY: `&mut self` guarantees no outstanding borrows, and the pointer
            // came from `Box::into_raw`.
            drop(unsafe { Box::from_raw(ptr) });
        }
    }
}
