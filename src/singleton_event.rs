//! Lifecycle events emitted by singleton cells and the process-wide tracing hook.
//!
//! Events are only emitted on slow paths (construction, a superseded naive instance,
//! a rejected `set`). Steady-state reads never touch the hook.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, warn};

use crate::Variant;

/// Events emitted by singleton cells.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use singleton_variants::{SingletonEvent, Variant};
///
/// let event = SingletonEvent::Constructed {
///     type_name: "i32",
///     variant: Variant::Holder,
/// };
/// assert_eq!(event.to_string(), "constructed { type_name: i32, variant: holder }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingletonEvent {
    /// A lazy cell built its instance.
    Constructed {
        /// The payload type name (e.g., "i32", "alloc::string::String")
        type_name: &'static str,
        /// The strategy of the cell that built it
        variant: Variant,
    },

    /// A naive lazy cell replaced an instance another caller had already published.
    Superseded {
        /// The payload type name
        type_name: &'static str,
    },

    /// An explicit `set` was refused because an instance already exists.
    Rejected {
        /// The payload type name
        type_name: &'static str,
        /// The strategy of the cell that refused it
        variant: Variant,
    },
}

impl SingletonEvent {
    pub fn type_name(&self) -> &'static str {
        match self {
            SingletonEvent::Constructed { type_name, .. }
            | SingletonEvent::Superseded { type_name }
            | SingletonEvent::Rejected { type_name, .. } => type_name,
        }
    }
}

impl fmt::Display for SingletonEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SingletonEvent::Constructed { type_name, variant } => {
                write!(f, "constructed {{ type_name: {type_name}, variant: {variant} }}")
            }
            SingletonEvent::Superseded { type_name } => {
                write!(f, "superseded {{ type_name: {type_name} }}")
            }
            SingletonEvent::Rejected { type_name, variant } => {
                write!(f, "rejected {{ type_name: {type_name}, variant: {variant} }}")
            }
        }
    }
}

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `SingletonEvent` from whichever thread hit
/// the slow path, so it must be thread-safe.
pub type TraceCallback = dyn Fn(&SingletonEvent) + Send + Sync + 'static;

/// Holds an optional user-defined tracing callback.
static TRACE_CALLBACK: Mutex<Option<Arc<TraceCallback>>> = Mutex::new(None);

/// Sets a tracing callback invoked on every singleton lifecycle event.
///
/// Replaces any previously installed callback. The callback runs after the emitting
/// cell released its lock, so it may safely acquire other singletons.
///
/// # Example
/// ```rust
/// use singleton_variants::{clear_trace_callback, set_trace_callback};
///
/// set_trace_callback(|event| println!("[singleton-trace] {event}"));
/// clear_trace_callback();
/// ```
pub fn set_trace_callback(callback: impl Fn(&SingletonEvent) + Send + Sync + 'static) {
    let mut guard = TRACE_CALLBACK.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Arc::new(callback));
}

/// Clears the tracing callback.
pub fn clear_trace_callback() {
    let mut guard = TRACE_CALLBACK.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Logs the event and forwards it to the current callback, if any.
pub(crate) fn emit_event(event: SingletonEvent) {
    match &event {
        SingletonEvent::Constructed { type_name, variant } => {
            debug!(type_name, %variant, "constructed singleton instance");
        }
        SingletonEvent::Superseded { type_name } => {
            warn!(type_name, "naive lazy singleton constructed more than one instance");
        }
        SingletonEvent::Rejected { type_name, variant } => {
            debug!(type_name, %variant, "rejected explicit singleton initialization");
        }
    }

    // The callback runs without the lock held so it can install or clear callbacks itself.
    let callback = TRACE_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    if let Some(callback) = callback {
        callback(&event);
    }
}
