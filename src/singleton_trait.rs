//! Core trait shared by every singleton cell.
//!
//! Each cell type implements the three required methods; identity comparison is
//! provided on top of them.

use std::ptr;

use crate::Variant;

/// The common contract of all singleton cells.
///
/// Lets callers and tests treat the five strategies uniformly, e.g. to hammer any
/// cell with concurrent first calls.
///
/// # Examples
///
/// ```rust
/// use singleton_variants::{DoubleChecked, Holder, SingletonApi, Variant};
///
/// fn describe<S: SingletonApi>(cell: &S) -> String {
///     format!("{} (initialized: {})", cell.variant(), cell.is_initialized())
/// }
///
/// let dcl: DoubleChecked<u32> = DoubleChecked::new(|| 7);
/// let holder: Holder<u32> = Holder::new(|| 7);
///
/// assert_eq!(describe(&dcl), "double-checked (initialized: false)");
/// holder.get_instance();
/// assert_eq!(describe(&holder), "holder (initialized: true)");
/// ```
pub trait SingletonApi {
    /// The payload type of the single instance.
    type Instance;

    /// Returns the single instance, constructing it first if the strategy is lazy.
    fn get_instance(&self) -> &Self::Instance;

    /// Whether an instance has been published. Never constructs.
    fn is_initialized(&self) -> bool;

    /// The strategy this cell implements.
    fn variant(&self) -> Variant;

    /// Whether `candidate` is the very instance this cell hands out.
    ///
    /// Forces construction for lazy cells. Identity is meaningless for zero-sized
    /// payloads, whose instances may all share one address.
    fn is_same(&self, candidate: &Self::Instance) -> bool {
        ptr::eq(self.get_instance(), candidate)
    }
}

#[cfg(test)]
mod tests {
    use crate::{DoubleChecked, SingletonApi};

    struct Marker;

    #[test]
    fn test_zero_sized_payloads_share_an_address() {
        let a: DoubleChecked<Marker> = DoubleChecked::new(|| Marker);
        let b: DoubleChecked<Marker> = DoubleChecked::new(|| Marker);

        // Two cells, two constructions, yet indistinguishable by address.
        assert!(a.is_same(b.get_instance()));
    }

    #[test]
    fn test_sized_payloads_are_distinguishable() {
        let a: DoubleChecked<u64> = DoubleChecked::new(|| 1);
        let b: DoubleChecked<u64> = DoubleChecked::new(|| 1);

        assert!(!a.is_same(b.get_instance()));
        assert!(a.is_same(a.get_instance()));
    }
}
