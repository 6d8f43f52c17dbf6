//! Eager singleton: the instance exists before anyone can ask for it.

use crate::{SingletonApi, Variant};

/// A cell whose instance is built before the cell itself.
///
/// `new` is `const`, so a `static Eager<T>` is constructed at compile time and pays
/// its construction cost whether or not it is ever used. There is no window in which
/// two callers could race to build it.
///
/// # Examples
///
/// ```rust
/// use singleton_variants::Eager;
///
/// struct Limits {
///     max_submissions: u32,
/// }
///
/// static LIMITS: Eager<Limits> = Eager::new(Limits { max_submissions: 50 });
///
/// assert_eq!(LIMITS.get_instance().max_submissions, 50);
/// assert!(std::ptr::eq(LIMITS.get_instance(), LIMITS.get_instance()));
/// ```
#[derive(Debug)]
pub struct Eager<T> {
    instance: T,
}

impl<T> Eager<T> {
    pub const fn new(instance: T) -> Self {
        Self { instance }
    }

    pub fn get_instance(&self) -> &T {
        &self.instance
    }
}

impl<T> SingletonApi for Eager<T> {
    type Instance = T;

    fn get_instance(&self) -> &T {
        Eager::get_instance(self)
    }

    fn is_initialized(&self) -> bool {
        true
    }

    fn variant(&self) -> Variant {
        Variant::Eager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    static GREETING: Eager<&str> = Eager::new("hello");

    #[test]
    fn test_static_eager() {
        assert_eq!(*GREETING.get_instance(), "hello");
        assert!(ptr::eq(GREETING.get_instance(), GREETING.get_instance()));
    }

    #[test]
    fn test_initialized_before_first_access() {
        let eager = Eager::new(vec![1, 2, 3]);
        assert!(eager.is_initialized());
        assert_eq!(eager.get_instance(), &vec![1, 2, 3]);
    }

    #[test]
    fn test_trait_view() {
        let eager = Eager::new(5u8);
        let instance = eager.get_instance();

        assert_eq!(SingletonApi::variant(&eager), Variant::Eager);
        assert!(eager.is_same(instance));
        assert!(!eager.is_same(&5u8));
    }
}
