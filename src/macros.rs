//! Macro for declaring a process-wide singleton behind accessor functions.
//!
//! The static cell stays private to a generated module, so the only way to reach the
//! instance is through the module's `get_instance()`.

/// Declares a singleton module backed by one of the cell types.
///
/// The macro generates a module containing:
/// - The static cell (private)
/// - `get_instance() -> &'static T`
/// - `is_initialized() -> bool`
/// - `variant() -> Variant`
///
/// For `Eager` the right-hand side is a constant expression building the instance.
/// For the lazy variants it is a function item or a non-capturing closure.
///
/// The generated module imports everything from its parent, so the payload type and
/// initializer resolve as they would next to the macro call.
///
/// # Examples
///
/// ```rust
/// use singleton_variants::{define_singleton, Variant};
///
/// pub struct Settings {
///     pub retries: u32,
/// }
///
/// pub struct Connection {
///     pub url: String,
/// }
///
/// fn connect() -> Connection {
///     Connection { url: "postgres://localhost".to_string() }
/// }
///
/// define_singleton!(settings: Eager<Settings> = Settings { retries: 3 };);
/// define_singleton!(database: Holder<Connection> = connect;);
///
/// fn main() {
///     assert_eq!(settings::get_instance().retries, 3);
///     assert!(settings::is_initialized());
///
///     assert!(!database::is_initialized());
///     assert_eq!(database::get_instance().url, "postgres://localhost");
///     assert_eq!(database::variant(), Variant::Holder);
/// }
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($(#[$meta:meta])* $vis:vis $name:ident: $variant:ident<$ty:ty> = $init:expr $(;)?) => {
        $(#[$meta])*
        $vis mod $name {
            #[allow(unused_imports)]
            use super::*;

            static INSTANCE: $crate::$variant<$ty> = $crate::$variant::new($init);

            /// Returns the single instance, constructing it first if the cell is lazy.
            pub fn get_instance() -> &'static $ty {
                $crate::SingletonApi::get_instance(&INSTANCE)
            }

            /// Whether the instance has been published.
            pub fn is_initialized() -> bool {
                $crate::SingletonApi::is_initialized(&INSTANCE)
            }

            /// The strategy backing this singleton.
            pub fn variant() -> $crate::Variant {
                $crate::SingletonApi::variant(&INSTANCE)
            }
        }
    };
}
