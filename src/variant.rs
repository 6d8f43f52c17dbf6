//! Names and policies of the singleton acquisition strategies.

use std::fmt;
use std::str::FromStr;

use crate::SingletonError;

/// The strategy a singleton cell uses to build and publish its instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Built before the cell exists.
    Eager,
    /// Built on first call without coordination.
    NaiveLazy,
    /// Built on first call; every call takes the lock.
    Synchronized,
    /// Built on first call; the lock is taken only while nothing is published.
    DoubleChecked,
    /// Built on first call through the standard library's once-initialization.
    Holder,
}

impl Variant {
    /// All variants, from cheapest construction policy to most guarded.
    pub const ALL: [Variant; 5] = [
        Variant::Eager,
        Variant::NaiveLazy,
        Variant::Synchronized,
        Variant::DoubleChecked,
        Variant::Holder,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Eager => "eager",
            Variant::NaiveLazy => "naive-lazy",
            Variant::Synchronized => "synchronized",
            Variant::DoubleChecked => "double-checked",
            Variant::Holder => "holder",
        }
    }

    /// Whether construction is deferred until the first `get_instance` call.
    pub const fn is_lazy(self) -> bool {
        !matches!(self, Variant::Eager)
    }

    /// Whether concurrent first callers are guaranteed to share one instance.
    pub const fn is_thread_safe(self) -> bool {
        !matches!(self, Variant::NaiveLazy)
    }

    /// Whether steady-state reads still acquire a lock.
    pub const fn locks_every_call(self) -> bool {
        matches!(self, Variant::Synchronized)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = SingletonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");

        match normalized.as_str() {
            "eager" => Ok(Variant::Eager),
            "naive-lazy" | "lazy" => Ok(Variant::NaiveLazy),
            "synchronized" => Ok(Variant::Synchronized),
            "double-checked" | "dcl" => Ok(Variant::DoubleChecked),
            "holder" | "static-holder" | "bill-pugh" => Ok(Variant::Holder),
            _ => Err(SingletonError::UnknownVariant {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        for variant in Variant::ALL {
            let parsed: Variant = variant.to_string().parse().unwrap();
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("lazy".parse::<Variant>().unwrap(), Variant::NaiveLazy);
        assert_eq!("DCL".parse::<Variant>().unwrap(), Variant::DoubleChecked);
        assert_eq!(
            "double_checked".parse::<Variant>().unwrap(),
            Variant::DoubleChecked
        );
        assert_eq!("Bill-Pugh".parse::<Variant>().unwrap(), Variant::Holder);
        assert_eq!(" static_holder ".parse::<Variant>().unwrap(), Variant::Holder);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "monostate".parse::<Variant>().unwrap_err();
        assert_eq!(
            err,
            SingletonError::UnknownVariant {
                name: "monostate".to_string()
            }
        );
    }

    #[test]
    fn test_policies() {
        let lazy: Vec<_> = Variant::ALL.into_iter().filter(|v| v.is_lazy()).collect();
        assert_eq!(lazy.len(), 4);
        assert!(!Variant::Eager.is_lazy());

        let unsafe_variants: Vec<_> = Variant::ALL
            .into_iter()
            .filter(|v| !v.is_thread_safe())
            .collect();
        assert_eq!(unsafe_variants, vec![Variant::NaiveLazy]);

        assert!(Variant::Synchronized.locks_every_call());
        assert!(!Variant::DoubleChecked.locks_every_call());
        assert!(!Variant::Holder.locks_every_call());
    }
}
