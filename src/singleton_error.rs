use thiserror::Error;

/// Errors reported by singleton cells and variant parsing.
///
/// Acquiring an instance never fails; these only cover explicit initialization
/// and naming a variant by string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SingletonError {
    /// An instance was already published, so an explicit `set` was refused.
    #[error("Singleton instance already initialized: {type_name}")]
    AlreadyInitialized { type_name: &'static str },

    /// The given name does not match any singleton variant.
    #[error("Unknown singleton variant: {name}")]
    UnknownVariant { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_initialized_display() {
        let err = SingletonError::AlreadyInitialized { type_name: "i32" };
        assert_eq!(err.to_string(), "Singleton instance already initialized: i32");
    }

    #[test]
    fn test_unknown_variant_display() {
        let err = SingletonError::UnknownVariant {
            name: "triple-checked".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown singleton variant: triple-checked");
    }

    #[test]
    fn test_equality() {
        assert_eq!(
            SingletonError::AlreadyInitialized { type_name: "u8" },
            SingletonError::AlreadyInitialized { type_name: "u8" }
        );
        assert_ne!(
            SingletonError::AlreadyInitialized { type_name: "u8" },
            SingletonError::UnknownVariant {
                name: "u8".to_string()
            }
        );
    }

    #[test]
    fn test_error_trait() {
        let err: &dyn std::error::Error = &SingletonError::UnknownVariant {
            name: "x".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown singleton variant: x");
    }
}
