//! # Error Types
//!
//! Domain-specific error types for rv-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rv-core errors (this file)                                            │
//! │  └── CoreError        - Snapshot encode/decode failures                │
//! │                                                                         │
//! │  rv-db errors (separate crate)                                         │
//! │  └── DbError          - Key-value store failures                       │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the front-end sees (serialized)           │
//! │                                                                         │
//! │  Flow: CoreError / DbError → ApiError → front-end                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that the cart and wishlist operations themselves never fail. These
//! errors only describe the snapshot boundary, and the state container
//! decides whether to surface or absorb them.

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A collection could not be serialized for the given storage key.
    #[error("Failed to encode {key}: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A stored value could not be parsed back into its collection.
    ///
    /// ## When This Occurs
    /// - The value was written by an incompatible front-end version
    /// - The value was truncated or edited by hand
    #[error("Failed to decode {key}: {source}")]
    Decode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_names_the_key() {
        let source = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err = CoreError::Decode {
            key: "rv_cart",
            source,
        };
        assert!(err.to_string().starts_with("Failed to decode rv_cart:"));
    }
}
