//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the storefront                         │
//! │                                                                         │
//! │  Startup                                                                │
//! │  ├── store cannot be opened ──── DbError ────────► ApiError (fatal)    │
//! │  └── stored value unreadable ─── LoadOutcome ────► empty (logged)      │
//! │                                                                         │
//! │  Command                                                                │
//! │  ├── no CartProvider mounted ──────────────────► ApiError (fatal)      │
//! │  ├── payload is not a product ─────────────────► ApiError (validation) │
//! │  └── persisting after mutation fails ──────────► ignored (logged)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! What a consumer receives when a command fails:
//! ```json
//! {
//!   "code": "PROVIDER_MISSING",
//!   "message": "cart state accessed outside of a CartProvider"
//! }
//! ```

use rv_core::CoreError;
use rv_db::DbError;
use serde::Serialize;
use thiserror::Error;

/// API error returned from storefront commands.
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input could not be understood (e.g. a product without `id`)
    ValidationError,

    /// The key-value store could not be opened
    DatabaseError,

    /// Cart state used with no CartProvider mounted.
    /// An integration mistake, never a runtime condition.
    ProviderMissing,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates the error for cart access outside a provider.
    pub fn provider_missing() -> Self {
        tracing::error!("Cart state accessed outside of a CartProvider");
        ApiError::new(
            ErrorCode::ProviderMissing,
            "cart state accessed outside of a CartProvider",
        )
    }
}

/// Converts database errors to API errors.
///
/// Only store-opening failures reach this point; the detail goes to the log.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(e) => {
                tracing::error!("Store connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Store connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Store migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Store migration failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Store connection pool exhausted")
            }
            DbError::QueryFailed(e) | DbError::Internal(e) => {
                tracing::error!("Store operation failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Store operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Decode { .. } => ApiError::validation(err.to_string()),
            CoreError::Encode { .. } => ApiError::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::provider_missing();
        let value = serde_json::to_value(&err).unwrap();

        assert_eq!(value["code"], "PROVIDER_MISSING");
        assert_eq!(value["message"], "cart state accessed outside of a CartProvider");
    }

    #[test]
    fn test_db_error_detail_is_not_echoed() {
        let err = ApiError::from(DbError::QueryFailed("disk I/O error at page 7".into()));

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("page 7"));
    }

    #[test]
    fn test_display() {
        let err = ApiError::validation("Invalid product payload");
        assert_eq!(err.to_string(), "[ValidationError] Invalid product payload");
    }
}
