//! RPC error taxonomy.
//!
//! Only genuine failures become errors. A `get` miss is a successful `null`
//! response, and an unrecognized order field is simply ignored by the store
//! — neither ever surfaces here.

use thiserror::Error;

/// Failures surfaced to RPC callers.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Request parameters were missing or malformed.
    #[error("invalid params: {message}")]
    InvalidParams {
        /// Human-readable description.
        message: String,
    },
    /// Unknown method name.
    #[error("method not found: {method}")]
    MethodNotFound {
        /// The requested method name.
        method: String,
    },
    /// Storage failure, propagated unmodified from the store.
    #[error("internal error: {message}")]
    Internal {
        /// Human-readable description.
        message: String,
    },
}

impl RpcError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidParams { .. } => "INVALID_PARAMS",
            Self::MethodNotFound { .. } => "METHOD_NOT_FOUND",
            Self::Internal { .. } => "INTERNAL",
        }
    }

    /// Wrap a store failure.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal { message: err.to_string() }
    }

    /// Reject malformed params.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(RpcError::invalid_params("x").code(), "INVALID_PARAMS");
        assert_eq!(
            RpcError::MethodNotFound { method: "nope".into() }.code(),
            "METHOD_NOT_FOUND"
        );
        assert_eq!(RpcError::internal("boom").code(), "INTERNAL");
    }
}
