//! RPC method handlers and shared param decoding helpers.
//!
//! The racing and sports modules are structurally parallel on purpose —
//! each resource's param validation and response shaping evolves on its own.

pub mod racing;
pub mod sports;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::rpc::errors::RpcError;

/// Decode an optional sub-object param into `T`.
///
/// A missing or `null` value decodes to `T::default()` — absent filter and
/// order structures mean "no restriction" / "no ordering". A present value
/// with the wrong shape is rejected.
pub fn optional_struct_param<T: DeserializeOwned + Default>(
    params: Option<&Value>,
    key: &str,
) -> Result<T, RpcError> {
    match params.and_then(|p| p.get(key)) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|err| RpcError::invalid_params(format!("{key}: {err}"))),
    }
}

/// Require an integer `id`-style param.
pub fn require_i64_param(params: Option<&Value>, key: &str) -> Result<i64, RpcError> {
    params
        .and_then(|p| p.get(key))
        .and_then(Value::as_i64)
        .ok_or_else(|| RpcError::invalid_params(format!("missing integer param {key}")))
}
