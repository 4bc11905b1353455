//! # trackside-server
//!
//! RPC surface for the racing and sports services, plus the HTTP gateway
//! that translates HTTP routes into RPC dispatch.
//!
//! Methods are small [`rpc::registry::MethodHandler`] implementations
//! registered under dotted names (`racing.list`, `sports.get`, ...). Each
//! handler is a thin pass-through: decode params into a `(filter, order)`
//! pair or an id, call the store, shape the response envelope. Business
//! logic lives below the store boundary.

#![deny(unsafe_code)]

pub mod http;
pub mod metrics;
pub mod rpc;
