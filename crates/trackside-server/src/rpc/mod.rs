//! RPC method dispatch: context, errors, registry, and handlers.

pub mod context;
pub mod errors;
pub mod handlers;
pub mod registry;

pub use context::RpcContext;
pub use errors::RpcError;
pub use registry::{MethodHandler, MethodRegistry};
