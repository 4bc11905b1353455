//! Shared context handed to every RPC method handler.

use std::sync::Arc;

use trackside_store::Store;

/// Dependencies available to method handlers.
///
/// One instance serves all calls; the store itself is stateless per call,
/// so handlers can run concurrently without coordination.
pub struct RpcContext {
    /// Races and events store facade.
    pub store: Arc<Store>,
}

impl RpcContext {
    /// Build a context around a store.
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}
