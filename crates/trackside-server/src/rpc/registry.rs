//! Method registry — dotted method names to handlers.

use std::collections::HashMap;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::metrics::{RPC_ERRORS_TOTAL, RPC_REQUEST_DURATION_SECONDS, RPC_REQUESTS_TOTAL};
use crate::rpc::context::RpcContext;
use crate::rpc::errors::RpcError;
use crate::rpc::handlers;

/// One RPC method implementation.
#[async_trait]
pub trait MethodHandler: Send + Sync {
    /// Handle a single call.
    async fn handle(&self, params: Option<Value>, ctx: &RpcContext) -> Result<Value, RpcError>;
}

/// Registry mapping method names to handlers.
pub struct MethodRegistry {
    methods: HashMap<&'static str, Box<dyn MethodHandler>>,
}

impl MethodRegistry {
    /// Registry with every built-in method registered.
    pub fn new() -> Self {
        let mut registry = Self { methods: HashMap::new() };
        registry.register("racing.list", Box::new(handlers::racing::ListRacesHandler));
        registry.register("racing.get", Box::new(handlers::racing::GetRaceHandler));
        registry.register("sports.list", Box::new(handlers::sports::ListEventsHandler));
        registry.register("sports.get", Box::new(handlers::sports::GetEventHandler));
        registry
    }

    /// Register a handler under a method name.
    pub fn register(&mut self, name: &'static str, handler: Box<dyn MethodHandler>) {
        let _ = self.methods.insert(name, handler);
    }

    /// Dispatch a call to the named method.
    pub async fn dispatch(
        &self,
        method: &str,
        params: Option<Value>,
        ctx: &RpcContext,
    ) -> Result<Value, RpcError> {
        let Some(handler) = self.methods.get(method) else {
            return Err(RpcError::MethodNotFound { method: method.to_string() });
        };

        metrics::counter!(RPC_REQUESTS_TOTAL, "method" => method.to_string()).increment(1);
        let started = Instant::now();
        let result = handler.handle(params, ctx).await;
        metrics::histogram!(RPC_REQUEST_DURATION_SECONDS, "method" => method.to_string())
            .record(started.elapsed().as_secs_f64());

        if let Err(ref err) = result {
            metrics::counter!(
                RPC_ERRORS_TOTAL,
                "method" => method.to_string(),
                "code" => err.code()
            )
            .increment(1);
            debug!(method, code = err.code(), "rpc call failed");
        }
        result
    }

    /// Registered method names, for diagnostics.
    pub fn method_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.methods.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}
