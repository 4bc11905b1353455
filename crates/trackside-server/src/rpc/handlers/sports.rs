//! Sports handlers: list, get.

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;
use trackside_core::{EventFilter, OrderSpec};

use crate::rpc::context::RpcContext;
use crate::rpc::errors::RpcError;
use crate::rpc::handlers::{optional_struct_param, require_i64_param};
use crate::rpc::registry::MethodHandler;

/// List sporting events, filtered and ordered.
pub struct ListEventsHandler;

#[async_trait]
impl MethodHandler for ListEventsHandler {
    #[instrument(skip(self, ctx), fields(method = "sports.list"))]
    async fn handle(&self, params: Option<Value>, ctx: &RpcContext) -> Result<Value, RpcError> {
        let filter: EventFilter = optional_struct_param(params.as_ref(), "filter")?;
        let order: OrderSpec = optional_struct_param(params.as_ref(), "order")?;

        let events = ctx
            .store
            .list_events(&filter, &order)
            .map_err(RpcError::internal)?;

        Ok(serde_json::json!({ "events": events }))
    }
}

/// Fetch a single event by id. Absence is a `null` result, not an error.
pub struct GetEventHandler;

#[async_trait]
impl MethodHandler for GetEventHandler {
    #[instrument(skip(self, ctx), fields(method = "sports.get"))]
    async fn handle(&self, params: Option<Value>, ctx: &RpcContext) -> Result<Value, RpcError> {
        let id = require_i64_param(params.as_ref(), "id")?;

        let event = ctx.store.get_event(id).map_err(RpcError::internal)?;

        Ok(match event {
            Some(event) => serde_json::to_value(event).map_err(RpcError::internal)?,
            None => Value::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::handlers::test_helpers::make_test_context;
    use serde_json::json;

    #[tokio::test]
    async fn list_unfiltered_returns_all_events() {
        let ctx = make_test_context();
        let result = ListEventsHandler.handle(None, &ctx).await.unwrap();
        assert_eq!(result["events"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn list_with_sport_filter() {
        let ctx = make_test_context();
        let result = ListEventsHandler
            .handle(
                Some(json!({"filter": {"sports": ["Cricket", "Netball"]}})),
                &ctx,
            )
            .await
            .unwrap();
        let events = result["events"].as_array().unwrap();
        assert_eq!(events.len(), 2);
        assert!(
            events
                .iter()
                .all(|event| event["sport"] == "Cricket" || event["sport"] == "Netball")
        );
    }

    #[tokio::test]
    async fn list_only_visible() {
        let ctx = make_test_context();
        let result = ListEventsHandler
            .handle(Some(json!({"filter": {"onlyVisible": true}})), &ctx)
            .await
            .unwrap();
        let events = result["events"].as_array().unwrap();
        assert_eq!(events.len(), 2);
    }

    #[tokio::test]
    async fn list_with_ordering() {
        let ctx = make_test_context();
        let result = ListEventsHandler
            .handle(Some(json!({"order": {"field": "sport"}})), &ctx)
            .await
            .unwrap();
        let sports: Vec<&str> = result["events"]
            .as_array()
            .unwrap()
            .iter()
            .map(|event| event["sport"].as_str().unwrap())
            .collect();
        assert_eq!(sports, vec!["Cricket", "Golf", "Netball"]);
    }

    #[tokio::test]
    async fn list_records_carry_derived_status() {
        let ctx = make_test_context();
        let result = ListEventsHandler
            .handle(Some(json!({"order": {"field": "id"}})), &ctx)
            .await
            .unwrap();
        let events = result["events"].as_array().unwrap();
        assert_eq!(events[0]["status"], "CLOSED");
        assert_eq!(events[1]["status"], "OPEN");
    }

    #[tokio::test]
    async fn get_existing_event() {
        let ctx = make_test_context();
        let result = GetEventHandler
            .handle(Some(json!({"id": 1})), &ctx)
            .await
            .unwrap();
        assert_eq!(result["id"], 1);
        assert_eq!(result["sport"], "Cricket");
    }

    #[tokio::test]
    async fn get_missing_event_is_null() {
        let ctx = make_test_context();
        let result = GetEventHandler
            .handle(Some(json!({"id": 77})), &ctx)
            .await
            .unwrap();
        assert!(result.is_null());
    }

    #[tokio::test]
    async fn get_requires_id() {
        let ctx = make_test_context();
        let err = GetEventHandler.handle(None, &ctx).await.unwrap_err();
        assert_eq!(err.code(), "INVALID_PARAMS");
    }
}
