//! Racing handlers: list, get.

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;
use trackside_core::{OrderSpec, RaceFilter};

use crate::rpc::context::RpcContext;
use crate::rpc::errors::RpcError;
use crate::rpc::handlers::{optional_struct_param, require_i64_param};
use crate::rpc::registry::MethodHandler;

/// List races, filtered and ordered.
pub struct ListRacesHandler;

#[async_trait]
impl MethodHandler for ListRacesHandler {
    #[instrument(skip(self, ctx), fields(method = "racing.list"))]
    async fn handle(&self, params: Option<Value>, ctx: &RpcContext) -> Result<Value, RpcError> {
        let filter: RaceFilter = optional_struct_param(params.as_ref(), "filter")?;
        let order: OrderSpec = optional_struct_param(params.as_ref(), "order")?;

        let races = ctx
            .store
            .list_races(&filter, &order)
            .map_err(RpcError::internal)?;

        Ok(serde_json::json!({ "races": races }))
    }
}

/// Fetch a single race by id. Absence is a `null` result, not an error.
pub struct GetRaceHandler;

#[async_trait]
impl MethodHandler for GetRaceHandler {
    #[instrument(skip(self, ctx), fields(method = "racing.get"))]
    async fn handle(&self, params: Option<Value>, ctx: &RpcContext) -> Result<Value, RpcError> {
        let id = require_i64_param(params.as_ref(), "id")?;

        let race = ctx.store.get_race(id).map_err(RpcError::internal)?;

        Ok(match race {
            Some(race) => serde_json::to_value(race).map_err(RpcError::internal)?,
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
    async fn list_unfiltered_returns_all_races() {
        let ctx = make_test_context();
        let result = ListRacesHandler.handle(None, &ctx).await.unwrap();
        assert_eq!(result["races"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn list_with_meeting_filter() {
        let ctx = make_test_context();
        let result = ListRacesHandler
            .handle(Some(json!({"filter": {"meetingIds": [2]}})), &ctx)
            .await
            .unwrap();
        let races = result["races"].as_array().unwrap();
        assert_eq!(races.len(), 2);
        assert!(races.iter().all(|race| race["meetingId"] == 2));
    }

    #[tokio::test]
    async fn list_only_visible() {
        let ctx = make_test_context();
        let result = ListRacesHandler
            .handle(Some(json!({"filter": {"onlyVisible": true}})), &ctx)
            .await
            .unwrap();
        let races = result["races"].as_array().unwrap();
        assert_eq!(races.len(), 2);
        assert!(races.iter().all(|race| race["visible"] == true));
    }

    #[tokio::test]
    async fn list_with_ordering() {
        let ctx = make_test_context();
        let result = ListRacesHandler
            .handle(Some(json!({"order": {"field": "name"}})), &ctx)
            .await
            .unwrap();
        let names: Vec<&str> = result["races"]
            .as_array()
            .unwrap()
            .iter()
            .map(|race| race["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["First", "Fourth", "Second", "Third"]);
    }

    #[tokio::test]
    async fn list_unknown_order_field_is_ignored() {
        let ctx = make_test_context();
        let result = ListRacesHandler
            .handle(Some(json!({"order": {"field": "nope"}})), &ctx)
            .await
            .unwrap();
        assert_eq!(result["races"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn list_records_carry_derived_status() {
        let ctx = make_test_context();
        let result = ListRacesHandler
            .handle(Some(json!({"order": {"field": "id"}})), &ctx)
            .await
            .unwrap();
        let races = result["races"].as_array().unwrap();
        assert_eq!(races[0]["status"], "CLOSED");
        assert_eq!(races[2]["status"], "OPEN");
    }

    #[tokio::test]
    async fn list_rejects_malformed_filter() {
        let ctx = make_test_context();
        let err = ListRacesHandler
            .handle(Some(json!({"filter": {"meetingIds": 3}})), &ctx)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_PARAMS");
    }

    #[tokio::test]
    async fn get_existing_race() {
        let ctx = make_test_context();
        let result = GetRaceHandler
            .handle(Some(json!({"id": 3})), &ctx)
            .await
            .unwrap();
        assert_eq!(result["id"], 3);
        assert_eq!(result["status"], "OPEN");
    }

    #[tokio::test]
    async fn get_missing_race_is_null() {
        let ctx = make_test_context();
        let result = GetRaceHandler
            .handle(Some(json!({"id": 200})), &ctx)
            .await
            .unwrap();
        assert!(result.is_null());
    }

    #[tokio::test]
    async fn get_requires_id() {
        let ctx = make_test_context();
        let err = GetRaceHandler.handle(Some(json!({})), &ctx).await.unwrap_err();
        assert_eq!(err.code(), "INVALID_PARAMS");
    }
}
