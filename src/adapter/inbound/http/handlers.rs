//! Route handlers. Each one is a thin shim over [`RecommendationService`].

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::task;

use super::error::ApiError;
use crate::domain::{ModelStatus, Recommendation};
use crate::port::inbound::recommendation::RecommendationService;

/// Service handle shared by every handler.
pub type SharedService = Arc<dyn RecommendationService>;

const MISSING_ORDER_FIELDS: &str = "Missing order_id or products";

pub async fn home() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Product Recommendation API!" }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "running" }))
}

pub async fn status(State(service): State<SharedService>) -> Json<ModelStatus> {
    Json(service.status())
}

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    #[serde(default)]
    pub product: String,
}

pub async fn recommend(
    State(service): State<SharedService>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<Recommendation>, ApiError> {
    let recommendation = task::spawn_blocking(move || service.recommend(&params.product))
        .await?
        .map_err(|e| ApiError::from_error(e, "Failed to recommend"))?;
    Ok(Json(recommendation))
}

/// Body of a successful `POST /add_order`.
#[derive(Debug, Serialize)]
pub struct OrderAdded {
    pub message: &'static str,
    pub order_id: Value,
    pub products: Vec<String>,
}

/// Accepted `POST /add_order` payload after lenient parsing.
#[derive(Debug, PartialEq)]
pub struct NewOrder {
    /// The id as the client sent it, echoed back in the response.
    pub raw_id: Value,
    pub order_id: String,
    pub products: Vec<String>,
}

impl NewOrder {
    /// Parse `{"order_id": ..., "products": [...]}`.
    ///
    /// The id may be a string or a number. A missing, null or empty field is
    /// reported the same way regardless of which one it was.
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        let data: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

        let raw_id = data.get("order_id").cloned().unwrap_or(Value::Null);
        let order_id = match &raw_id {
            Value::String(s) if !s.trim().is_empty() => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return Err(ApiError::bad_request(MISSING_ORDER_FIELDS)),
        };

        let products = match data.get("products") {
            Some(Value::Array(items)) if !items.is_empty() => items,
            _ => return Err(ApiError::bad_request(MISSING_ORDER_FIELDS)),
        };
        let products = products
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ApiError::bad_request("products must be a list of product names"))?;

        Ok(Self {
            raw_id,
            order_id,
            products,
        })
    }
}

pub async fn add_order(
    State(service): State<SharedService>,
    body: Bytes,
) -> Result<Json<OrderAdded>, ApiError> {
    let NewOrder {
        raw_id,
        order_id,
        products,
    } = NewOrder::parse(&body)?;

    let products = task::spawn_blocking(move || {
        service
            .add_order(&order_id, &products)
            .map(|_| products)
    })
    .await?
    .map_err(|e| ApiError::from_error(e, "Failed to process order"))?;

    Ok(Json(OrderAdded {
        message: "Order added and model retrained",
        order_id: raw_id,
        products,
    }))
}
