//! Request handlers for `/api/v1/packs` and `/health`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use packsmith_core::{OrderQuantity, PackCombination};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query for `GET /calculate`. A missing quantity counts as zero.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateQuery {
    #[serde(default)]
    pub order_item_quantity: i64,
}

/// Packs chosen for an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    /// Pack size to count, largest size first.
    pub packs: PackCombination,
    pub total: u64,
    pub pack_count: u64,
}

/// Configured sizes, largest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizesResponse {
    pub sizes: Vec<u64>,
}

/// Body for adding or removing a size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SizeRequest {
    pub size: u64,
}

pub async fn calculate(
    State(state): State<AppState>,
    query: Result<Query<CalculateQuery>, QueryRejection>,
) -> Result<ApiResponse<CalculateResponse>, ApiError> {
    let Query(query) = query?;
    let quantity = u64::try_from(query.order_item_quantity)
        .ok()
        .and_then(|q| OrderQuantity::new(q).ok())
        .ok_or(ApiError::InvalidQuantity)?;

    let solution = state.calculate(quantity).await?;
    let response = CalculateResponse {
        total: solution.total(),
        pack_count: solution.pack_count(),
        packs: solution.into_combination(),
    };
    Ok(ApiResponse::success(response, "pack calculated successfully"))
}

pub async fn list_sizes(
    State(state): State<AppState>,
) -> Result<ApiResponse<SizesResponse>, ApiError> {
    let sizes = state.store().sizes()?;
    Ok(ApiResponse::success(
        SizesResponse { sizes },
        "pack sizes fetched successfully",
    ))
}

pub async fn add_size(
    State(state): State<AppState>,
    body: Result<Json<SizeRequest>, JsonRejection>,
) -> Result<ApiResponse<()>, ApiError> {
    let Json(req) = body?;
    let added = state.store().add(req.size)?;
    info!(event = "size_added", size = req.size, new = added);
    Ok(ApiResponse::success_no_data("pack size added successfully"))
}

pub async fn remove_size(
    State(state): State<AppState>,
    body: Result<Json<SizeRequest>, JsonRejection>,
) -> Result<ApiResponse<()>, ApiError> {
    let Json(req) = body?;
    state.store().remove(req.size)?;
    info!(event = "size_removed", size = req.size);
    Ok(ApiResponse::success_no_data("pack size removed successfully"))
}

pub async fn health() -> &'static str {
    "ok"
}
