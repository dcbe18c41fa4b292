//! Order Handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::dto::response::{ApiResponse, ApprovedOrderResponse};
use crate::application::services::{OrderService, OrderServiceImpl};
use crate::infrastructure::repositories::MongoOrderRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all approved orders
pub async fn get_approved_orders(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ApprovedOrderResponse>>>, AppError> {
    let order_repo = Arc::new(MongoOrderRepository::new(state.db.clone()));
    let order_service = OrderServiceImpl::new(order_repo);

    let orders = order_service.fetch_approved_orders().await?;

    Ok(Json(ApiResponse::new(
        "Approved Orders Fetched Successfully",
        orders,
    )))
}
