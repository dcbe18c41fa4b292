//! Order Service
//!
//! Read-side use cases over the order collection.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::response::ApprovedOrderResponse;
use crate::domain::{OrderRepository, STATUS_APPROVED};
use crate::shared::error::AppError;

/// Order service trait
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Fetch all approved orders, shaped for API exposure.
    async fn fetch_approved_orders(&self) -> Result<Vec<ApprovedOrderResponse>, AppError>;
}

/// OrderService implementation
pub struct OrderServiceImpl<R>
where
    R: OrderRepository,
{
    orders: Arc<R>,
}

impl<R> OrderServiceImpl<R>
where
    R: OrderRepository,
{
    pub fn new(orders: Arc<R>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl<R> OrderService for OrderServiceImpl<R>
where
    R: OrderRepository + 'static,
{
    async fn fetch_approved_orders(&self) -> Result<Vec<ApprovedOrderResponse>, AppError> {
        let orders = self.orders.find_by_status(STATUS_APPROVED).await?;

        Ok(orders
            .into_iter()
            .map(ApprovedOrderResponse::from_order)
            .collect())
    }
}
