//! Order document model and repository trait.
//!
//! Maps to the `orders` collection.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Status value marking an order as cleared for purchasing.
pub const STATUS_APPROVED: &str = "APPROVED";

/// An order document as stored in the `orders` collection.
///
/// Orders are written by the ERP front office and read loosely here:
/// every field other than `_id` may be absent, and absent keys
/// deserialize to `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub status: Option<String>,
    pub date: Option<String>,
    pub customer: Option<String>,
    pub estimated_amount: Option<String>,
    pub deadline: Option<String>,
    pub paper_size: Option<String>,
    pub pages: Option<String>,
    pub quantity: Option<String>,
    pub binding: Option<String>,
    pub cover_treatment: Option<String>,
    pub inner_paper: Option<String>,
    pub inner_paper_thickness: Option<String>,
    pub outer_paper: Option<String>,
    pub outer_paper_thickness: Option<String>,
    pub inner_lamination: Option<String>,
    pub outer_lamination: Option<String>,
    pub ink_type: Option<String>,
    pub delivery_option: Option<String>,
    #[serde(rename = "purchase_order_created")]
    pub purchase_order_created: Option<bool>,
}

/// Read access to the order collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Fetch every order carrying the given status.
    ///
    /// No sort is applied; documents come back in the store's natural order.
    async fn find_by_status(&self, status: &str) -> Result<Vec<Order>, AppError>;
}

#[cfg(test)]
pub(crate) fn order_fixture(id: ObjectId, status: &str) -> Order {
    Order {
        id,
        status: Some(status.to_string()),
        date: None,
        customer: None,
        estimated_amount: None,
        deadline: None,
        paper_size: None,
        pages: None,
        quantity: None,
        binding: None,
        cover_treatment: None,
        inner_paper: None,
        inner_paper_thickness: None,
        outer_paper: None,
        outer_paper_thickness: None,
        inner_lamination: None,
        outer_lamination: None,
        ink_type: None,
        delivery_option: None,
        purchase_order_created: None,
    }
}
