//! Response DTOs
//!
//! Data structures for API response bodies. Each DTO is built fresh from a
//! stored document per response and discarded after serialization.

use serde::Serialize;

use crate::domain::Order;

/// Envelope wrapping every data endpoint's response body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self { message, data }
    }
}

/// Approved order shaped for API exposure.
///
/// Field names mirror the stored document keys; the store identifier is
/// stringified, and absent fields serialize as null.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedOrderResponse {
    #[serde(rename = "_id")]
    pub id: String,
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

impl ApprovedOrderResponse {
    pub fn from_order(order: Order) -> Self {
        Self {
            id: order.id.to_hex(),
            status: order.status,
            date: order.date,
            customer: order.customer,
            estimated_amount: order.estimated_amount,
            deadline: order.deadline,
            paper_size: order.paper_size,
            pages: order.pages,
            quantity: order.quantity,
            binding: order.binding,
            cover_treatment: order.cover_treatment,
            inner_paper: order.inner_paper,
            inner_paper_thickness: order.inner_paper_thickness,
            outer_paper: order.outer_paper,
            outer_paper_thickness: order.outer_paper_thickness,
            inner_lamination: order.inner_lamination,
            outer_lamination: order.outer_lamination,
            ink_type: order.ink_type,
            delivery_option: order.delivery_option,
            purchase_order_created: order.purchase_order_created,
        }
    }
}

/// Data object for the user full-name lookup.
///
/// A missing user or a user document without the name field both serialize
/// as `{"fullName": null}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullNameData {
    pub full_name: Option<String>,
}
