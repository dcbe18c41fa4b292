//! Order Repository Implementation
//!
//! MongoDB implementation of the OrderRepository trait.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::domain::{Order, OrderRepository};
use crate::shared::error::AppError;

const COLLECTION: &str = "orders";

/// MongoDB order repository implementation.
///
/// Reads from the `orders` collection through a typed handle; documents
/// deserialize into the domain `Order` model.
#[derive(Clone)]
pub struct MongoOrderRepository {
    collection: Collection<Order>,
}

impl MongoOrderRepository {
    /// Create a new MongoOrderRepository over the given database handle.
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    /// Fetch every order with the given status, in the store's natural
    /// order.
    async fn find_by_status(&self, status: &str) -> Result<Vec<Order>, AppError> {
        let cursor = self.collection.find(doc! { "status": status }).await?;
        let orders = cursor.try_collect().await?;

        Ok(orders)
    }
}
