//! User document model and repository trait.
//!
//! Maps to the `users` collection.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A user account document as stored in the `users` collection.
///
/// The password is part of the stored document but is never exposed
/// through any endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub full_name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub status: Option<bool>,
    pub role: Option<String>,
}

/// Read access to the user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by its store identifier.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, AppError>;
}
