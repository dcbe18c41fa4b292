//! User Repository Implementation
//!
//! MongoDB implementation of the UserRepository trait.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};

use crate::domain::{User, UserRepository};
use crate::shared::error::AppError;

const COLLECTION: &str = "users";

/// MongoDB user repository implementation.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Create a new MongoUserRepository over the given database handle.
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    /// Find a user by its store identifier.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, AppError> {
        let user = self.collection.find_one(doc! { "_id": id }).await?;

        Ok(user)
    }
}
