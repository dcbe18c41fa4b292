//! User Service
//!
//! Full-name lookup by store identifier.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::UserRepository;
use crate::shared::error::AppError;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Look up a user's full name by the raw identifier from the request
    /// path.
    ///
    /// A missing user is not an error: the lookup returns `Ok(None)`, and
    /// so does a user document that lacks the name field. A malformed
    /// identifier fails the request instead.
    async fn get_full_name(&self, id: &str) -> Result<Option<String>, AppError>;
}

/// UserService implementation
pub struct UserServiceImpl<R>
where
    R: UserRepository,
{
    users: Arc<R>,
}

impl<R> UserServiceImpl<R>
where
    R: UserRepository,
{
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> UserService for UserServiceImpl<R>
where
    R: UserRepository + 'static,
{
    async fn get_full_name(&self, id: &str) -> Result<Option<String>, AppError> {
        let id = ObjectId::parse_str(id)?;

        let user = self.users.find_by_id(id).await?;

        Ok(user.and_then(|user| user.full_name))
    }
}
