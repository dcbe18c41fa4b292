//! User Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::response::{ApiResponse, FullNameData};
use crate::application::services::{UserService, UserServiceImpl};
use crate::infrastructure::repositories::MongoUserRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Get a user's full name by store identifier.
///
/// An unknown identifier is answered with a success envelope and a null
/// name; only a malformed identifier or a store failure fails the request.
pub async fn get_user_full_name(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<FullNameData>>, AppError> {
    let user_repo = Arc::new(MongoUserRepository::new(state.db.clone()));
    let user_service = UserServiceImpl::new(user_repo);

    let full_name = user_service.get_full_name(&id).await?;

    Ok(Json(ApiResponse::new(
        "User Fetched Successfully",
        FullNameData { full_name },
    )))
}
