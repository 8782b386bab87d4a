// src/handlers/users.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{CreateUserRequest, NewUser, UserResponse},
    store::Store,
    utils::hash::hash_password,
};

use super::parse_id;

/// Registers a new user.
///
/// The password length check runs before hashing so the argon2 cost is
/// only paid for inputs that pass it. Username uniqueness is left to the
/// store; a pre-check here would race with concurrent registrations.
pub async fn register(
    State(store): State<Store>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let password = match payload.password.as_deref() {
        Some(p) if p.chars().count() >= 3 => p,
        _ => {
            return Err(AppError::BadRequest(
                "password must be at least 3 characters".to_string(),
            ));
        }
    };

    let password_hash = hash_password(password)?;

    let user = store
        .users
        .create(NewUser {
            username: payload.username,
            name: payload.name.unwrap_or_default(),
            password_hash,
        })
        .await?;

    tracing::info!("registered user {}", user.username);

    Ok((
        StatusCode::CREATED,
        Json(UserResponse::from_user(&user, &[])),
    ))
}

/// Lists all users with their owned blogs populated.
pub async fn list_users(State(store): State<Store>) -> Result<impl IntoResponse, AppError> {
    let users = store.users.list().await?;
    let blogs = store.blogs.list().await?;

    let views: Vec<UserResponse> = users
        .iter()
        .map(|user| UserResponse::from_user(user, &blogs))
        .collect();

    Ok(Json(views))
}

/// Fetches a single user by id with owned blogs populated.
pub async fn get_user(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "user")?;

    let user = store
        .users
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("user not found".to_string()))?;

    let blogs = store.blogs.list().await?;

    Ok(Json(UserResponse::from_user(&user, &blogs)))
}
