// src/handlers/login.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{
    config::Config,
    error::AppError,
    models::user::LoginRequest,
    store::Store,
    utils::{hash::verify_password, jwt::sign_jwt},
};

/// Authenticates a user and returns an identity token.
///
/// An unknown username and a wrong password fail identically so callers
/// cannot tell which part was wrong.
pub async fn login(
    State(store): State<Store>,
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = store.users.find_by_username(&payload.username).await?;

    let user = user.ok_or_else(|| {
        AppError::InvalidToken("invalid username or password".to_string())
    })?;

    let is_valid = verify_password(&payload.password, &user.password_hash)?;

    if !is_valid {
        return Err(AppError::InvalidToken(
            "invalid username or password".to_string(),
        ));
    }

    let token = sign_jwt(&user, &config.jwt_secret)?;

    Ok(Json(json!({
        "token": token,
        "username": user.username,
        "name": user.name,
    })))
}
