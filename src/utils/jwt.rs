// src/utils/jwt.rs

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::AppError, models::user::User, state::AppState};

/// JWT Claims structure.
///
/// Tokens carry only the identity; authorization is resolved by comparing
/// the identity against resource ownership, not by token claims. There is
/// no `exp`: tokens stay valid until the signing secret changes.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Claims {
    /// Username at issue time.
    pub username: String,
    /// User ID.
    pub id: Uuid,
    /// Issue time as Unix timestamp.
    pub iat: i64,
}

/// Signs a new identity token for the user.
pub fn sign_jwt(user: &User, secret: &str) -> Result<String, AppError> {
    let claims = Claims {
        username: user.username.clone(),
        id: user.id,
        iat: chrono::Utc::now().timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// Verifies and decodes a token string.
///
/// Any failure (malformed, bad signature, undecodable) collapses to the
/// same `InvalidToken` error. Expiry validation is disabled and `exp` is
/// not required, since tokens are unexpiring by design.
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims = Default::default();

    let token_data = decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AppError::InvalidToken("invalid token".to_string()))?;

    Ok(token_data.claims)
}

/// Axum Middleware: Authentication.
///
/// Intercepts requests, validates the 'Authorization: Bearer <token>' header.
/// If valid, injects `Claims` into the request extensions for handlers to use.
/// A missing header and a garbage token fail the same way.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => return Err(AppError::InvalidToken("invalid token".to_string())),
    };

    let claims = verify_jwt(token, &state.config.jwt_secret)?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
