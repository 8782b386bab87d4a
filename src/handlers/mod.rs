// src/handlers/mod.rs

pub mod blogs;
pub mod login;
pub mod users;

use uuid::Uuid;

use crate::error::AppError;

/// Parses a path identifier, mapping malformed input to a 400 whose
/// message names the required shape (distinct from a true not-found).
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| {
        AppError::BadRequest(format!(
            "{} id must be a valid uuid string (32 hexadecimal digits)",
            entity
        ))
    })
}
