// src/handlers/blogs.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::blog::{BlogPayload, BlogResponse, CreateCommentRequest, NewBlog},
    store::Store,
    utils::jwt::Claims,
};

use super::parse_id;

/// Pulls the mandatory fields out of a create/update payload.
fn required_fields(payload: &BlogPayload) -> Result<(String, String, String), AppError> {
    let field = |value: &Option<String>, name: &str| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::BadRequest(format!("{} is required", name)))
    };

    Ok((
        field(&payload.title, "title")?,
        field(&payload.author, "author")?,
        field(&payload.url, "url")?,
    ))
}

fn checked_likes(likes: i64) -> Result<i64, AppError> {
    if likes < 0 {
        return Err(AppError::BadRequest("likes must not be negative".to_string()));
    }
    Ok(likes)
}

/// Lists all blogs with their owner summaries populated. Public.
pub async fn list_blogs(State(store): State<Store>) -> Result<impl IntoResponse, AppError> {
    let blogs = store.blogs.list().await?;
    let users = store.users.list().await?;

    let views: Vec<BlogResponse> = blogs
        .iter()
        .map(|blog| {
            let owner = users.iter().find(|u| u.id == blog.user_id);
            BlogResponse::from_blog(blog, owner)
        })
        .collect();

    Ok(Json(views))
}

/// Fetches a single blog by id. Public.
pub async fn get_blog(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "blog")?;

    let blog = store
        .blogs
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("blog not found".to_string()))?;

    let owner = store.users.find_by_id(blog.user_id).await?;

    Ok(Json(BlogResponse::from_blog(&blog, owner.as_ref())))
}

/// Creates a blog owned by the authenticated caller.
///
/// Likes default to 0 when omitted. The owner's owned-blog set is updated
/// after the blog write; the blog create/delete handlers are the only
/// writers of that set.
pub async fn create_blog(
    State(store): State<Store>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<BlogPayload>,
) -> Result<impl IntoResponse, AppError> {
    let (title, author, url) = required_fields(&payload)?;
    let likes = checked_likes(payload.likes.unwrap_or(0))?;

    let mut user = store
        .users
        .find_by_id(claims.id)
        .await?
        .ok_or(AppError::InvalidToken("invalid token".to_string()))?;

    let blog = store
        .blogs
        .create(NewBlog {
            title,
            author,
            url,
            likes,
            user_id: user.id,
        })
        .await?;

    user.blogs.push(blog.id);
    store.users.save(user.clone()).await?;

    tracing::info!("user {} created blog {}", user.username, blog.id);

    Ok((
        StatusCode::CREATED,
        Json(BlogResponse::from_blog(&blog, Some(&user))),
    ))
}

/// Updates a blog's fields. Requires a valid identity but deliberately no
/// ownership comparison; any authenticated caller may update any blog.
/// Omitted likes keep the stored value.
pub async fn update_blog(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(payload): Json<BlogPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "blog")?;
    let (title, author, url) = required_fields(&payload)?;

    let mut blog = store
        .blogs
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("blog not found".to_string()))?;

    blog.title = title;
    blog.author = author;
    blog.url = url;
    if let Some(likes) = payload.likes {
        blog.likes = checked_likes(likes)?;
    }

    store.blogs.save(blog.clone()).await?;

    let owner = store.users.find_by_id(blog.user_id).await?;

    Ok(Json(BlogResponse::from_blog(&blog, owner.as_ref())))
}

/// Deletes a blog. Only its owner may delete it; a recognized identity
/// that is not the owner gets `Unauthorized`, distinct from the
/// invalid-token case. Not-found is checked before ownership.
pub async fn delete_blog(
    State(store): State<Store>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "blog")?;

    let blog = store
        .blogs
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("blog not found".to_string()))?;

    if blog.user_id != claims.id {
        return Err(AppError::Unauthorized("unauthorized".to_string()));
    }

    store.blogs.delete(id).await?;

    if let Some(mut owner) = store.users.find_by_id(blog.user_id).await? {
        owner.blogs.retain(|blog_id| *blog_id != id);
        store.users.save(owner).await?;
    }

    tracing::info!("user {} deleted blog {}", claims.username, id);

    Ok(StatusCode::NO_CONTENT)
}

/// Appends a comment to a blog. Requires a valid identity, no ownership
/// comparison; the comment list is append-only.
pub async fn add_comment(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "blog")?;

    let comment = match payload.comment {
        Some(c) if !c.trim().is_empty() => c,
        _ => return Err(AppError::BadRequest("comment is required".to_string())),
    };

    let mut blog = store
        .blogs
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("blog not found".to_string()))?;

    blog.comments.push(comment);
    store.blogs.save(blog.clone()).await?;

    let owner = store.users.find_by_id(blog.user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(BlogResponse::from_blog(&blog, owner.as_ref())),
    ))
}
