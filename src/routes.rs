// src/routes.rs

use axum::{
    Router, http::Method, middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{blogs, login, users},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (login, users, blogs).
/// * Applies global middleware (Trace, CORS).
/// * Guards identity-requiring routes with the auth middleware; read
///   paths on blogs and registration stay public.
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let login_routes = Router::new().route("/", post(login::login));

    let user_routes = Router::new()
        .route("/", post(users::register))
        // Listing and fetching users requires a valid identity
        .merge(
            Router::new()
                .route("/", get(users::list_users))
                .route("/{id}", get(users::get_user))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    let blog_routes = Router::new()
        .route("/", get(blogs::list_blogs))
        .route("/{id}", get(blogs::get_blog))
        // Mutating blog routes require a valid identity; ownership is
        // checked per-handler (delete only)
        .merge(
            Router::new()
                .route("/", post(blogs::create_blog))
                .route(
                    "/{id}",
                    axum::routing::put(blogs::update_blog).delete(blogs::delete_blog),
                )
                .route("/{id}/comments", post(blogs::add_comment))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    Router::new()
        .nest("/api/login", login_routes)
        .nest("/api/users", user_routes)
        .nest("/api/blogs", blog_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
