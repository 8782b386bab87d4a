// tests/user_api_tests.rs

use bloglist_backend::{config::Config, routes, state::AppState, store::Store};

/// Spawns the app with a fresh in-memory store on a random port.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app() -> String {
    let config = Config {
        jwt_secret: "test_secret_for_integration_tests".to_string(),
        port: 0,
        rust_log: "error".to_string(),
    };

    let state = AppState {
        store: Store::in_memory(),
        config,
    };

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn register(
    client: &reqwest::Client,
    address: &str,
    username: &str,
    password: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/api/users", address))
        .json(&serde_json::json!({
            "username": username,
            "name": "Test User",
            "password": password
        }))
        .send()
        .await
        .expect("Failed to execute request")
}

async fn login_token(client: &reqwest::Client, address: &str, username: &str, password: &str) -> String {
    let body: serde_json::Value = client
        .post(format!("{}/api/login", address))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Login failed")
        .json()
        .await
        .expect("Failed to parse login json");

    body["token"].as_str().expect("Token not found").to_string()
}

#[tokio::test]
async fn register_succeeds_with_valid_data() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = register(&client, &address, "newuser", "secret").await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["username"], "newuser");
    assert_eq!(body["name"], "Test User");
    assert_eq!(body["blogs"].as_array().unwrap().len(), 0);
    assert!(body["id"].as_str().is_some());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn register_fails_if_username_taken() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let first = register(&client, &address, "testuser", "secret").await;
    assert_eq!(first.status().as_u16(), 201);

    let second = register(&client, &address, "testuser", "othersecret").await;
    assert_eq!(second.status().as_u16(), 400);
    let body: serde_json::Value = second.json().await.unwrap();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("`username` to be unique")
    );

    // Exactly one user was created
    let token = login_token(&client, &address, "testuser", "secret").await;
    let users: serde_json::Value = client
        .get(format!("{}/api/users", address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn register_fails_with_short_password() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = register(&client, &address, "newuser", "se").await;
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("password must be at least 3 characters")
    );

    // The failed attempt created nothing
    register(&client, &address, "counter", "secret").await;
    let token = login_token(&client, &address, "counter", "secret").await;
    let users: serde_json::Value = client
        .get(format!("{}/api/users", address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn register_fails_with_short_username() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = register(&client, &address, "ne", "secret").await;
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("is shorter than the minimum allowed length")
    );
}

#[tokio::test]
async fn login_returns_token_for_valid_credentials() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    register(&client, &address, "loginuser", "secret").await;

    let response = client
        .post(format!("{}/api/login", address))
        .json(&serde_json::json!({ "username": "loginuser", "password": "secret" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["username"], "loginuser");
}

#[tokio::test]
async fn any_registrable_credentials_can_log_in() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Registration puts no upper bound on credential lengths, so login
    // must not reject them by shape either
    let long_username = "a".repeat(60);
    let long_password = "p".repeat(200);

    let created = register(&client, &address, &long_username, &long_password).await;
    assert_eq!(created.status().as_u16(), 201);

    let response = client
        .post(format!("{}/api/login", address))
        .json(&serde_json::json!({
            "username": long_username,
            "password": long_password
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["token"].as_str().is_some());
}

#[tokio::test]
async fn login_fails_with_wrong_password() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    register(&client, &address, "loginuser", "secret").await;

    let response = client
        .post(format!("{}/api/login", address))
        .json(&serde_json::json!({ "username": "loginuser", "password": "wrong" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "invalid username or password");
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn login_fails_identically_for_unknown_username() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/login", address))
        .json(&serde_json::json!({ "username": "nobody", "password": "secret" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "invalid username or password");
}

#[tokio::test]
async fn listing_users_requires_a_token() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/users", address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "invalid token");
}

#[tokio::test]
async fn user_views_populate_owned_blogs() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    register(&client, &address, "blogowner", "secret").await;
    let token = login_token(&client, &address, "blogowner", "secret").await;

    client
        .post(format!("{}/api/blogs", address))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "title": "Owned Blog",
            "author": "Author A",
            "url": "http://some.url"
        }))
        .send()
        .await
        .unwrap();

    let users: serde_json::Value = client
        .get(format!("{}/api/users", address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let user = &users.as_array().unwrap()[0];
    let summaries = user["blogs"].as_array().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0]["title"], "Owned Blog");
    assert_eq!(summaries[0]["author"], "Author A");
    assert_eq!(summaries[0]["url"], "http://some.url");

    // Fetch by id returns the same populated view
    let user_id = user["id"].as_str().unwrap();
    let single: serde_json::Value = client
        .get(format!("{}/api/users/{}", address, user_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(single["blogs"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn fetching_user_with_malformed_id_fails_with_shape_message() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    register(&client, &address, "someuser", "secret").await;
    let token = login_token(&client, &address, "someuser", "secret").await;

    let response = client
        .get(format!("{}/api/users/not-a-uuid", address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("uuid"));
}

#[tokio::test]
async fn fetching_unknown_user_fails_with_not_found() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    register(&client, &address, "someuser", "secret").await;
    let token = login_token(&client, &address, "someuser", "secret").await;

    let response = client
        .get(format!(
            "{}/api/users/{}",
            address,
            uuid::Uuid::new_v4()
        ))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "user not found");
}
