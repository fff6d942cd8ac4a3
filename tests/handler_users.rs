mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use user_service::api::routes::user_routes;

fn make_server() -> (TestServer, std::sync::Arc<common::InMemoryUserRepository>) {
    let (state, repo) = common::create_test_state();
    let app = user_routes().with_state(state);
    (TestServer::new(app).unwrap(), repo)
}

// ─── GET EMAIL ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_email_found() {
    let (server, repo) = make_server();
    common::seed_user(&repo, "Alice", "alice@example.com").await;

    let response = server
        .get("/users/get-email")
        .add_query_param("email", "alice@example.com")
        .await;

    response.assert_status_ok();
    response.assert_text("alice@example.com");
}

#[tokio::test]
async fn test_get_email_not_found() {
    let (server, _repo) = make_server();

    let response = server
        .get("/users/get-email")
        .add_query_param("email", "ghost@example.com")
        .await;

    response.assert_status_ok();
    response.assert_text("Email not found");
}

#[tokio::test]
async fn test_get_email_is_exact_match() {
    let (server, repo) = make_server();
    common::seed_user(&repo, "Alice", "alice@example.com").await;

    let response = server
        .get("/users/get-email")
        .add_query_param("email", "ALICE@example.com")
        .await;

    response.assert_text("Email not found");
}

#[tokio::test]
async fn test_get_email_missing_param() {
    let (server, _repo) = make_server();

    let response = server.get("/users/get-email").await;

    response.assert_status_bad_request();
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_user_success() {
    let (server, repo) = make_server();

    let response = server
        .post("/users")
        .json(&json!({ "name": "A", "email": "a@x.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert!(body["id"].is_i64());
    assert_eq!(body["name"], "A");
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_create_user_ignores_client_id() {
    let (server, repo) = make_server();
    let existing = common::seed_user(&repo, "First", "first@x.com").await;

    let response = server
        .post("/users")
        .json(&json!({ "id": existing.id, "name": "A", "email": "a@x.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_ne!(body["id"], existing.id);
    assert_eq!(repo.get(existing.id).unwrap().name, "First");
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn test_create_user_allows_duplicate_email() {
    let (server, _repo) = make_server();

    for _ in 0..2 {
        server
            .post("/users")
            .json(&json!({ "name": "A", "email": "same@x.com" }))
            .await
            .assert_status_ok();
    }
}

#[tokio::test]
async fn test_create_user_missing_field() {
    let (server, repo) = make_server();

    let response = server.post("/users").json(&json!({ "name": "A" })).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(repo.len(), 0);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_user_success() {
    let (server, repo) = make_server();
    let user = common::seed_user(&repo, "A", "a@x.com").await;

    let response = server
        .put(&format!("/users/{}", user.id))
        .json(&json!({ "name": "B", "email": "b@x.com" }))
        .await;

    response.assert_status_ok();
    response.assert_text("User updated successfully");

    server
        .get("/users/get-email")
        .add_query_param("email", "b@x.com")
        .await
        .assert_text("b@x.com");
    server
        .get("/users/get-email")
        .add_query_param("email", "a@x.com")
        .await
        .assert_text("Email not found");

    let stored = repo.get(user.id).unwrap();
    assert_eq!(stored.name, "B");
    assert_eq!(stored.id, user.id);
}

#[tokio::test]
async fn test_update_user_not_found() {
    let (server, repo) = make_server();
    let user = common::seed_user(&repo, "A", "a@x.com").await;

    let response = server
        .put("/users/9999")
        .json(&json!({ "name": "B", "email": "b@x.com" }))
        .await;

    response.assert_status_ok();
    response.assert_text("User not found");

    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get(user.id).unwrap().email, "a@x.com");
}

#[tokio::test]
async fn test_update_user_invalid_id() {
    let (server, _repo) = make_server();

    let response = server
        .put("/users/abc")
        .json(&json!({ "name": "B", "email": "b@x.com" }))
        .await;

    response.assert_status_bad_request();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_user_success() {
    let (server, repo) = make_server();
    let user = common::seed_user(&repo, "A", "a@x.com").await;

    let response = server.delete(&format!("/users/{}", user.id)).await;

    response.assert_status_ok();
    response.assert_text("User deleted successfully");

    assert!(repo.get(user.id).is_none());
    server
        .get("/users/get-email")
        .add_query_param("email", "a@x.com")
        .await
        .assert_text("Email not found");
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let (server, _repo) = make_server();

    let response = server.delete("/users/9999").await;

    response.assert_status_ok();
    response.assert_text("User not found");
}

#[tokio::test]
async fn test_delete_user_twice() {
    let (server, repo) = make_server();
    let user = common::seed_user(&repo, "A", "a@x.com").await;
    let path = format!("/users/{}", user.id);

    server
        .delete(&path)
        .await
        .assert_text("User deleted successfully");

    for _ in 0..3 {
        let response = server.delete(&path).await;
        response.assert_status_ok();
        response.assert_text("User not found");
    }
}

// ─── STORE FAILURES ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_store_failure_returns_internal_error() {
    let (server, repo) = make_server();
    repo.set_unreachable();

    let response = server.delete("/users/1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "internal_error");
}
