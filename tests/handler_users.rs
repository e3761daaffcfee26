mod common;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use user_management::api::routes::user_routes;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .nest("/api/v1", user_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

fn ayla() -> Value {
    json!({
        "name": "Ayla",
        "email": "ayla@test.com",
        "phoneNumber": "5012345",
        "phonePrefix": "_050"
    })
}

// ─── POST (create) ───────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_user_returns_201_with_defaulted_role(pool: PgPool) {
    let server = make_server(pool);

    let response = server.post("/api/v1/users").json(&ayla()).await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["name"], "Ayla");
    assert_eq!(body["email"], "ayla@test.com");
    assert_eq!(body["phoneNumber"], "5012345");
    assert_eq!(body["phonePrefix"], "_050");
    assert_eq!(body["role"], "USER");
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[sqlx::test]
async fn test_create_user_with_explicit_role(pool: PgPool) {
    let server = make_server(pool);

    let mut payload = ayla();
    payload["role"] = json!("ADMIN");
    let response = server.post("/api/v1/users").json(&payload).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["role"], "ADMIN");
}

#[sqlx::test]
async fn test_create_user_duplicate_email_conflict(pool: PgPool) {
    let server = make_server(pool);

    server
        .post("/api/v1/users")
        .json(&ayla())
        .await
        .assert_status(StatusCode::CREATED);

    // Same email, different remaining fields.
    let response = server
        .post("/api/v1/users")
        .json(&json!({
            "name": "Leyla",
            "email": "ayla@test.com",
            "phoneNumber": "7012345",
            "phonePrefix": "_070"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");
}

#[sqlx::test]
async fn test_create_user_blank_fields_report_together(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/v1/users")
        .json(&json!({
            "name": "",
            "email": "",
            "phoneNumber": "",
            "phonePrefix": "_050"
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    let details = &body["error"]["details"];
    assert!(details["name"].is_array());
    assert!(details["email"].is_array());
    assert!(details["phone_number"].is_array());
}

#[sqlx::test]
async fn test_create_user_malformed_email(pool: PgPool) {
    let server = make_server(pool);

    let mut payload = ayla();
    payload["email"] = json!("not-an-email");
    let response = server.post("/api/v1/users").json(&payload).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_user_long_top_level_label_rejected(pool: PgPool) {
    // Passes the transport-level email check but not the stricter
    // create-side pattern, which caps the final label at 4 characters.
    let server = make_server(pool);

    let mut payload = ayla();
    payload["email"] = json!("ayla@test.technology");
    let response = server.post("/api/v1/users").json(&payload).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_user_unknown_prefix_rejected(pool: PgPool) {
    let server = make_server(pool);

    let mut payload = ayla();
    payload["phonePrefix"] = json!("_042");
    let response = server.post("/api/v1/users").json(&payload).await;

    response.assert_status_bad_request();
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_user_round_trip(pool: PgPool) {
    let server = make_server(pool);

    let created = server.post("/api/v1/users").json(&ayla()).await;
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    let response = server.get(&format!("/api/v1/users/{id}")).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Ayla");
    assert_eq!(body["email"], "ayla@test.com");
    assert_eq!(body["phonePrefix"], "_050");
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[sqlx::test]
async fn test_get_user_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/v1/users/9999").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_list_users(pool: PgPool) {
    common::seed_user(&pool, "Ayla", "a@test.com").await;
    common::seed_user(&pool, "Leyla", "b@test.com").await;
    let server = make_server(pool);

    let response = server.get("/api/v1/users").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|u| u["email"] == "a@test.com"));
    assert!(users.iter().any(|u| u["email"] == "b@test.com"));
}

#[sqlx::test]
async fn test_list_users_empty(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/v1/users").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

// ─── PUT (update) ────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_user_overwrites_fields(pool: PgPool) {
    let server = make_server(pool);

    let created = server.post("/api/v1/users").json(&ayla()).await;
    let created = created.json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/v1/users/{id}"))
        .json(&json!({
            "name": "Aysel",
            "email": "aysel@test.com",
            "phoneNumber": "7012345",
            "phonePrefix": "_070",
            "role": "ADMIN"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["name"], "Aysel");
    assert_eq!(body["email"], "aysel@test.com");
    assert_eq!(body["phoneNumber"], "7012345");
    assert_eq!(body["phonePrefix"], "_070");
    assert_eq!(body["role"], "ADMIN");
    assert_eq!(body["createdAt"], created["createdAt"]);
    assert_ne!(body["updatedAt"], created["updatedAt"]);
}

#[sqlx::test]
async fn test_update_user_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.put("/api/v1/users/9999").json(&ayla()).await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_update_user_own_email_succeeds(pool: PgPool) {
    let server = make_server(pool);

    let created = server.post("/api/v1/users").json(&ayla()).await;
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    // Same email as the stored row: the self-match is excluded from the
    // duplicate check.
    let mut payload = ayla();
    payload["name"] = json!("Renamed");
    let response = server.put(&format!("/api/v1/users/{id}")).json(&payload).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Renamed");
}

#[sqlx::test]
async fn test_update_user_to_taken_email_conflict(pool: PgPool) {
    let target_id = common::seed_user(&pool, "Ayla", "ayla@test.com").await;
    common::seed_user(&pool, "Leyla", "leyla@test.com").await;
    let server = make_server(pool.clone());

    let response = server
        .put(&format!("/api/v1/users/{target_id}"))
        .json(&json!({
            "name": "Ayla",
            "email": "leyla@test.com",
            "phoneNumber": "5012345",
            "phonePrefix": "_050"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    // The target row is left unmodified.
    let unchanged: String =
        sqlx::query_scalar("SELECT email FROM users WHERE id = $1")
            .bind(target_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(unchanged, "ayla@test.com");
}

#[sqlx::test]
async fn test_update_user_skips_create_side_email_pattern(pool: PgPool) {
    // The same address is rejected by create (final label longer than 4
    // characters) but accepted by update.
    let server = make_server(pool);

    let created = server.post("/api/v1/users").json(&ayla()).await;
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    let mut payload = ayla();
    payload["email"] = json!("ayla@test.technology");
    let response = server.put(&format!("/api/v1/users/{id}")).json(&payload).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["email"], "ayla@test.technology");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_user_then_get_returns_404(pool: PgPool) {
    let server = make_server(pool);

    let created = server.post("/api/v1/users").json(&ayla()).await;
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    let response = server.delete(&format!("/api/v1/users/{id}")).await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    server
        .get(&format!("/api/v1/users/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_user_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.delete("/api/v1/users/9999").await;

    response.assert_status_not_found();
}
