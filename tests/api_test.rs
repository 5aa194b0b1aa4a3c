//! HTTP API integration tests
//!
//! Drives the full router with `tower::ServiceExt::oneshot`.

#[macro_use]
mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::TestApp;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_category_then_post_lifecycle() {
    let app = TestApp::new();

    let (status, body) = app.post("/api/categories", json!({ "name": "Tech" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Tech" }));

    let (status, body) = app
        .post("/api/posts", json!({ "title": "Hello World", "content": "Body" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "slug": "hello-world" }));

    // Drafts are reachable by slug
    let (status, body) = app.get("/api/posts/hello-world").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "Body");
    assert_eq!(body["views"], 0);
    assert_eq!(body["is_published"], false);

    // ...but not listed
    let (_, body) = app.get("/api/posts").await;
    assert_eq!(body, json!({ "posts": [] }));

    let (status, body) = app.post("/api/posts/1/publish", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "published" }));

    let (_, body) = app.get("/api/posts").await;
    assert_eq!(
        body,
        json!({ "posts": [{ "id": 1, "title": "Hello World", "slug": "hello-world" }] })
    );
}

#[tokio::test]
async fn test_create_post_validation() {
    let app = TestApp::new();

    let (status, body) = app.post("/api/posts", json!({ "title": "No body" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_contains!(body["error"].as_str().unwrap(), "content");

    let (status, _) = app
        .post("/api/posts", json!({ "title": "", "content": "Body" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_bodies_are_bad_requests() {
    let app = TestApp::new();

    let (status, _) = app
        .send_request(
            Request::builder()
                .method("POST")
                .uri("/api/categories")
                .header("content-type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Missing content type would be 415 by default
    let (status, _) = app
        .send_request(
            Request::builder()
                .method("POST")
                .uri("/api/categories")
                .body(Body::from(r#"{"name":"Tech"}"#))
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Wrong field type would be 422 by default
    let (status, _) = app.post("/api/posts", json!({ "title": 5, "content": "x" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_partial_update_preserves_other_fields() {
    let app = TestApp::new();
    app.post(
        "/api/posts",
        json!({ "title": "Original", "content": "Body", "tags": ["a", "b"] }),
    )
    .await;

    let (status, body) = app.put("/api/posts/1", json!({ "content": "Edited" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "updated", "id": 1 }));

    let (_, post) = app.get("/api/posts/original").await;
    assert_eq!(post["title"], "Original");
    assert_eq!(post["content"], "Edited");
    assert_eq!(post["tags"], json!(["a", "b"]));

    app.put("/api/posts/1", json!({ "tags": ["c"] })).await;
    let (_, post) = app.get("/api/posts/original").await;
    assert_eq!(post["tags"], json!(["c"]));

    let (status, _) = app.put("/api/posts/9", json!({ "content": "x" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_post() {
    let app = TestApp::new();
    app.post("/api/posts", json!({ "title": "Short Lived", "content": "Body" }))
        .await;

    let (status, body) = app.delete("/api/posts/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "deleted" }));

    let (status, _) = app.get("/api/posts/short-lived").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/api/posts/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The id is not handed out again
    let (_, body) = app
        .post("/api/posts", json!({ "title": "Next", "content": "Body" }))
        .await;
    assert_eq!(body["id"], 2);
}

#[tokio::test]
async fn test_publish_missing_post() {
    let app = TestApp::new();
    let (status, body) = app.post("/api/posts/4/publish", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_duplicate_titles_share_a_slug() {
    let app = TestApp::new();
    let (_, first) = app
        .post("/api/posts", json!({ "title": "Same", "content": "one" }))
        .await;
    let (_, second) = app
        .post("/api/posts", json!({ "title": "Same", "content": "two" }))
        .await;
    assert_eq!(first["slug"], second["slug"]);

    let (_, post) = app.get("/api/posts/same").await;
    assert_eq!(post["content"], "one");
}

#[tokio::test]
async fn test_comments() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/posts/7/comments", json!({ "content": "First!" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "post_id": 7 }));

    let (_, body) = app.get("/api/posts/7/comments").await;
    assert_eq!(
        body,
        json!({ "comments": [{ "id": 1, "user_id": 1, "content": "First!" }] })
    );

    let (_, body) = app.get("/api/posts/8/comments").await;
    assert_eq!(body, json!({ "comments": [] }));

    let (status, _) = app.post("/api/posts/7/comments", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_and_profile() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/auth/register",
            json!({ "email": "writer@example.com", "password": "pw" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "registered", "userId": 1 }));

    let (status, body) = app.get("/api/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "username": "user", "role": "author", "bio": "" })
    );

    let (status, body) = app.put("/api/users/1", json!({ "bio": "Hi" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "updated" }));

    let (_, body) = app.get("/api/users/1").await;
    assert_eq!(body["bio"], "Hi");

    let (status, _) = app.get("/api/users/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.put("/api/users/2", json!({ "bio": "x" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_update_without_body() {
    let app = TestApp::new();

    let (status, _) = app.send("PUT", "/api/users/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.post(
        "/api/auth/register",
        json!({ "email": "writer@example.com", "password": "pw" }),
    )
    .await;
    app.put("/api/users/1", json!({ "bio": "Kept" })).await;

    let (status, body) = app.send("PUT", "/api/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "updated" }));

    let (_, body) = app.get("/api/users/1").await;
    assert_eq!(body["bio"], "Kept");
}

#[tokio::test]
async fn test_register_accepts_missing_fields() {
    let app = TestApp::new();

    let (status, body) = app.post("/api/auth/register", json!({ "password": "p" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "registered", "userId": 1 }));

    let (status, body) = app.post("/api/auth/register", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], 2);

    let (status, _) = app
        .send_request(
            Request::builder()
                .method("POST")
                .uri("/api/auth/register")
                .header("content-type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.lock().await.users.len(), 2);
}

#[tokio::test]
async fn test_auth_stubs_ignore_input() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/auth/login", json!({ "email": "nobody", "password": "wrong" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "token": "fake-jwt-token-123" }));

    let (_, body) = app.send("POST", "/api/auth/login", None).await;
    assert_eq!(body["token"], "fake-jwt-token-123");

    let (status, body) = app.get("/api/auth/me").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "role": "admin" }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_contiguous_ids() {
    const N: usize = 64;
    let app = TestApp::new();

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..N {
        let router = app.router.clone();
        tasks.spawn(async move {
            use tower::util::ServiceExt;
            let request = Request::builder()
                .method("POST")
                .uri("/api/posts")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "title": format!("Post {i}"), "content": "Body" }).to_string(),
                ))
                .unwrap();
            let response = router.oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            body["id"].as_u64().unwrap()
        });
    }

    let mut returned = Vec::with_capacity(N);
    while let Some(result) = tasks.join_next().await {
        returned.push(result.unwrap());
    }
    returned.sort_unstable();
    let expected: Vec<u64> = (1..=N as u64).collect();
    assert_eq!(returned, expected);

    let store = app.store.lock().await;
    let mut stored: Vec<u64> = store.posts.iter().map(|p| p.id).collect();
    stored.sort_unstable();
    assert_eq!(stored, expected);
}
