// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process mock of the ClientSure backend.

use axum::{
    extract::{FromRequest, Multipart, Path, Request, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use clientsure_client::config::Config;
use clientsure_client::controllers::{ChannelNotifier, Notice, Notifier};
use clientsure_client::session::AdminSession;
use clientsure_client::ClientSure;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc::UnboundedReceiver;

/// Id of the signed-in user.
pub const ME: &str = "me";
pub const ADMIN_PASSWORD: &str = "secret";

/// Shared mock state. Tests tweak it to script failures and delays.
#[derive(Clone, Default)]
pub struct MockBackend {
    pub posts: Arc<Mutex<Vec<Value>>>,
    pub leads: Arc<Mutex<Vec<Value>>>,
    pub accessed: Arc<Mutex<HashSet<String>>>,
    pub bulk_requests: Arc<Mutex<Vec<Vec<String>>>>,
    pub like_calls: Arc<AtomicUsize>,
    pub admin_calls: Arc<AtomicUsize>,
    /// Status to answer like/unlike with
    pub like_failure: Arc<Mutex<Option<u16>>>,
    /// Database detail sent in `error` next to a generic `message` when
    /// like/unlike fails
    pub like_error_detail: Arc<Mutex<Option<String>>>,
    /// Delay before like/unlike is processed
    pub like_delay: Arc<Mutex<Option<Duration>>>,
    /// Status to answer the community feed with
    pub feed_failure: Arc<Mutex<Option<u16>>>,
    pub bulk_failure: Arc<Mutex<Option<u16>>>,
    pub admin_token: Arc<Mutex<Option<String>>>,
    pub unread: Arc<AtomicUsize>,
    pub referral_lookups: Arc<Mutex<Vec<String>>>,
    /// Leave the checkout URL out of order responses
    pub no_checkout: Arc<Mutex<bool>>,
    pub resources: Arc<Mutex<Vec<Value>>>,
    pub social_accounts: Arc<Mutex<Vec<Value>>>,
    /// Bodies of write requests, keyed by "METHOD /path"
    pub requests: Arc<Mutex<Vec<(String, Value)>>>,
    next_id: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn set_posts(&self, posts: Vec<Value>) {
        *self.posts.lock().unwrap() = posts;
    }

    pub fn set_leads(&self, leads: Vec<Value>) {
        *self.leads.lock().unwrap() = leads;
    }

    pub fn set_resources(&self, resources: Vec<Value>) {
        *self.resources.lock().unwrap() = resources;
    }

    /// Bodies received on `route`, oldest first.
    pub fn requests_to(&self, route: &str) -> Vec<Value> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(r, _)| r == route)
            .map(|(_, body)| body.clone())
            .collect()
    }

    fn record(&self, route: impl Into<String>, body: Value) {
        self.requests.lock().unwrap().push((route.into(), body));
    }

    fn fresh_id(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn server_like_counts(&self) -> Vec<usize> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .map(|p| p["likes"].as_array().map_or(0, Vec::len))
            .collect()
    }
}

/// Post JSON as the backend sends it, liked by `likers`.
#[allow(dead_code)]
pub fn post_json(id: &str, likers: &[&str]) -> Value {
    let likes: Vec<Value> = likers.iter().map(|u| json!({ "user_id": u })).collect();
    json!({
        "_id": id,
        "user_id": { "_id": "author", "name": "Author" },
        "post_title": format!("Post {}", id),
        "description": "",
        "likes": likes,
        "comments": [],
        "createdAt": "2026-01-01T00:00:00Z",
    })
}

#[allow(dead_code)]
pub fn comment_json(id: &str, text: &str) -> Value {
    json!({
        "_id": id,
        "user_id": { "_id": ME, "name": "Me" },
        "text": text,
        "createdAt": "2026-01-01T00:00:00Z",
    })
}

#[allow(dead_code)]
pub fn resource_json(id: &str, title: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "type": "pdf",
        "description": "",
        "isActive": true,
    })
}

#[allow(dead_code)]
pub fn lead_json(id: &str, name: &str, email: &str) -> Value {
    json!({
        "_id": id,
        "leadId": format!("L-{}", id),
        "name": name,
        "email": email,
        "city": "Pune",
        "createdAt": "2026-03-10T12:00:00Z",
    })
}

/// Start the mock on an ephemeral port. Returns its base URL.
#[allow(dead_code)]
pub async fn spawn_backend(backend: MockBackend) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/profile", get(profile).put(update_profile))
        .route("/auth/reset-password/{token}", post(reset_password))
        .route("/auth/leads", get(list_leads))
        .route("/auth/get-accesse-leads/accessed", get(list_accessed))
        .route("/auth/leads/bulk-access", post(bulk_access))
        .route("/auth/leads/{id}/access", post(access_lead))
        .route("/community/posts", get(community_posts))
        .route("/community/trending", get(community_posts))
        .route("/community/leaderboard", get(leaderboard))
        .route("/community/stats", get(stats))
        .route("/community/like/{id}", post(like))
        .route("/community/unlike/{id}", post(unlike))
        .route("/community/post", post(create_post))
        .route("/community/post/{id}", delete(delete_post))
        .route(
            "/community/comment/{id}",
            post(add_comment).delete(delete_comment),
        )
        .route("/notifications/count", get(notification_count))
        .route("/notifications", get(notifications))
        .route("/notifications/mark-all-read", put(mark_all_read))
        .route("/referrals/validate/{code}", get(validate_referral))
        .route("/payments/create-order", post(create_order))
        .route(
            "/user/social-accounts",
            get(social_accounts).post(link_social_account),
        )
        .route("/user/social-accounts/{id}", delete(unlink_social_account))
        .route("/compose", post(compose))
        .route("/admin/login", post(admin_login))
        .route("/admin/users", get(admin_users))
        .route("/admin/leads", get(admin_leads))
        .route("/admin/leads/upload", post(admin_upload))
        .route("/admin/community/all", get(admin_community))
        .route("/admin/community/post/{id}", delete(admin_delete_post))
        .route(
            "/admin/resources",
            get(admin_resources).post(admin_create_resource),
        )
        .route(
            "/admin/resources/{id}",
            put(admin_update_resource).delete(admin_delete_resource),
        )
        .with_state(backend);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

/// A client pointed at `url`, with notices captured.
#[allow(dead_code)]
pub fn test_client(url: &str) -> (ClientSure, Arc<dyn Notifier>, UnboundedReceiver<Notice>) {
    test_client_with(Config::test_default(url))
}

#[allow(dead_code)]
pub fn test_client_with(
    config: Config,
) -> (ClientSure, Arc<dyn Notifier>, UnboundedReceiver<Notice>) {
    let client = ClientSure::with_session(config, AdminSession::ephemeral()).expect("client");
    let (notifier, rx) = ChannelNotifier::new();
    (client, Arc::new(notifier), rx)
}

/// Everything delivered so far.
#[allow(dead_code)]
pub fn drain(rx: &mut UnboundedReceiver<Notice>) -> Vec<Notice> {
    let mut notices = Vec::new();
    while let Ok(notice) = rx.try_recv() {
        notices.push(notice);
    }
    notices
}

/// Signed JWT the mock hands out on admin login.
#[allow(dead_code)]
pub fn admin_jwt(exp: i64) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &json!({ "sub": "admin", "exp": exp }),
        &jsonwebtoken::EncodingKey::from_secret(b"mock-secret"),
    )
    .expect("encode jwt")
}

fn error(status: u16, message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(json!({ "message": message })),
    )
}

/// Multipart form as JSON. Text fields map to strings, file fields to
/// `{ "file_name", "size" }`.
async fn multipart_json(mut multipart: Multipart) -> Value {
    let mut fields = serde_json::Map::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(String::from);
        let Ok(bytes) = field.bytes().await else {
            break;
        };
        let value = match file_name {
            Some(file_name) => json!({ "file_name": file_name, "size": bytes.len() }),
            None => json!(String::from_utf8_lossy(&bytes)),
        };
        fields.insert(name, value);
    }
    Value::Object(fields)
}

// ─── User endpoints ──────────────────────────────────────────────────────────

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["password"] == "wrong" {
        return error(401, "Invalid email or password");
    }
    (StatusCode::OK, Json(json!({ "message": "Login successful" })))
}

async fn profile() -> Json<Value> {
    Json(json!({
        "user": { "_id": ME, "name": "Me", "email": "me@example.com" },
        "tokens": { "daily": 8, "dailyLimit": 10, "dailyUsed": 2, "monthlyTotal": 300,
                    "monthlyUsed": 30, "monthlyRemaining": 270 },
        "subscription": { "isActive": true, "plan": { "_id": "p1", "name": "Pro", "price": 999 } },
    }))
}

fn leads_page(leads: Vec<Value>) -> Json<Value> {
    Json(json!({
        "leads": leads,
        "pagination": { "totalPages": 1, "totalItems": leads.len() },
    }))
}

async fn list_leads(State(backend): State<MockBackend>) -> Json<Value> {
    let accessed = backend.accessed.lock().unwrap().clone();
    let leads = backend
        .leads
        .lock()
        .unwrap()
        .iter()
        .map(|l| {
            let mut l = l.clone();
            let id = l["_id"].as_str().unwrap_or_default().to_string();
            l["isAccessedByUser"] = json!(accessed.contains(&id));
            l
        })
        .collect();
    leads_page(leads)
}

async fn list_accessed(State(backend): State<MockBackend>) -> Json<Value> {
    let accessed = backend.accessed.lock().unwrap().clone();
    let leads = backend
        .leads
        .lock()
        .unwrap()
        .iter()
        .filter(|l| accessed.contains(l["_id"].as_str().unwrap_or_default()))
        .map(|l| {
            let mut l = l.clone();
            l["isAccessedByUser"] = json!(true);
            l
        })
        .collect();
    leads_page(leads)
}

async fn access_lead(
    State(backend): State<MockBackend>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    backend.accessed.lock().unwrap().insert(id);
    (StatusCode::OK, Json(json!({ "message": "Lead accessed. 1 token used" })))
}

async fn bulk_access(
    State(backend): State<MockBackend>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let ids: Vec<String> = body["leadIds"]
        .as_array()
        .map(|ids| ids.iter().filter_map(|v| v.as_str().map(String::from)).collect())
        .unwrap_or_default();
    backend.bulk_requests.lock().unwrap().push(ids.clone());

    if let Some(status) = *backend.bulk_failure.lock().unwrap() {
        return (
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST),
            Json(json!({ "error": "Insufficient tokens" })),
        );
    }

    let count = ids.len();
    backend.accessed.lock().unwrap().extend(ids);
    (
        StatusCode::OK,
        Json(json!({ "message": format!("{} leads accessed", count) })),
    )
}

// ─── Community ───────────────────────────────────────────────────────────────

async fn community_posts(State(backend): State<MockBackend>) -> impl IntoResponse {
    if let Some(status) = *backend.feed_failure.lock().unwrap() {
        return error(status, "Community unavailable");
    }
    let posts = backend.posts.lock().unwrap().clone();
    (StatusCode::OK, Json(json!({ "posts": posts })))
}

async fn leaderboard() -> Json<Value> {
    Json(json!({ "leaderboard": [
        { "_id": "author", "name": "Author", "points": 12,
          "communityActivity": { "postsCreated": 2 } }
    ] }))
}

async fn stats() -> Json<Value> {
    Json(json!({ "totalPosts": 3 }))
}

async fn toggle_like(backend: MockBackend, id: String, like: bool) -> (StatusCode, Json<Value>) {
    backend.like_calls.fetch_add(1, Ordering::SeqCst);

    let delay = *backend.like_delay.lock().unwrap();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    if let Some(status) = *backend.like_failure.lock().unwrap() {
        let detail = backend.like_error_detail.lock().unwrap().clone();
        return match detail {
            Some(detail) => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(json!({ "message": "Server error", "error": detail })),
            ),
            None => error(status, "Database unavailable"),
        };
    }

    let mut posts = backend.posts.lock().unwrap();
    let Some(post) = posts.iter_mut().find(|p| p["_id"] == id.as_str()) else {
        return error(404, "Post not found");
    };
    let likes = post["likes"].as_array_mut().expect("likes array");
    if like {
        likes.push(json!({ "user_id": ME }));
    } else {
        likes.retain(|l| l["user_id"] != ME);
    }
    (StatusCode::OK, Json(json!({ "success": true })))
}

async fn like(State(backend): State<MockBackend>, Path(id): Path<String>) -> impl IntoResponse {
    toggle_like(backend, id, true).await
}

async fn unlike(State(backend): State<MockBackend>, Path(id): Path<String>) -> impl IntoResponse {
    toggle_like(backend, id, false).await
}

async fn create_post(
    State(backend): State<MockBackend>,
    multipart: Multipart,
) -> impl IntoResponse {
    let form = multipart_json(multipart).await;
    backend.record("POST /community/post", form.clone());

    let id = backend.fresh_id("new");
    let mut post = post_json(&id, &[]);
    post["user_id"] = json!({ "_id": ME, "name": "Me" });
    post["post_title"] = form["post_title"].clone();
    post["description"] = form["description"].clone();
    if let Some(name) = form["image"]["file_name"].as_str() {
        post["image"] = json!(format!("/uploads/{}", name));
    }
    backend.posts.lock().unwrap().insert(0, post);
    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Post created" })),
    )
}

async fn delete_post(State(backend): State<MockBackend>, Path(id): Path<String>) -> impl IntoResponse {
    backend.record(format!("DELETE /community/post/{}", id), Value::Null);
    let mut posts = backend.posts.lock().unwrap();
    let before = posts.len();
    posts.retain(|p| p["_id"] != id.as_str());
    if posts.len() == before {
        return error(404, "Post not found");
    }
    (StatusCode::OK, Json(json!({ "success": true })))
}

async fn add_comment(
    State(backend): State<MockBackend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    backend.record(format!("POST /community/comment/{}", id), body.clone());
    let comment_id = backend.fresh_id("c");
    let mut posts = backend.posts.lock().unwrap();
    let Some(post) = posts.iter_mut().find(|p| p["_id"] == id.as_str()) else {
        return error(404, "Post not found");
    };
    let text = body["text"].as_str().unwrap_or_default();
    post["comments"]
        .as_array_mut()
        .expect("comments array")
        .push(comment_json(&comment_id, text));
    (StatusCode::CREATED, Json(json!({ "success": true })))
}

async fn delete_comment(
    State(backend): State<MockBackend>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    backend.record(format!("DELETE /community/comment/{}", id), Value::Null);
    for post in backend.posts.lock().unwrap().iter_mut() {
        if let Some(comments) = post["comments"].as_array_mut() {
            comments.retain(|c| c["_id"] != id.as_str());
        }
    }
    (StatusCode::OK, Json(json!({ "success": true })))
}

// ─── Account ─────────────────────────────────────────────────────────────────

async fn update_profile(
    State(backend): State<MockBackend>,
    multipart: Multipart,
) -> impl IntoResponse {
    let form = multipart_json(multipart).await;
    backend.record("PUT /auth/profile", form);
    Json(json!({ "message": "Profile updated successfully" }))
}

async fn reset_password(
    State(backend): State<MockBackend>,
    Path(token): Path<String>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    backend.record(format!("POST /auth/reset-password/{}", token), body);
    if token == "expired" {
        return error(400, "Invalid or expired reset token");
    }
    (
        StatusCode::OK,
        Json(json!({ "message": "Password reset successful" })),
    )
}

async fn compose(State(backend): State<MockBackend>, Json(body): Json<Value>) -> Json<Value> {
    let words = body["details"]["content"]
        .as_str()
        .map_or(0, |c| c.split_whitespace().count());
    backend.record("POST /compose", body);
    Json(json!({ "text": format!("Draft from {} words", words) }))
}

async fn social_accounts(State(backend): State<MockBackend>) -> Json<Value> {
    let accounts = backend.social_accounts.lock().unwrap().clone();
    Json(json!({ "accounts": accounts }))
}

async fn link_social_account(
    State(backend): State<MockBackend>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    backend.record("POST /user/social-accounts", body.clone());
    let mut account = body;
    account["_id"] = json!(backend.fresh_id("s"));
    backend.social_accounts.lock().unwrap().push(account);
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Account linked" })),
    )
}

async fn unlink_social_account(
    State(backend): State<MockBackend>,
    Path(id): Path<String>,
) -> Json<Value> {
    backend
        .social_accounts
        .lock()
        .unwrap()
        .retain(|a| a["_id"] != id.as_str());
    Json(json!({ "message": "Account removed" }))
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

async fn notification_count(State(backend): State<MockBackend>) -> Json<Value> {
    Json(json!({ "count": backend.unread.load(Ordering::SeqCst) }))
}

async fn notifications(State(backend): State<MockBackend>) -> Json<Value> {
    let read = backend.unread.load(Ordering::SeqCst) == 0;
    Json(json!({ "notifications": [
        { "_id": "n1", "message": "Asha liked your post", "type": "like",
          "isRead": read, "createdAt": "2026-01-01T00:00:00Z" },
    ] }))
}

async fn mark_all_read(State(backend): State<MockBackend>) -> Json<Value> {
    backend.unread.store(0, Ordering::SeqCst);
    Json(json!({ "success": true }))
}

async fn validate_referral(
    State(backend): State<MockBackend>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    backend.referral_lookups.lock().unwrap().push(code.clone());
    if code == "FRIEND01" {
        (
            StatusCode::OK,
            Json(json!({ "valid": true, "referrer": { "name": "Asha" } })),
        )
    } else {
        error(404, "Invalid referral code")
    }
}

async fn create_order(
    State(backend): State<MockBackend>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if *backend.no_checkout.lock().unwrap() {
        return (StatusCode::OK, Json(json!({ "paymentPayload": {} })));
    }
    let referral = body["referralCode"].as_str().unwrap_or("none").to_string();
    (
        StatusCode::OK,
        Json(json!({ "paymentPayload": {
            "checkoutUrl": format!("https://pay.example.com/checkout?ref={}", referral)
        } })),
    )
}

// ─── Admin ───────────────────────────────────────────────────────────────────

fn admin_authorized(backend: &MockBackend, headers: &HeaderMap) -> bool {
    backend.admin_calls.fetch_add(1, Ordering::SeqCst);
    let expected = backend.admin_token.lock().unwrap().clone();
    let presented = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    matches!((expected, presented), (Some(e), Some(p)) if e == p)
}

async fn admin_login(
    State(backend): State<MockBackend>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if body["password"] != ADMIN_PASSWORD {
        return error(401, "Invalid credentials");
    }
    let token = admin_jwt(chrono::Utc::now().timestamp() + 3600);
    *backend.admin_token.lock().unwrap() = Some(token.clone());
    (StatusCode::OK, Json(json!({ "token": token })))
}

async fn admin_users(State(backend): State<MockBackend>, headers: HeaderMap) -> impl IntoResponse {
    if !admin_authorized(&backend, &headers) {
        return error(401, "No token provided");
    }
    (
        StatusCode::OK,
        Json(json!([
            { "_id": "u1", "name": "Asha", "email": "asha@x.com",
              "subscription": { "planId": { "_id": "p1", "name": "Pro" } },
              "createdAt": chrono::Utc::now().to_rfc3339() },
            { "_id": "u2", "name": "Ravi", "email": "ravi@x.com",
              "createdAt": "2020-01-01T00:00:00Z" },
        ])),
    )
}

async fn admin_leads(State(backend): State<MockBackend>, headers: HeaderMap) -> impl IntoResponse {
    if !admin_authorized(&backend, &headers) {
        return error(401, "No token provided");
    }
    let leads = backend.leads.lock().unwrap().clone();
    let count = leads.len();
    (
        StatusCode::OK,
        Json(json!({
            "leads": leads,
            "pagination": { "totalPages": 1, "totalItems": count },
        })),
    )
}

async fn admin_upload(
    State(backend): State<MockBackend>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> impl IntoResponse {
    if !admin_authorized(&backend, &headers) {
        return error(401, "No token provided");
    }
    let mut name = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            name = field.file_name().map(String::from);
        }
    }
    match name {
        Some(name) => (
            StatusCode::OK,
            Json(json!({ "message": format!("Imported {}", name) })),
        ),
        None => error(400, "No file uploaded"),
    }
}

async fn admin_community(
    State(backend): State<MockBackend>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !admin_authorized(&backend, &headers) {
        return error(401, "No token provided");
    }
    let posts = backend.posts.lock().unwrap().clone();
    // Nested envelope, as older backend builds send it
    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": { "posts": posts } })),
    )
}

async fn admin_delete_post(
    State(backend): State<MockBackend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if !admin_authorized(&backend, &headers) {
        return error(401, "No token provided");
    }
    backend
        .posts
        .lock()
        .unwrap()
        .retain(|p| p["_id"] != id.as_str());
    (StatusCode::OK, Json(json!({ "success": true })))
}

async fn admin_resources(
    State(backend): State<MockBackend>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !admin_authorized(&backend, &headers) {
        return error(401, "No token provided");
    }
    let resources = backend.resources.lock().unwrap().clone();
    (StatusCode::OK, Json(Value::Array(resources)))
}

async fn admin_create_resource(
    State(backend): State<MockBackend>,
    headers: HeaderMap,
    multipart: Multipart,
) -> impl IntoResponse {
    if !admin_authorized(&backend, &headers) {
        return error(401, "No token provided");
    }
    let form = multipart_json(multipart).await;
    backend.record("POST /admin/resources", form.clone());
    if !form["file"].is_object() {
        return error(400, "File is required");
    }

    let mut resource = resource_json(&backend.fresh_id("r"), form["title"].as_str().unwrap_or_default());
    resource["description"] = form["description"].clone();
    resource["type"] = form["type"].clone();
    backend.resources.lock().unwrap().push(resource);
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Resource created successfully" })),
    )
}

/// Takes a JSON edit or a multipart file replacement, like the backend.
async fn admin_update_resource(
    State(backend): State<MockBackend>,
    headers: HeaderMap,
    Path(id): Path<String>,
    request: Request,
) -> impl IntoResponse {
    if !admin_authorized(&backend, &headers) {
        return error(401, "No token provided");
    }
    let is_multipart = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/"));
    let body = if is_multipart {
        match Multipart::from_request(request, &()).await {
            Ok(multipart) => multipart_json(multipart).await,
            Err(_) => return error(400, "Malformed form"),
        }
    } else {
        match axum::body::to_bytes(request.into_body(), usize::MAX).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or(Value::Null),
            Err(_) => return error(400, "Malformed body"),
        }
    };
    backend.record(format!("PUT /admin/resources/{}", id), body.clone());

    let mut resources = backend.resources.lock().unwrap();
    let Some(resource) = resources.iter_mut().find(|r| r["_id"] == id.as_str()) else {
        return error(404, "Resource not found");
    };
    if let Some(fields) = body.as_object() {
        for (key, value) in fields {
            if key != "file" {
                resource[key] = value.clone();
            }
        }
    }
    (
        StatusCode::OK,
        Json(json!({ "message": "Resource updated successfully" })),
    )
}

async fn admin_delete_resource(
    State(backend): State<MockBackend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if !admin_authorized(&backend, &headers) {
        return error(401, "No token provided");
    }
    backend
        .resources
        .lock()
        .unwrap()
        .retain(|r| r["_id"] != id.as_str());
    (
        StatusCode::OK,
        Json(json!({ "message": "Resource deleted successfully" })),
    )
}
