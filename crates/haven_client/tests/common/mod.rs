//! In-process mock of the dashboard backend.

#![allow(dead_code)]

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use haven_client::{ApiClient, ClientConfig};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

pub const SLOW_DELAY: Duration = Duration::from_secs(5);

/// Serve `router` on an ephemeral port; returns the `/api` base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

/// Base URL of a port nothing listens on.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

pub fn client_for(base_url: &str) -> ApiClient {
    client_with_token(base_url, None)
}

pub fn client_with_token(base_url: &str, token: Option<&str>) -> ApiClient {
    ApiClient::new(ClientConfig {
        base_url: base_url.to_string(),
        auth_token: token.map(str::to_string),
        timeout_secs: 10,
        ..ClientConfig::default()
    })
    .unwrap()
}

pub async fn spawn_backend() -> ApiClient {
    client_for(&spawn(backend()).await)
}

fn ok(message: Option<&str>, data: Value) -> Json<Value> {
    match message {
        Some(message) => Json(json!({"status": "success", "message": message, "data": data})),
        None => Json(json!({"status": "success", "data": data})),
    }
}

fn fail(code: StatusCode, body: Value) -> (StatusCode, Json<Value>) {
    (code, Json(body))
}

pub fn categories() -> Value {
    json!([
        {"id": "c1", "name": "Anxiety"},
        {"id": "c2", "name": "Sleep"}
    ])
}

pub fn articles() -> Value {
    json!([
        {"id": "a1", "title": "Box breathing", "body": "Inhale for four.", "categoryId": "c1",
         "author": "Dr. Lind", "createdAt": "2026-02-10T09:00:00Z"},
        {"id": "a2", "title": "Wind-down routine", "body": "Dim the lights.", "categoryId": "c2",
         "createdAt": "2026-02-11T21:30:00Z"}
    ])
}

fn messages() -> Vec<Value> {
    vec![
        json!({"id": "m1", "groupId": "g1", "alias": "river", "body": "hi all",
               "sentAt": "2026-03-01T10:00:00Z"}),
        json!({"id": "m2", "groupId": "g1", "alias": "stone", "body": "welcome",
               "sentAt": "2026-03-01T10:05:00Z"}),
    ]
}

#[derive(Deserialize)]
struct ArticleQuery {
    category: Option<String>,
}

#[derive(Deserialize)]
struct SinceQuery {
    since: Option<chrono::DateTime<chrono::Utc>>,
}

pub fn backend() -> Router {
    let api = Router::new()
        .route("/categories", get(|| async { ok(Some("ok"), categories()) }))
        .route(
            "/articles",
            get(|Query(q): Query<ArticleQuery>| async move {
                let all = articles();
                let filtered: Vec<Value> = all
                    .as_array()
                    .unwrap()
                    .iter()
                    .filter(|a| q.category.as_deref().map_or(true, |c| a["categoryId"] == c))
                    .cloned()
                    .collect();
                ok(None, Value::Array(filtered))
            })
            .post(|Json(body): Json<Value>| async move {
                if body["title"].as_str().unwrap_or("").is_empty() {
                    return fail(
                        StatusCode::UNPROCESSABLE_ENTITY,
                        json!({"message": "Validation failed", "error": "title required"}),
                    )
                    .into_response();
                }
                let created = json!({
                    "id": "a3",
                    "title": body["title"],
                    "body": body["body"],
                    "categoryId": body["categoryId"],
                    "createdAt": "2026-03-02T08:00:00Z"
                });
                (StatusCode::CREATED, ok(Some("Article created"), created)).into_response()
            }),
        )
        .route(
            "/articles/:id",
            get(|Path(id): Path<String>| async move {
                match articles()
                    .as_array()
                    .unwrap()
                    .iter()
                    .find(|a| a["id"] == id.as_str())
                {
                    Some(a) => ok(Some("ok"), a.clone()).into_response(),
                    None => fail(StatusCode::NOT_FOUND, json!({"error": "not found"}))
                        .into_response(),
                }
            })
            .delete(|Path(_id): Path<String>| async move {
                Json(json!({"status": "success", "message": "deleted"}))
            }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(SLOW_DELAY).await;
                ok(Some("late"), json!(null))
            }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        )
        .route(
            "/malformed",
            get(|| async { (StatusCode::OK, "<html>not json</html>") }),
        )
        .route(
            "/whoami",
            get(|headers: HeaderMap| async move {
                let header = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string)
                };
                ok(
                    None,
                    json!({
                        "authorization": header("authorization"),
                        "requestId": header("x-request-id"),
                    }),
                )
            }),
        )
        .route(
            "/chat/groups",
            get(|| async {
                ok(
                    None,
                    json!([
                        {"id": "g1", "name": "Evening circle", "topic": "Sleep", "memberCount": 12},
                        {"id": "g2", "name": "Open room", "memberCount": 3}
                    ]),
                )
            }),
        )
        .route(
            "/chat/groups/:id/join",
            post(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                let alias = body["alias"].as_str().unwrap_or("").to_string();
                if alias == "stone" {
                    return fail(
                        StatusCode::CONFLICT,
                        json!({"status": "conflict", "message": "alias taken"}),
                    )
                    .into_response();
                }
                ok(Some("joined"), json!({"groupId": id, "alias": alias})).into_response()
            }),
        )
        .route(
            "/chat/groups/:id/leave",
            post(|Path(_id): Path<String>| async { ok(Some("left"), json!({})) }),
        )
        .route(
            "/chat/groups/:id/messages",
            get(|Path(id): Path<String>, Query(q): Query<SinceQuery>| async move {
                let list: Vec<Value> = messages()
                    .into_iter()
                    .filter(|m| m["groupId"] == id.as_str())
                    .filter(|m| match q.since {
                        Some(since) => {
                            let sent: chrono::DateTime<chrono::Utc> =
                                m["sentAt"].as_str().unwrap().parse().unwrap();
                            sent > since
                        }
                        None => true,
                    })
                    .collect();
                ok(None, Value::Array(list))
            })
            .post(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                ok(
                    Some("sent"),
                    json!({
                        "id": "m3",
                        "groupId": id,
                        "alias": body["alias"],
                        "body": body["body"],
                        "sentAt": "2026-03-01T11:00:00Z"
                    }),
                )
            }),
        )
        .route(
            "/therapists/:id/schedule",
            get(|Path(id): Path<String>| async move {
                if id != "th-1" {
                    return fail(StatusCode::NOT_FOUND, json!({"message": "therapist unknown"}))
                        .into_response();
                }
                ok(
                    None,
                    json!({
                        "therapistId": "th-1",
                        "timezone": "Europe/Oslo",
                        "slots": [
                            {"weekday": "Mon", "start": "09:00", "end": "12:00"},
                            {"weekday": "Wed", "start": "13:00", "end": "16:30"}
                        ]
                    }),
                )
                .into_response()
            })
            .put(|Path(_id): Path<String>, Json(body): Json<Value>| async move {
                ok(Some("schedule saved"), body)
            }),
        )
        .route(
            "/therapists/:id/schedule/slots/:index",
            delete(|Path((_id, index)): Path<(String, usize)>| async move {
                if index > 1 {
                    return fail(StatusCode::NOT_FOUND, json!({"error": "no such slot"}))
                        .into_response();
                }
                StatusCode::NO_CONTENT.into_response()
            }),
        );

    Router::new().nest("/api", api)
}
