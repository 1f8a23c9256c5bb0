//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

use ticket_api::{config::DEFAULT_CORS_ORIGIN, create_router, db};

/// Router over a fresh in-memory database with the schema in place.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        // A single connection that never expires, otherwise the in-memory database is lost
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");

        db::init_schema(&pool).await.expect("failed to create schema");

        let router = create_router(pool.clone(), HeaderValue::from_static(DEFAULT_CORS_ORIGIN));

        Self { router, pool }
    }

    pub async fn seed_user(&self, id: i64, name: &str) {
        sqlx::query("INSERT INTO users (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await
            .expect("failed to seed user");
    }

    pub async fn seed_ticket(&self, id: i64, problem: &str, done: bool, user_id: i64) {
        sqlx::query("INSERT INTO tickets (id, problem, done, user_id) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(problem)
            .bind(done)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .expect("failed to seed ticket");
    }

    /// Send a request and return the status with the raw body.
    pub async fn send_raw(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("failed to make request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();

        (status, bytes.to_vec())
    }

    /// Send a request and decode the JSON response body.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.send_raw(method, uri, body).await;
        let json = serde_json::from_slice(&bytes).expect("response should be valid JSON");
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }
}

/// Ids found in a JSON array of rows.
pub fn ids(rows: &Value) -> Vec<i64> {
    rows.as_array()
        .expect("expected a JSON array")
        .iter()
        .filter_map(|row| row["id"].as_i64())
        .collect()
}
