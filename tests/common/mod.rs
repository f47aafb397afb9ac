//! Shared harness: the full router over an in-memory SQLite database and an in-memory mailer.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use planetary_api::{app, apply_migrations, connect, seed, AppState, MemoryMailer, TokenService};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;

pub const SEED_EMAIL: &str = "test@gmail.com";
pub const SEED_PASSWORD: &str = "P@ssw0rd";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub mailer: MemoryMailer,
    pub tokens: TokenService,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = connect("sqlite::memory:").await.expect("connect");
        apply_migrations(&pool).await.expect("migrate");
        let mailer = MemoryMailer::new();
        let tokens = TokenService::new(b"integration-secret", 3600, 900);
        let state = AppState {
            pool: pool.clone(),
            tokens: tokens.clone(),
            mailer: Arc::new(mailer.clone()),
            reset_ttl_secs: 900,
        };
        TestApp {
            router: app(state),
            pool,
            mailer,
            tokens,
        }
    }

    pub async fn seeded() -> Self {
        let app = Self::new().await;
        seed(&app.pool).await.expect("seed");
        app
    }

    /// Send a request; body parsed as JSON when possible, otherwise returned as a JSON string.
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.router.clone().oneshot(req).await.expect("router is infallible");
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).expect("request");
        self.send(req).await
    }

    /// Url-encoded form body. Values must not need percent-encoding.
    pub async fn form(
        &self,
        method: Method,
        uri: &str,
        fields: &[(&str, &str)],
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(body)).expect("request")).await
    }

    pub async fn json(&self, method: Method, uri: &str, body: Value, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(body.to_string())).expect("request")).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::DELETE).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).expect("request")).await
    }

    /// Register (ignoring conflicts) and log in; returns the access token.
    pub async fn login_as(&self, email: &str, password: &str) -> String {
        self.form(
            Method::POST,
            "/register",
            &[
                ("email", email),
                ("first_name", "Caroline"),
                ("last_name", "Herschel"),
                ("password", password),
            ],
            None,
        )
        .await;
        let (status, body) = self
            .json(
                Method::POST,
                "/login",
                serde_json::json!({ "email": email, "password": password }),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["access_token"].as_str().expect("token").to_string()
    }

    pub async fn planet_count(&self) -> usize {
        let (_, body) = self.get("/planets/list").await;
        body["data"].as_array().map(Vec::len).unwrap_or(0)
    }
}

pub fn planet_fields<'a>(name: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("planet_name", name),
        ("planet_type", "Class M"),
        ("home_star", "Sol"),
        ("mass", "5.972e24"),
        ("radius", "3959"),
        ("distance", "92.96e6"),
    ]
}
