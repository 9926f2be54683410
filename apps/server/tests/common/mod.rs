#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use expense_insight_server::{
    api::app_router,
    build_state,
    config::{random_secret, Config, Environment},
};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

pub const PASSWORD: &str = "secret123";

pub struct TestApp {
    router: Router,
    _dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempdir().unwrap();
        let config = Config {
            listen_addr: "127.0.0.1:0".parse().unwrap(),
            db_path: dir.path().join("test.db").to_string_lossy().into_owned(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
            environment: Environment::Development,
            jwt_secret: random_secret(),
            jwt_ttl: Duration::from_secs(3600),
        };
        let state = build_state(&config).await.unwrap();
        TestApp {
            router: app_router(state, &config),
            _dir: dir,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: &str) -> TestResponse {
        self.request(Method::GET, uri, Some(token), None).await
    }

    /// Registers a user and returns the issued token.
    pub async fn register(&self, name: &str, email: &str) -> String {
        let res = self
            .request(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({ "name": name, "email": email, "password": PASSWORD })),
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
        res.body["data"]["token"].as_str().unwrap().to_string()
    }

    pub async fn create_expense(
        &self,
        token: &str,
        title: &str,
        category: &str,
        amount: f64,
        date: &str,
    ) -> Value {
        let res = self
            .request(
                Method::POST,
                "/api/expenses",
                Some(token),
                Some(json!({
                    "title": title,
                    "category": category,
                    "amount": amount,
                    "date": date,
                })),
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
        res.body["data"].clone()
    }
}
