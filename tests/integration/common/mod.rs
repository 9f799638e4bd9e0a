//! Common test utilities and fixtures for integration tests
//!
//! This module provides shared infrastructure for all integration tests including:
//! - The composed application over an in-memory account store
//! - Request helpers that drive the router with `oneshot`
//! - Account fixtures for every role
//! - Session cookie helpers

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use marketplace_accounts::{Account, MemoryAccountStore};
use marketplace_auth::{AuthConfig, Role, TokenCodec, SESSION_COOKIE};
use marketplace_common::hash_password;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only";

pub const TEST_PASSWORD: &str = "password123";

/// Response captured from a single request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// Value of the `authToken` cookie set by this response, if any
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(&format!("{}=", SESSION_COOKIE)))
            .map(str::to_string)
    }
}

/// Test application over an in-memory store
pub struct TestApp {
    pub router: Router,
    pub store: MemoryAccountStore,
    pub codec: TokenCodec,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_secret(Some(TEST_JWT_SECRET))
    }

    pub fn with_secret(secret: Option<&str>) -> Self {
        let auth_config = AuthConfig::new(secret.map(str::to_string));
        let store = MemoryAccountStore::new();
        let router = marketplace_app::create_app(&auth_config, Arc::new(store.clone()));

        Self {
            router,
            store,
            codec: TokenCodec::new(&auth_config),
        }
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("{}={}", SESSION_COOKIE, token));
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
        let body = response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, path, token, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, None, Some(body)).await
    }

    /// Sign a consumer up through the API and return its session token
    pub async fn signup_consumer(&self, phone: &str) -> String {
        let response = self
            .post(
                "/api/user/signup",
                json!({
                    "phone_number": phone,
                    "password": TEST_PASSWORD,
                    "name": format!("Consumer {}", phone),
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.json());
        token_of(&response)
    }

    pub async fn signup_worker(&self, phone: &str) -> String {
        let response = self
            .post(
                "/api/partner/signup",
                json!({
                    "phone_number": phone,
                    "password": TEST_PASSWORD,
                    "name": format!("Worker {}", phone),
                    "driving_license": format!("DL-{}", phone),
                    "vehicle_number": "KA05MN4321",
                    "vehicle_rc": format!("RC-{}", phone),
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.json());
        token_of(&response)
    }

    pub async fn signup_shop_admin(&self, phone: &str, shop_name: &str) -> String {
        let response = self
            .post(
                "/api/shopAdmin/signup",
                json!({
                    "phone_number": phone,
                    "password": TEST_PASSWORD,
                    "name": format!("Shop admin {}", phone),
                    "shop_name": shop_name,
                    "shop_address": "7 Station Road",
                    "shop_type": "restaurant",
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.json());
        token_of(&response)
    }

    /// Seed an admin account (admins have no signup route) and return its token
    pub async fn seed_admin(&self) -> (Account, String) {
        let account = Account {
            id: Uuid::new_v4(),
            phone_number: format!("9{}", &Uuid::new_v4().simple().to_string()[..9]),
            name: "Admin".to_string(),
            hashed_password: hash_password(TEST_PASSWORD).unwrap(),
            role: Role::Admin,
            created_at: Utc::now(),
        };
        self.store.insert_account(account.clone()).await.unwrap();

        let token = self.codec.encode(&account.identity()).unwrap();
        (account, token)
    }
}

pub fn token_of(response: &TestResponse) -> String {
    response.json()["token"]
        .as_str()
        .expect("response should carry a token")
        .to_string()
}
