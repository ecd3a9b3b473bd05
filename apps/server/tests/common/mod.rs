#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    extract::{Query, State},
    http::{header, Method, Request, StatusCode},
    routing::get,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use coinfolio_server::{
    api::app_router,
    build_state,
    config::{Config, LogFormat},
};
use rand::{rngs::OsRng, RngCore};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

/// Local stand-in for the CoinGecko `simple/price` endpoint.
#[derive(Clone, Default)]
pub struct PriceStub {
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl PriceStub {
    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requested_ids(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn simple_price(
    State(stub): State<PriceStub>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let ids = params.get("ids").cloned().unwrap_or_default();
    stub.requests.lock().unwrap().push(ids.clone());

    let market = [("bitcoin", 50000.0), ("ethereum", 3000.0), ("iota", 0.25)];
    let vs = params
        .get("vs_currencies")
        .cloned()
        .unwrap_or_else(|| "usd".to_string());
    let mut body = serde_json::Map::new();
    for (id, price) in market {
        if ids.split(',').any(|requested| requested == id) {
            let mut quote = serde_json::Map::new();
            quote.insert(vs.clone(), json!(price));
            body.insert(id.to_string(), Value::Object(quote));
        }
    }
    Json(Value::Object(body))
}

async fn spawn_price_stub() -> (SocketAddr, PriceStub) {
    let stub = PriceStub::default();
    let app = Router::new()
        .route("/api/v3/simple/price", get(simple_price))
        .with_state(stub.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, stub)
}

pub struct TestApp {
    pub router: Router,
    pub prices: PriceStub,
    _db_dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let db_dir = tempfile::tempdir().unwrap();
    let (price_addr, prices) = spawn_price_stub().await;

    let mut secret_bytes = [0u8; 32];
    OsRng.fill_bytes(&mut secret_bytes);

    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: db_dir.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(10),
        secret_key: BASE64.encode(secret_bytes),
        access_token_ttl: Duration::from_secs(600),
        price_feed_url: format!("http://{}", price_addr),
        log_format: LogFormat::Text,
    };
    let state = build_state(&config).await.unwrap();

    TestApp {
        router: app_router(state, &config),
        prices,
        _db_dir: db_dir,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
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
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        TestResponse {
            status,
            content_type,
            body,
        }
    }

    pub async fn register(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({
                "username": username,
                "email": format!("{username}@example.com"),
                "password": password,
            })),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await
    }

    /// Registers `username` and returns a bearer token for it.
    pub async fn token_for(&self, username: &str) -> String {
        let password = "correct horse battery";
        assert_eq!(self.register(username, password).await.status, StatusCode::CREATED);
        let login = self.login(username, password).await;
        assert_eq!(login.status, StatusCode::OK);
        login.json()["accessToken"].as_str().unwrap().to_string()
    }

    pub async fn create_asset(
        &self,
        token: &str,
        label: &str,
        amount: f64,
        currency: &str,
    ) -> Value {
        let response = self
            .request(
                Method::POST,
                "/api/v1/assets",
                Some(token),
                Some(json!({ "label": label, "amount": amount, "currency": currency })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.json()
    }
}
