#![allow(dead_code)]

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use ip_gate_api::{create_api_routes, enforce_restrictions, AppState};
use ip_gate_application::{
    ports::GeoResolver,
    services::{DecisionCacheService, ResolutionEngine, RuleCacheService},
    use_cases::EvaluateRestrictionUseCase,
};
use ip_gate_domain::{
    config::HttpConfig, ClientAddress, GeoInfo, ScopePrecedence, StoreUnavailablePolicy,
};
use ip_gate_infrastructure::{
    cache::InMemoryKeyValueCache, repositories::SqliteRestrictionRepository,
};
use serde_json::Value;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceExt;

/// Fixed geolocation keyed by address prefix.
pub struct StaticGeoResolver {
    prefixes: Vec<(&'static str, GeoInfo)>,
}

impl StaticGeoResolver {
    pub fn new() -> Self {
        Self {
            prefixes: vec![
                ("81.2.", GeoInfo::new("DE", "EU")),
                ("8.8.8.", GeoInfo::new("US", "NA")),
                ("203.0.113.", GeoInfo::new("AU", "OC")),
            ],
        }
    }
}

impl GeoResolver for StaticGeoResolver {
    fn resolve(&self, address: &ClientAddress) -> GeoInfo {
        let Some(ip) = address.ip() else {
            return GeoInfo::empty();
        };
        let ip = ip.to_string();
        self.prefixes
            .iter()
            .find(|(prefix, _)| ip.starts_with(prefix))
            .map(|(_, geo)| geo.clone())
            .unwrap_or_default()
    }
}

pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(
        r#"
        CREATE TABLE restrictions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category TEXT NOT NULL,
            scope TEXT NOT NULL,
            value TEXT NOT NULL DEFAULT '',
            code INTEGER,
            state TEXT NOT NULL DEFAULT 'enabled'
        )
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

pub async fn insert_rule(
    pool: &SqlitePool,
    category: &str,
    scope: &str,
    value: &str,
    code: Option<i64>,
) {
    sqlx::query("INSERT INTO restrictions (category, scope, value, code) VALUES (?, ?, ?, ?)")
        .bind(category)
        .bind(scope)
        .bind(value)
        .bind(code)
        .execute(pool)
        .await
        .unwrap();
}

pub struct TestApp {
    pub state: AppState,
    pub cache: Arc<InMemoryKeyValueCache>,
}

pub struct TestAppBuilder {
    pool: SqlitePool,
    http: HttpConfig,
    policy: StoreUnavailablePolicy,
    precedence: ScopePrecedence,
    decision_cache: bool,
}

impl TestAppBuilder {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            http: HttpConfig::default(),
            policy: StoreUnavailablePolicy::FailClosed,
            precedence: ScopePrecedence::default(),
            decision_cache: true,
        }
    }

    pub fn http(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    pub fn policy(mut self, policy: StoreUnavailablePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn precedence(mut self, precedence: ScopePrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    pub fn without_decision_cache(mut self) -> Self {
        self.decision_cache = false;
        self
    }

    pub fn build(self) -> TestApp {
        let cache = Arc::new(InMemoryKeyValueCache::new(1_024));
        let repo = Arc::new(SqliteRestrictionRepository::new(self.pool));
        let geo = Arc::new(StaticGeoResolver::new());
        let rules = Arc::new(RuleCacheService::new(repo, cache.clone()));

        let mut evaluate =
            EvaluateRestrictionUseCase::new(geo, rules, ResolutionEngine::new(self.precedence));
        if self.decision_cache {
            evaluate =
                evaluate.with_decision_cache(Arc::new(DecisionCacheService::new(cache.clone())));
        }

        TestApp {
            state: AppState {
                evaluate: Arc::new(evaluate),
                http: Arc::new(self.http),
                on_store_unavailable: self.policy,
            },
            cache,
        }
    }
}

/// Site routes behind the restriction layer, plus the diagnostic API.
pub fn protected_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "home" }))
        .route("/login", get(|| async { "login" }).post(|| async { "logged in" }))
        .route("/status", get(|| async { "status" }))
        .nest("/api", create_api_routes(state.clone()))
        .layer(middleware::from_fn_with_state(state, enforce_restrictions))
}

pub fn api_only(state: AppState) -> Router {
    Router::new().nest("/api", create_api_routes(state))
}

pub async fn get_from(app: &Router, uri: &str, ip: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .header("X-Real-IP", ip)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_from_peer(app: &Router, uri: &str, peer: &str) -> (StatusCode, String) {
    let peer: SocketAddr = peer.parse().unwrap();
    let mut request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    request.extensions_mut().insert(ConnectInfo(peer));
    send(app, request).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}
