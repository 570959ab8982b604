//! Test fixtures
//!
//! Every fixture builds real objects backed by a fresh in-memory store.

use actix_web::http::header::AUTHORIZATION;
use actix_web::test::TestRequest;
use batch_gateway::config::Config;
use batch_gateway::core::router::AppRouter;
use batch_gateway::server::AppState;
use batch_gateway::server::routes;
use serde_json::{Value, json};

/// Token configured on every fixture gateway
pub const TEST_TOKEN: &str = "integration-test-token";

/// Configuration with the test token
pub fn config() -> Config {
    let mut config = Config::default();
    config.gateway.auth.token = Some(TEST_TOKEN.to_string());
    config
}

/// Route table over a fresh store
pub fn router() -> AppRouter<AppState> {
    router_with(config())
}

/// Route table over a fresh store with custom configuration
pub fn router_with(config: Config) -> AppRouter<AppState> {
    routes::app_router(AppState::in_memory(config))
}

/// Authorized request with a JSON body
pub fn authorized_json(method: actix_web::http::Method, uri: &str, body: Value) -> TestRequest {
    TestRequest::default()
        .method(method)
        .uri(uri)
        .insert_header((AUTHORIZATION, TEST_TOKEN))
        .set_json(body)
}

/// Authorized `POST` with a JSON body
pub fn authorized_post(uri: &str, body: Value) -> TestRequest {
    authorized_json(actix_web::http::Method::POST, uri, body)
}

/// Authorized `GET`
pub fn authorized_get(uri: &str) -> TestRequest {
    TestRequest::get()
        .uri(uri)
        .insert_header((AUTHORIZATION, TEST_TOKEN))
}

/// Authorized `POST /batch` of `(method, uri, values)` descriptors
pub fn batch_request(requests: &[(&str, &str, Option<Value>)]) -> TestRequest {
    let requests: Vec<Value> = requests
        .iter()
        .map(|(method, uri, values)| match values {
            Some(values) => json!({ "method": method, "uri": uri, "values": values }),
            None => json!({ "method": method, "uri": uri }),
        })
        .collect();

    authorized_post("/batch", json!({ "requests": requests }))
}
