//! Authentication and request ID integration tests

#[cfg(test)]
mod tests {
    use crate::common::TEST_TOKEN;
    use crate::common::fixtures::{config, router, router_with};
    use actix_web::http::StatusCode;
    use actix_web::http::header::AUTHORIZATION;
    use actix_web::test;
    use batch_gateway::HttpServer;
    use batch_gateway::utils::error::ErrorResponse;
    use serde_json::json;

    #[actix_web::test]
    async fn test_protected_routes_require_token() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        for uri in ["/users", "/logs", "/info", "/does-not-exist"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{uri}");
        }

        let req = test::TestRequest::post()
            .uri("/batch")
            .insert_header((AUTHORIZATION, format!("Bearer {TEST_TOKEN}")))
            .set_json(json!({ "requests": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "UNAUTHORIZED");
        assert!(body.error.message.contains("The auth token was incorrect"));
    }

    #[actix_web::test]
    async fn test_health_is_public() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], json!("healthy"));
    }

    #[actix_web::test]
    async fn test_no_token_disables_auth() {
        let mut config = config();
        config.gateway.auth.token = None;
        let app = test::init_service(HttpServer::create_app(router_with(config))).await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_request_id_round_trip() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header(("x-request-id", "trace-42"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-42");

        // Rejected requests are tagged too
        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(resp.headers().contains_key("x-request-id"));
    }

    #[actix_web::test]
    async fn test_server_header() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get("server").unwrap(), "batch-gateway");
    }
}
