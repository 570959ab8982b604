//! Batch endpoint integration tests
//!
//! Sub-requests travel through the same route table as external requests,
//! so these tests observe their side effects through ordinary requests.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{
        authorized_get, authorized_post, batch_request, config, router, router_with,
    };
    use actix_web::http::StatusCode;
    use actix_web::test;
    use batch_gateway::HttpServer;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_plain_text_sub_response() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = batch_request(&[("get", "/info", None)]).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let responses = body["responses"].as_array().unwrap();
        assert_eq!(responses.len(), 1);
        assert!(responses[0].as_str().unwrap().starts_with("GET /info\n"));
    }

    #[actix_web::test]
    async fn test_create_then_list() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = batch_request(&[
            (
                "post",
                "/users",
                Some(json!({ "device_id": "abc", "email": "abc@example.com" })),
            ),
            ("get", "/users", None),
        ])
        .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let created = json!({ "device_id": "abc", "email": "abc@example.com", "token": null });
        assert_eq!(body, json!({ "responses": [created.clone(), [created]] }));
    }

    #[actix_web::test]
    async fn test_failing_sub_request_fails_batch() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = batch_request(&[
            ("post", "/users", Some(json!({ "device_id": "abc" }))),
            ("get", "/nonexistent", None),
            ("post", "/users", Some(json!({ "device_id": "never" }))),
        ])
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("responses").is_none());
        assert_eq!(body["error"]["code"], json!("NOT_FOUND"));

        // Earlier side effects stay, later sub-requests never ran
        let req = authorized_get("/users").to_request();
        let users: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(users.as_array().unwrap().len(), 1);
        assert_eq!(users[0]["device_id"], json!("abc"));
    }

    #[actix_web::test]
    async fn test_malformed_batch_is_rejected() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        for body in [
            json!({ "requests": "not-an-array" }),
            json!({ "requests": [{ "uri": "/x" }] }),
            json!({ "requests": [{ "method": "get" }] }),
            json!({}),
        ] {
            let req = authorized_post("/batch", body).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert!(body.get("responses").is_none());
            assert_eq!(body["error"]["code"], json!("BAD_REQUEST"));
        }
    }

    #[actix_web::test]
    async fn test_missing_requests_array_message() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = authorized_post("/batch", json!({ "reqs": [] })).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(
            body["error"]["message"]
                .as_str()
                .unwrap()
                .ends_with("JSON does not have a requests array.")
        );
    }

    #[actix_web::test]
    async fn test_empty_batch() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = batch_request(&[]).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "responses": [] }));
    }

    #[actix_web::test]
    async fn test_methods_are_case_insensitive() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = batch_request(&[
            ("PoSt", "/users", Some(json!({ "device_id": "abc" }))),
            ("GET", "/users/abc", None),
            ("delete", "/users/abc", None),
        ])
        .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["responses"][1]["device_id"], json!("abc"));
        // An empty reply normalizes to null
        assert_eq!(body["responses"][2], Value::Null);
    }

    #[actix_web::test]
    async fn test_absolute_targets_are_routed_in_process() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = batch_request(&[
            ("get", "http://localhost:8080/health", None),
            ("get", "localhost:8080/users?page=1", None),
        ])
        .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["responses"][0]["status"], json!("healthy"));
        assert_eq!(body["responses"][1], json!([]));
    }

    #[actix_web::test]
    async fn test_nested_batch() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let inner = json!({ "requests": [{ "method": "post", "uri": "/notification" }] });
        let req = batch_request(&[("post", "/batch", Some(inner))]).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({ "responses": [{ "responses": ["No token available"] }] })
        );
    }

    #[actix_web::test]
    async fn test_concurrent_batch_preserves_order() {
        let mut config = config();
        config.gateway.batch.concurrency = 8;
        let app = test::init_service(HttpServer::create_app(router_with(config))).await;

        let values: Vec<Value> = (0..20)
            .map(|i| json!({ "device_id": format!("device-{i}") }))
            .collect();
        let descriptors: Vec<(&str, &str, Option<Value>)> = values
            .iter()
            .map(|values| ("post", "/users", Some(values.clone())))
            .collect();

        let req = batch_request(&descriptors).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<&str> = body["responses"]
            .as_array()
            .unwrap()
            .iter()
            .map(|user| user["device_id"].as_str().unwrap())
            .collect();
        let expected: Vec<String> = (0..20).map(|i| format!("device-{i}")).collect();
        assert_eq!(ids, expected);
    }

    #[actix_web::test]
    async fn test_batch_size_limit() {
        let mut config = config();
        config.gateway.batch.max_requests = Some(2);
        let app = test::init_service(HttpServer::create_app(router_with(config))).await;

        let req = batch_request(&[
            ("post", "/users", Some(json!({ "device_id": "a" }))),
            ("post", "/users", Some(json!({ "device_id": "b" }))),
            ("post", "/users", Some(json!({ "device_id": "c" }))),
        ])
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = authorized_get("/users").to_request();
        let users: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(users, json!([]));
    }
}
