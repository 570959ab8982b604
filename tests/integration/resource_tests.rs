//! User and log resource integration tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{authorized_get, authorized_json, authorized_post, router};
    use actix_web::http::header::AUTHORIZATION;
    use actix_web::http::{Method, StatusCode};
    use actix_web::test;
    use batch_gateway::HttpServer;
    use batch_gateway::storage::{DEVICE_ID_CONFLICT, TOKEN_CONFLICT};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_user_create_conflicts_are_plain_text() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = authorized_post("/users", json!({ "device_id": "d1", "token": "t1" })).to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user, json!({ "device_id": "d1", "email": null, "token": "t1" }));

        let req = authorized_post("/users", json!({ "device_id": "d2", "token": "t1" })).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, TOKEN_CONFLICT.as_bytes());

        let req = authorized_post("/users", json!({ "device_id": "d1" })).to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, DEVICE_ID_CONFLICT.as_bytes());
    }

    #[actix_web::test]
    async fn test_user_update_replace_delete() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = authorized_post("/users", json!({ "device_id": "d1", "email": "old@example.com" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = authorized_json(Method::PATCH, "/users/d1", json!({ "email": "new@example.com" }))
            .to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user["email"], json!("new@example.com"));

        let req = authorized_json(
            Method::PUT,
            "/users/d1",
            json!({ "device_id": "d1", "token": "push" }),
        )
        .to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user, json!({ "device_id": "d1", "email": null, "token": "push" }));

        let req = test::TestRequest::delete()
            .uri("/users/d1")
            .insert_header((AUTHORIZATION, crate::common::TEST_TOKEN))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = authorized_get("/users/d1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_patch_unknown_user() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = authorized_json(Method::PATCH, "/users/ghost", json!({ "email": "x@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_log_upload_and_listing() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = authorized_post("/users", json!({ "device_id": "d1" })).to_request();
        test::call_service(&app, req).await;

        let req = authorized_post(
            "/logs",
            json!({
                "device_id": "d1",
                "session": "s-1",
                "vc": "42",
                "event": "launch",
                "action": "tap",
                "desc": "first launch",
                "timestamp": "2024-05-01T12:00:00+0200"
            }),
        )
        .to_request();
        let log: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(log["timestamp"], json!("2024-05-01T12:00:00+0200"));
        assert_eq!(log["desc"], json!("first launch"));
        assert!(log["log_id"].as_str().is_some());

        // Unparseable timestamps are replaced, not rejected
        let req = authorized_post("/logs", json!({ "device_id": "d1", "timestamp": "soon" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = authorized_get("/logs/d1").to_request();
        let logs: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(logs.as_array().unwrap().len(), 2);

        let req = authorized_get("/logs/ghost").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_info_describes_request() {
        let app = test::init_service(HttpServer::create_app(router())).await;

        let req = authorized_get("/info?x=1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.starts_with("GET /info?x=1\n"));
        assert!(text.contains("authorization: "));
    }
}
