//! Error handling integration tests
//!
//! Errors raised anywhere in the route table reach the client as a status
//! code plus a JSON error body.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;
    use batch_gateway::core::batch::{BatchParseError, parse_bytes};
    use batch_gateway::utils::error::GatewayError;

    #[test]
    fn test_batch_parse_errors_are_bad_requests() {
        let parse_err = parse_bytes(br#"{"requests":[{"method":"get"}]}"#).unwrap_err();
        assert_eq!(parse_err, BatchParseError::MissingUri { index: 0 });

        let gateway_err: GatewayError = parse_err.into();
        assert!(matches!(gateway_err, GatewayError::BadRequest(_)));
        assert_eq!(gateway_err.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_routing_errors() {
        assert_eq!(
            GatewayError::not_found("No route for GET /x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GatewayError::method_not_allowed("PATCH is not supported on /users").status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_timeout_maps_to_gateway_timeout() {
        let err = GatewayError::timeout("Sub-request timed out after 5s");
        assert_eq!(err.status_code(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = GatewayError::internal("lock poisoned at storage/memory.rs");
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
