//! HTTP response building module
//!
//! Builders for the fixed set of responses this service produces,
//! decoupled from handler logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::logger;

/// Build a JSON response with the given status
pub fn build_json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response body: {e}"));
            return build_500_response();
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a JSON error response with a single "error" message field
pub fn build_error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    build_json_response(status, &serde_json::json!({ "error": message }))
}

/// Build 200 OK plain-text response for the readiness probe
pub fn build_ok_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("OK")))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::from("OK")))
        })
}

/// Build 400 Bad Request response for requests without a target
pub fn build_400_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(400)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Bad Request")))
        .unwrap_or_else(|e| {
            log_build_error("400", &e);
            Response::new(Full::new(Bytes::from("Bad Request")))
        })
}

/// Build 404 Not Found response for unmatched targets
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("Not Found")))
        })
}

/// Build 500 Internal Server Error response; the cause is only logged
/// server-side, never echoed to the client
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(r#"{"error":"Internal server error"}"#)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from(r#"{"error":"Internal server error"}"#)))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_responses() {
        let resp = build_404_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");

        assert_eq!(build_400_response().status(), 400);
        assert_eq!(build_ok_response().status(), 200);
    }

    #[test]
    fn test_error_response_shape() {
        let resp = build_error_response(StatusCode::BAD_REQUEST, "name and user_id required");
        assert_eq!(resp.status(), 400);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
    }

    #[test]
    fn test_internal_error_is_json() {
        let resp = build_500_response();
        assert_eq!(resp.status(), 500);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
    }
}
