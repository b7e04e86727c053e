//! Request body parsing module
//!
//! Reads a request body to completion and parses it as JSON. Parsing is
//! fail-open: a malformed or empty body yields `{}` so handlers answer
//! "missing field" instead of a parse error.

use http_body_util::BodyExt;
use serde_json::Value;

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Collect the whole body and parse it as JSON, yielding `{}` on any
/// read or parse failure. No size limit is applied.
pub async fn read_json<B>(body: B) -> Value
where
    B: hyper::body::Body,
{
    let Ok(collected) = body.collect().await else {
        return empty_object();
    };

    serde_json::from_slice(&collected.to_bytes()).unwrap_or_else(|_| empty_object())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;
    use hyper::body::Bytes;

    #[tokio::test]
    async fn test_valid_object() {
        let body = Full::new(Bytes::from(r#"{"name":"buy milk","user_id":1}"#));
        let value = read_json(body).await;
        assert_eq!(value["name"], "buy milk");
        assert_eq!(value["user_id"], 1);
    }

    #[tokio::test]
    async fn test_malformed_body_yields_empty_object() {
        let body = Full::new(Bytes::from("{not json"));
        let value = read_json(body).await;
        assert_eq!(value, serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_empty_body_yields_empty_object() {
        let body = Full::new(Bytes::new());
        let value = read_json(body).await;
        assert_eq!(value, serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_non_object_json_is_passed_through() {
        // Fail-open only covers parse failures; valid non-object JSON
        // reaches the handler, which then finds no fields in it
        let body = Full::new(Bytes::from("[1,2,3]"));
        let value = read_json(body).await;
        assert_eq!(value, serde_json::json!([1, 2, 3]));
    }
}
