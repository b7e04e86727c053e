// Readiness handler module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::http::response;

/// Answer 200 "OK" for any verb without touching the store
pub fn handle() -> Response<Full<Bytes>> {
    response::build_ok_response()
}
