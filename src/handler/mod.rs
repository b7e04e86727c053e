// Request handler module entry point
// Dispatches each request to its route handler and owns the outer
// error-to-500 boundary

mod health;
mod todos;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::http::response;
use crate::logger;
use crate::routing::{self, RouteTarget};

/// Outcome of a resource handler.
///
/// `Ok(None)` means the verb is not handled on the route and no response
/// is written at all; see `handle_request` for what that does to the
/// connection.
pub type HandlerResult = Result<Option<Response<Full<Bytes>>>, sqlx::Error>;

/// Top-level request dispatcher
///
/// Looks up the route for the raw request target, invokes the matching
/// handler, and converts any failure it raises into a generic 500.
pub async fn handle_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    // Requests without a target (authority-form and friends) are refused
    // before any routing happens
    let Some(target) = req.uri().path_and_query() else {
        return Ok(response::build_400_response());
    };
    let target = target.as_str().to_string();

    logger::log_request(req.method(), &target);

    let result = match routing::match_route(&target) {
        Some(RouteTarget::Readiness) => Ok(Some(health::handle())),
        Some(RouteTarget::TodoCollection) => todos::handle_collection(req, &state).await,
        Some(RouteTarget::TodoItem) => {
            let id = routing::item_id(&target).to_string();
            todos::handle_item(req, &state, &id).await
        }
        None => return Ok(response::build_404_response()),
    };

    match result {
        Ok(Some(resp)) => Ok(resp),
        Ok(None) => {
            // Known route, unsupported verb: no response is written and
            // the request is held open until the peer gives up
            logger::log_warning(&format!("No response produced for {target}"));
            Ok(std::future::pending::<Response<Full<Bytes>>>().await)
        }
        Err(e) => {
            logger::log_error(&format!("Handler error: {e}"));
            Ok(response::build_500_response())
        }
    }
}
