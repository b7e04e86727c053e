//! Route matching module
//!
//! Implements the fixed route table: exact targets first, then the todo
//! item prefix, then no route. Targets are compared exactly as sent on
//! the wire; query strings, trailing slashes and casing all matter.

/// Routes served by this service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Readiness probe, `/readyz`
    Readiness,
    /// Todo collection endpoint, `/todos`
    TodoCollection,
    /// Todo item endpoint, `/todos/{id}`
    TodoItem,
}

/// Find the route for a raw request target, if any
pub fn match_route(target: &str) -> Option<RouteTarget> {
    match target {
        "/readyz" => Some(RouteTarget::Readiness),
        "/todos" => Some(RouteTarget::TodoCollection),
        _ if target.starts_with("/todos/") => Some(RouteTarget::TodoItem),
        _ => None,
    }
}

/// Extract the item id segment from a `/todos/...` target.
///
/// The id is whatever sits between the second and third slash. It may be
/// empty or non-numeric; it is handed to the store untouched, which
/// rejects anything that does not cast to an integer.
pub fn item_id(target: &str) -> &str {
    target.split('/').nth(2).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_routes() {
        assert_eq!(match_route("/readyz"), Some(RouteTarget::Readiness));
        assert_eq!(match_route("/todos"), Some(RouteTarget::TodoCollection));
    }

    #[test]
    fn test_item_prefix() {
        assert_eq!(match_route("/todos/1"), Some(RouteTarget::TodoItem));
        assert_eq!(match_route("/todos/abc"), Some(RouteTarget::TodoItem));
        // Empty id segment still reaches the item route
        assert_eq!(match_route("/todos/"), Some(RouteTarget::TodoItem));
    }

    #[test]
    fn test_no_route() {
        assert_eq!(match_route("/"), None);
        assert_eq!(match_route("/foo"), None);
        assert_eq!(match_route("/readyz/"), None);
        assert_eq!(match_route("/TODOS"), None);
    }

    #[test]
    fn test_query_string_is_part_of_the_target() {
        // The table matches raw targets, so a query string defeats the
        // exact entries but rides along on the item prefix
        assert_eq!(match_route("/todos?done=1"), None);
        assert_eq!(match_route("/todos/5?done=1"), Some(RouteTarget::TodoItem));
    }

    #[test]
    fn test_item_id_extraction() {
        assert_eq!(item_id("/todos/5"), "5");
        assert_eq!(item_id("/todos/"), "");
        assert_eq!(item_id("/todos/abc"), "abc");
        assert_eq!(item_id("/todos/5/extra"), "5");
        assert_eq!(item_id("/todos/5?done=1"), "5?done=1");
    }
}
