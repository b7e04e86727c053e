// Routing module entry point
// Ordered route matching over raw request targets

pub mod matcher;

pub use matcher::{item_id, match_route, RouteTarget};
