//! Route matching module
//!
//! Routes match on method plus path prefix, first entry wins. Prefix
//! matching is intentional: `/target?unit=um` and `/targets` both reach the
//! target endpoint, which is what deployed devices rely on.

use hyper::Method;

/// Endpoint a request is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Fixed target thickness
    Target,
    /// Fixed list of production lines
    Lines,
    /// Device report intake
    Data,
}

/// A single routing table entry
pub struct Route {
    pub method: Method,
    pub prefix: &'static str,
    pub endpoint: Endpoint,
}

/// Routing table, matched in order
static ROUTES: [Route; 3] = [
    Route {
        method: Method::GET,
        prefix: "/target",
        endpoint: Endpoint::Target,
    },
    Route {
        method: Method::GET,
        prefix: "/lines",
        endpoint: Endpoint::Lines,
    },
    Route {
        method: Method::POST,
        prefix: "/data",
        endpoint: Endpoint::Data,
    },
];

/// Find the endpoint for a method and path in the default table
pub fn match_route(method: &Method, path: &str) -> Option<Endpoint> {
    match_in(&ROUTES, method, path)
}

fn match_in(routes: &[Route], method: &Method, path: &str) -> Option<Endpoint> {
    routes
        .iter()
        .find(|route| route.method == *method && path.starts_with(route.prefix))
        .map(|route| route.endpoint)
}
