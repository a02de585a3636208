//! Route matching module
//!
//! First-match lookup over the ordered route list. Ordering is the contract:
//! specific routes win because they are evaluated first, and the fallback
//! applies only after the whole list has been tried.

use hyper::Method;

use super::table::Route;

/// Find the first route matching the request method and path.
///
/// Paths match exactly; HEAD requests match GET routes (the dispatcher
/// strips the body). Any other method mismatch falls through to the
/// caller's fallback handling.
pub fn match_route<'a>(method: &Method, path: &str, routes: &'a [Route]) -> Option<&'a Route> {
    routes
        .iter()
        .find(|route| route.path == path && method_matches(&route.method, method))
}

fn method_matches(registered: &Method, requested: &Method) -> bool {
    requested == registered || (*requested == Method::HEAD && *registered == Method::GET)
}
