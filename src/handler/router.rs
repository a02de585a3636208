//! Request dispatch module
//!
//! Entry point for HTTP request processing. Dispatch is staged: the fixed
//! route table first, then static assets for GET/HEAD, then the not-found
//! fallback. The request body is never read; the add-product POST redirects
//! regardless of what was submitted.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{match_route, RouteAction};
use crate::view::ViewContext;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating what dispatch needs from the request
pub struct RequestContext<'a> {
    pub method: &'a Method,
    pub path: &'a str,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling
///
/// Generic over the body type because no handler reads it.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let ctx = RequestContext {
        method: &method,
        path: &path,
        is_head: method == Method::HEAD,
    };

    let response = route_request(&ctx, &state).await;

    if state.config.logging.access_log {
        let entry = build_log_entry(&req, &response, remote_addr, start);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Dispatch a request: route table, then static assets, then fallback
pub async fn route_request(
    ctx: &RequestContext<'_>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    // 1. Fixed route table, strictly ordered first-match
    if let Some(route) = match_route(ctx.method, ctx.path, state.routes.routes()) {
        return apply_action(&route.action, StatusCode::OK, ctx, state);
    }

    // 2. Static assets from the public directory (GET/HEAD only)
    if *ctx.method == Method::GET || *ctx.method == Method::HEAD {
        if let Some(response) = static_files::serve_public(ctx, &state.config.site.public_dir).await
        {
            return response;
        }
    }

    // 3. Nothing matched: render the not-found page with an explicit 404
    apply_action(state.routes.fallback(), StatusCode::NOT_FOUND, ctx, state)
}

/// Execute a matched action against the view layer
fn apply_action(
    action: &RouteAction,
    status: StatusCode,
    ctx: &RequestContext<'_>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    match action {
        RouteAction::Render {
            template,
            page_title,
            nav,
        } => {
            let view = ViewContext::new(page_title, nav);
            match state.renderer.render(template, &view) {
                Ok(html) => http::build_html_response(html, status, ctx.is_head),
                Err(e) => {
                    logger::log_error(&e.to_string());
                    http::build_500_response()
                }
            }
        }
        RouteAction::Redirect { target } => http::build_redirect_response(target),
    }
}

fn build_log_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    remote_addr: SocketAddr,
    start: Instant,
) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        remote_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.http_version = match req.version() {
        Version::HTTP_10 => "1.0".to_string(),
        _ => "1.1".to_string(),
    };
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry.request_time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}
