//! End-to-end dispatch tests against the real route table, template tree,
//! and public asset directory.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{HeaderMap, Method, Request, StatusCode};
use shopfront::config::{AppState, Config};
use shopfront::handler::handle_request;
use std::net::SocketAddr;
use std::sync::Arc;

fn test_state() -> Arc<AppState> {
    let mut cfg = Config::load_from("no-such-config-file").unwrap();
    cfg.logging.access_log = false;
    Arc::new(AppState::new(cfg).expect("template set should verify"))
}

fn peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

async fn send(
    state: &Arc<AppState>,
    method: Method,
    path: &str,
    body: &str,
) -> (StatusCode, HeaderMap, String) {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap();
    let resp = handle_request(req, Arc::clone(state), peer()).await.unwrap();
    let (parts, body) = resp.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    (
        parts.status,
        parts.headers,
        String::from_utf8_lossy(&bytes).into_owned(),
    )
}

#[tokio::test]
async fn registered_pages_render_with_their_titles() {
    let state = test_state();
    let pages = [
        ("/", "Online Shop"),
        ("/cart", "Cart"),
        ("/products", "Products"),
        ("/add-product", "Add Product"),
        ("/admin", "Admin"),
    ];

    for (path, title) in pages {
        let (status, headers, body) = send(&state, Method::GET, path, "").await;
        assert_eq!(status, StatusCode::OK, "GET {path}");
        assert_eq!(headers["Content-Type"], "text/html; charset=utf-8");
        assert!(body.contains(title), "GET {path} body missing '{title}'");
    }
}

#[tokio::test]
async fn post_add_product_redirects_without_touching_state() {
    let state = test_state();

    let (_, _, products_before) = send(&state, Method::GET, "/products", "").await;

    for body in ["", "title=Widget&price=9.99", "not a form at all"] {
        let (status, headers, _) = send(&state, Method::POST, "/add-product", body).await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(headers["Location"], "/products");
    }

    // No persistence: the listing is byte-identical after any POST
    let (_, _, products_after) = send(&state, Method::GET, "/products", "").await;
    assert_eq!(products_before, products_after);
}

#[tokio::test]
async fn unregistered_path_gets_not_found_page() {
    let state = test_state();
    let (status, _, body) = send(&state, Method::GET, "/does-not-exist", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn unsupported_method_falls_through_to_not_found() {
    let state = test_state();
    let (status, _, body) = send(&state, Method::DELETE, "/cart", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn head_request_gets_headers_without_body() {
    let state = test_state();
    let (status, headers, body) = send(&state, Method::HEAD, "/", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers.contains_key("Content-Length"));
    assert!(body.is_empty());
}

#[tokio::test]
async fn concurrent_requests_do_not_cross_contaminate() {
    let state = test_state();

    let (home, admin) = tokio::join!(
        send(&state, Method::GET, "/", ""),
        send(&state, Method::GET, "/admin", ""),
    );

    assert_eq!(home.0, StatusCode::OK);
    assert!(home.2.contains("Online Shop"));
    assert!(!home.2.contains("<title>Admin</title>"));

    assert_eq!(admin.0, StatusCode::OK);
    assert!(admin.2.contains("Admin"));
    assert!(!admin.2.contains("<title>Online Shop</title>"));
}

#[tokio::test]
async fn static_assets_bypass_templating() {
    let state = test_state();
    let (status, headers, body) = send(&state, Method::GET, "/styles/site.css", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["Content-Type"], "text/css");

    let on_disk = std::fs::read_to_string("public/styles/site.css").unwrap();
    assert_eq!(body, on_disk);
}

#[tokio::test]
async fn missing_template_is_fatal_at_startup() {
    let mut cfg = Config::load_from("no-such-config-file").unwrap();
    cfg.logging.access_log = false;
    cfg.site.templates_dir = "no-such-views-dir".to_string();
    assert!(AppState::new(cfg).is_err());
}
