//! Static file serving module
//!
//! Serves files under the public directory verbatim at their relative path,
//! bypassing the route table and the template layer.

use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a public asset if one exists at the request path
pub async fn serve_public(
    ctx: &RequestContext<'_>,
    public_dir: &str,
) -> Option<Response<Full<Bytes>>> {
    let (content, content_type) = load_from_public(public_dir, ctx.path).await?;
    Some(http::build_static_response(content, content_type, ctx.is_head))
}

/// Resolve a request path under the public directory and read it.
///
/// Returns `None` for anything that is not a plain file inside the
/// directory; the canonicalize check blocks path traversal.
pub async fn load_from_public(public_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative = path.trim_start_matches('/').replace("..", "");
    // Stripping ".." can leave a leading slash, which would make join()
    // discard the base directory
    let relative = relative.trim_start_matches('/');
    if relative.is_empty() {
        return None;
    }

    let dir_canonical = Path::new(public_dir).canonicalize().ok()?;

    let file_path = dir_canonical.join(relative);
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(&dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_canonical.display()
        ));
        return None;
    }
    if !file_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_shipped_stylesheet_verbatim() {
        let (content, content_type) = load_from_public("public", "/styles/site.css")
            .await
            .expect("stylesheet should resolve");
        let on_disk = std::fs::read("public/styles/site.css").unwrap();
        assert_eq!(content, on_disk);
        assert_eq!(content_type, "text/css");
    }

    #[tokio::test]
    async fn test_missing_asset_is_none() {
        assert!(load_from_public("public", "/no-such-file.css").await.is_none());
    }

    #[tokio::test]
    async fn test_directory_is_not_served() {
        assert!(load_from_public("public", "/styles").await.is_none());
        assert!(load_from_public("public", "/").await.is_none());
    }

    #[tokio::test]
    async fn test_traversal_is_blocked() {
        assert!(load_from_public("public", "/../Cargo.toml").await.is_none());
        assert!(load_from_public("public", "/..%2FCargo.toml").await.is_none());
    }
}
