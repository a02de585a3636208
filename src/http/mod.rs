//! HTTP protocol layer module
//!
//! Response builders and MIME detection, shared by the route dispatcher and
//! the static file handler.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_500_response, build_html_response, build_redirect_response, build_static_response,
};
