//! Request handler module
//!
//! Routing dispatch plus static asset serving.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
