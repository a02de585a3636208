//! View context module
//!
//! The per-request mapping handed to the template layer. Built fresh for
//! each request from the matched route's static parameters, consumed by a
//! single render call, and dropped with the response.

use serde::Serialize;

/// Display values exposed to templates as `pageTitle` and `path`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewContext {
    /// Title of the rendered page.
    pub page_title: String,
    /// Active navigation section; the layout highlights the matching item.
    pub path: String,
}

impl ViewContext {
    pub fn new(page_title: &str, path: &str) -> Self {
        Self {
            page_title: page_title.to_string(),
            path: path.to_string(),
        }
    }
}
