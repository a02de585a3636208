//! Routing module
//!
//! Provides the fixed route table and ordered first-match lookup:
//! - Route descriptors binding (method, path) to a render or redirect action
//! - Strictly ordered matching with an explicit catch-all

mod matcher;
pub mod table;

pub use matcher::match_route;
pub use table::{Route, RouteAction, RouteTable};
