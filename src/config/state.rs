// Application state module
// Immutable per-process state shared by every connection task

use crate::error::StartupError;
use crate::routing::RouteTable;
use crate::view::{Renderer, TemplateEngine};

use super::types::Config;

/// Application state
///
/// Built once at startup and shared behind an `Arc`; nothing in it mutates,
/// so request tasks never coordinate.
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
    pub renderer: Box<dyn Renderer>,
}

impl AppState {
    /// Build the state: load the template engine and verify that every
    /// template the route table names actually loads.
    ///
    /// A missing or broken template is a configuration error and aborts
    /// startup before the listener binds.
    pub fn new(config: Config) -> Result<Self, StartupError> {
        let engine = TemplateEngine::from_dir(&config.site.templates_dir);
        let routes = RouteTable::storefront();
        engine.verify(routes.template_names())?;

        Ok(Self {
            config,
            routes,
            renderer: Box::new(engine),
        })
    }
}
