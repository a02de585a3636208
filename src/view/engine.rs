//! Template engine module
//!
//! The route dispatcher depends on the narrow `Renderer` capability; the
//! minijinja-backed `TemplateEngine` is the only implementation, loading
//! templates from the configured directory.

use minijinja::{path_loader, Environment};

use crate::error::{RenderError, StartupError};

use super::context::ViewContext;

/// Render a named template against a view context.
pub trait Renderer: Send + Sync {
    fn render(&self, name: &str, ctx: &ViewContext) -> Result<String, RenderError>;
}

/// minijinja-backed renderer loading templates from a directory tree.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine serving templates from `dir`. Templates are loaded
    /// lazily; call [`verify`](Self::verify) at startup to fail fast on a
    /// missing or broken template.
    pub fn from_dir(dir: &str) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir));
        Self { env }
    }

    /// Check that every named template parses. A failure here is fatal
    /// configuration, not a per-request condition.
    pub fn verify<'a>(&self, names: impl Iterator<Item = &'a str>) -> Result<(), StartupError> {
        for name in names {
            self.env
                .get_template(name)
                .map_err(|source| StartupError::Template {
                    name: name.to_string(),
                    source,
                })?;
        }
        Ok(())
    }
}

impl Renderer for TemplateEngine {
    fn render(&self, name: &str, ctx: &ViewContext) -> Result<String, RenderError> {
        let template = self.env.get_template(name).map_err(|source| RenderError {
            name: name.to_string(),
            source,
        })?;
        template.render(ctx).map_err(|source| RenderError {
            name: name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline_engine(name: &'static str, source: &'static str) -> TemplateEngine {
        let mut env = Environment::new();
        env.add_template(name, source).unwrap();
        TemplateEngine { env }
    }

    #[test]
    fn test_context_keys_are_page_title_and_path() {
        let engine = inline_engine("probe.html", "{{ pageTitle }}|{{ path }}");
        let ctx = ViewContext::new("Cart", "cart");
        let out = engine.render("probe.html", &ctx).unwrap();
        assert_eq!(out, "Cart|cart");
    }

    #[test]
    fn test_missing_template_fails_verify() {
        let engine = inline_engine("present.html", "ok");
        assert!(engine.verify(["present.html"].into_iter()).is_ok());
        let err = engine.verify(["absent.html"].into_iter()).unwrap_err();
        match err {
            StartupError::Template { name, .. } => assert_eq!(name, "absent.html"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_template_fails_render() {
        let engine = inline_engine("present.html", "ok");
        let ctx = ViewContext::new("x", "y");
        let err = engine.render("absent.html", &ctx).unwrap_err();
        assert_eq!(err.name, "absent.html");
    }

    #[test]
    fn test_shipped_views_render_with_title() {
        // Exercises the real template tree at the repository root.
        let engine = TemplateEngine::from_dir("views");
        let ctx = ViewContext::new("Online Shop", "/");
        let html = engine.render("pages/index.html", &ctx).unwrap();
        assert!(html.contains("Online Shop"));
    }
}
