//! Route table module
//!
//! The route table is a fixed, declarative list of descriptors built once at
//! startup. Matching iterates the list in order; the fallback action applies
//! only when nothing matched.

use hyper::Method;

/// What a matched route does: render a named template or redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Render `template` with the given display parameters.
    Render {
        template: &'static str,
        page_title: &'static str,
        /// Active navigation section, passed to the layout as `path`.
        nav: &'static str,
    },
    /// Issue a 302 redirect to `target`.
    Redirect { target: &'static str },
}

/// A single (method, path) descriptor bound to one action.
#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub action: RouteAction,
}

impl Route {
    fn render(
        method: Method,
        path: &'static str,
        template: &'static str,
        page_title: &'static str,
        nav: &'static str,
    ) -> Self {
        Self {
            method,
            path,
            action: RouteAction::Render {
                template,
                page_title,
                nav,
            },
        }
    }

    fn redirect(method: Method, path: &'static str, target: &'static str) -> Self {
        Self {
            method,
            path,
            action: RouteAction::Redirect { target },
        }
    }
}

/// The immutable route table plus its catch-all action.
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: RouteAction,
}

impl RouteTable {
    /// Build the storefront table: home, cart, products, add-product form,
    /// the add-product POST redirect, and the admin page.
    pub fn storefront() -> Self {
        Self {
            routes: vec![
                Route::render(Method::GET, "/", "pages/index.html", "Online Shop", "/"),
                Route::render(Method::GET, "/cart", "pages/cart.html", "Cart", "cart"),
                Route::render(
                    Method::GET,
                    "/products",
                    "pages/products.html",
                    "Products",
                    "products",
                ),
                Route::render(
                    Method::GET,
                    "/add-product",
                    "pages/add-product.html",
                    "Add Product",
                    "add-product",
                ),
                Route::redirect(Method::POST, "/add-product", "/products"),
                Route::render(Method::GET, "/admin", "admin/admin.html", "Admin", "admin"),
            ],
            fallback: RouteAction::Render {
                template: "pages/404.html",
                page_title: "Page not found",
                nav: "",
            },
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The action taken when no route matched. Always a render; the
    /// dispatcher answers it with status 404.
    pub const fn fallback(&self) -> &RouteAction {
        &self.fallback
    }

    /// Every template name the table references, fallback included.
    /// Used at startup to verify the template set is complete.
    pub fn template_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes
            .iter()
            .map(|r| &r.action)
            .chain(std::iter::once(&self.fallback))
            .filter_map(|action| match action {
                RouteAction::Render { template, .. } => Some(*template),
                RouteAction::Redirect { .. } => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_table_covers_all_pages() {
        let table = RouteTable::storefront();
        let expected = [
            ("GET", "/", "Online Shop"),
            ("GET", "/cart", "Cart"),
            ("GET", "/products", "Products"),
            ("GET", "/add-product", "Add Product"),
            ("GET", "/admin", "Admin"),
        ];

        for (method, path, title) in expected {
            let route = table
                .routes()
                .iter()
                .find(|r| r.method.as_str() == method && r.path == path)
                .unwrap_or_else(|| panic!("missing route {method} {path}"));
            match &route.action {
                RouteAction::Render { page_title, .. } => assert_eq!(*page_title, title),
                RouteAction::Redirect { .. } => panic!("{method} {path} should render"),
            }
        }
    }

    #[test]
    fn test_add_product_post_redirects_to_products() {
        let table = RouteTable::storefront();
        let route = table
            .routes()
            .iter()
            .find(|r| r.method == Method::POST && r.path == "/add-product")
            .expect("POST /add-product must be registered");
        assert_eq!(
            route.action,
            RouteAction::Redirect {
                target: "/products"
            }
        );
    }

    #[test]
    fn test_fallback_renders_not_found_page() {
        let table = RouteTable::storefront();
        match table.fallback() {
            RouteAction::Render {
                template,
                page_title,
                nav,
            } => {
                assert_eq!(*template, "pages/404.html");
                assert_eq!(*page_title, "Page not found");
                assert_eq!(*nav, "");
            }
            RouteAction::Redirect { .. } => panic!("fallback must render"),
        }
    }

    #[test]
    fn test_template_names_include_fallback() {
        let table = RouteTable::storefront();
        let names: Vec<_> = table.template_names().collect();
        assert!(names.contains(&"pages/index.html"));
        assert!(names.contains(&"admin/admin.html"));
        assert!(names.contains(&"pages/404.html"));
        // The redirect route contributes no template
        assert_eq!(names.len(), 6);
    }
}
