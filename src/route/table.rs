//! Route registration surface for the dispatch layer.

use std::sync::Arc;

use http::Method;
use tracing::info;

use crate::callable::Callable;

use super::Route;

/// Ordered collection of registered routes.
///
/// Registration hands back a shared [`Route`] handle; the dispatch layer
/// keeps whichever handles it needs and reads resolution results off them.
/// The table itself does no matching.
#[derive(Default)]
pub struct RouteTable {
    routes: Vec<Arc<Route>>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        RouteTable { routes: Vec::new() }
    }

    /// Register a route and return its shared handle.
    pub fn register(&mut self, method: Method, pattern: &str, callback: Callable) -> Arc<Route> {
        let route = Arc::new(Route::new(method, pattern, callback));
        info!(
            method = %route.method(),
            pattern = route.pattern(),
            callback = route.callback().display_name(),
            routes_count = self.routes.len() + 1,
            "route registered"
        );
        self.routes.push(Arc::clone(&route));
        route
    }

    /// All registered routes, in registration order.
    #[must_use]
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Print all registered routes to stdout.
    ///
    /// Useful for verifying that routes resolved the handlers you expect.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.routes.len());
        for route in &self.routes {
            println!(
                "[route] {} {} -> {}",
                route.method(),
                route.pattern(),
                route.origin().display_name()
            );
        }
    }
}
