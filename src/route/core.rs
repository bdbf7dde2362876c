//! Route core module - the registered route entity and its memoized
//! resolution results.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use http::Method;
use tracing::debug;

use crate::callable::Callable;
use crate::pattern;
use crate::resolver;

/// Fully-computed resolution results for one route.
///
/// Written to the cache as a single `Arc` so readers never observe a torn
/// value.
#[derive(Debug)]
struct ResolvedCallback {
    origin: Callable,
    param_names: HashSet<String>,
}

/// A registered route: pattern, method and handler callable, plus lazily
/// memoized resolution results.
///
/// The pattern is flattened once at construction (see
/// [`pattern::flatten`]); the callback is stored untouched. [`Route::origin`]
/// and [`Route::parameter_names`] are pure functions of the immutable
/// callback, so racing threads that both compute them produce identical
/// results and the last full write wins.
pub struct Route {
    method: Method,
    pattern: String,
    callback: Callable,
    resolved: ArcSwapOption<ResolvedCallback>,
}

impl Route {
    /// Create a route, flattening `pattern` so any caller-supplied capturing
    /// groups inside it are neutralized.
    #[must_use]
    pub fn new(method: Method, pattern: &str, callback: Callable) -> Self {
        let pattern = pattern::flatten(pattern);
        debug!(
            method = %method,
            pattern = %pattern,
            callback = callback.display_name(),
            "route created"
        );
        Route {
            method,
            pattern,
            callback,
            resolved: ArcSwapOption::empty(),
        }
    }

    fn resolved(&self) -> Arc<ResolvedCallback> {
        if let Some(cached) = self.resolved.load_full() {
            return cached;
        }
        let origin = resolver::resolve_origin(&self.callback);
        let param_names = resolver::bindable_parameter_names(&origin);
        let computed = Arc::new(ResolvedCallback {
            origin,
            param_names,
        });
        self.resolved.store(Some(Arc::clone(&computed)));
        computed
    }

    /// HTTP method this route is registered for.
    #[inline]
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The compiled (post-flattening) pattern.
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The handler exactly as registered, wrappers and all.
    #[inline]
    #[must_use]
    pub fn callback(&self) -> &Callable {
        &self.callback
    }

    /// The undecorated callable the registered handler delegates to.
    #[must_use]
    pub fn origin(&self) -> Callable {
        self.resolved().origin.clone()
    }

    /// Parameter names of the resolved origin that URL segments can be bound
    /// to.
    #[must_use]
    pub fn parameter_names(&self) -> HashSet<String> {
        self.resolved().param_names.clone()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}",
            self.method,
            self.pattern,
            self.resolved().origin.display_name()
        )
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.pattern)
            .field("callback", &self.callback)
            .finish()
    }
}
