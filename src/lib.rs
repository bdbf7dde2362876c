//! # routebind
//!
//! **routebind** is the callback-resolution and URL-pattern-compilation core
//! of a micro web-routing layer.
//!
//! ## Overview
//!
//! A route ties a URL pattern to a handler callable. Both halves lie to you:
//! the pattern may embed caller-supplied sub-patterns whose capturing groups
//! would shift the group indices the router binds parameters from, and the
//! handler is frequently a decorator wrapper whose variadic pass-through
//! signature hides the real parameter list. routebind fixes both at
//! registration time: patterns are flattened so only the router's own named
//! groups capture, and handlers are unwrapped to the function they ultimately
//! delegate to so URL segments can be bound to its true parameter names.
//!
//! ## Architecture
//!
//! The library is organized into four modules:
//!
//! - **[`pattern`]** - Flattening of unnamed capturing groups and wildcard
//!   rule compilation into anchored regexes
//! - **[`callable`]** - The handler reflection model: functions, bound
//!   methods, callable objects, captured values and origin markers
//! - **[`resolver`]** - Decorator unwrapping and bindable parameter name
//!   derivation
//! - **[`route`]** - The `Route` entity and `RouteTable` registration
//!   surface consumed by the dispatch layer
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use routebind::{Callable, Captured, ParameterMeta, RouteTable};
//!
//! // fn show(page, revision) ... wrapped by a logging decorator that
//! // forwards through *args/**kwargs.
//! let show = Callable::function(
//!     "show",
//!     vec![
//!         ParameterMeta::positional("page"),
//!         ParameterMeta::positional("revision"),
//!     ],
//! );
//! let logged = Callable::closure(
//!     "wrapper",
//!     vec![
//!         ParameterMeta::var_positional("args"),
//!         ParameterMeta::var_keyword("kwargs"),
//!     ],
//!     vec![Captured::Callable(show.clone())],
//! )
//! .wraps(&show);
//!
//! let mut table = RouteTable::new();
//! let route = table.register(Method::GET, r"/wiki/([^/]+)", logged);
//!
//! assert_eq!(route.pattern(), r"/wiki/(?:[^/]+)");
//! assert_eq!(route.origin(), show);
//! assert!(route.parameter_names().contains("page"));
//! ```
//!
//! ## Scope
//!
//! routebind is an in-process library. Dispatch (matching a request path
//! against the table), HTTP method selection, the request/response model and
//! the middleware pipeline belong to the embedding router; they feed raw
//! patterns and handler descriptions in and read compiled patterns and
//! resolved parameter names back out.

pub mod callable;
pub mod pattern;
pub mod resolver;
pub mod route;
pub mod runtime_config;

pub use callable::{Callable, Captured, ParamKind, ParameterMeta};
pub use pattern::{compile_rule, flatten, CompiledPattern, ParamVec, MAX_INLINE_PARAMS};
pub use resolver::{
    bindable_parameter_names, resolve_origin, resolve_origin_with_depth, resolve_parameter_names,
    MAX_UNWRAP_DEPTH,
};
pub use route::{Route, RouteTable};
pub use runtime_config::RuntimeConfig;
