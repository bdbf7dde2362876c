//! Resolver core module - decorator unwrapping and bindable name derivation.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::callable::{Callable, Captured, ParamKind};

/// Maximum wrapper chain depth walked by [`resolve_origin`].
///
/// Real decorator stacks are a handful of layers deep; the bound only exists
/// so a cyclic or adversarial chain terminates instead of looping.
pub const MAX_UNWRAP_DEPTH: usize = 64;

/// Resolve the undecorated callable a wrapper chain ultimately delegates to.
///
/// Applies, per node and in order:
///
/// 1. a bound method is replaced by its underlying function;
/// 2. an explicit origin marker is followed directly (the closure heuristic
///    is never applied to the same node);
/// 3. a wrapper declaring no parameters that closes over exactly one callable
///    value is replaced by that value; zero or several candidates make the
///    wrapper terminal.
///
/// Never fails: a callable that is not a wrapper resolves to itself, and
/// exhausting [`MAX_UNWRAP_DEPTH`] returns the last examined node.
#[must_use]
pub fn resolve_origin(callback: &Callable) -> Callable {
    resolve_origin_with_depth(callback, MAX_UNWRAP_DEPTH)
}

/// [`resolve_origin`] with an explicit chain depth bound.
///
/// The common path is the constant-default wrapper; this entry exists for
/// callers that tune the bound via [`crate::runtime_config::RuntimeConfig`].
#[must_use]
pub fn resolve_origin_with_depth(callback: &Callable, max_depth: usize) -> Callable {
    let mut current = callback.clone();
    for _ in 0..max_depth {
        if let Some(function) = current.underlying_function().cloned() {
            debug!(
                method = current.display_name(),
                "unwrapped bound method to its function"
            );
            current = function;
            continue;
        }

        if let Some(origin) = current.origin_marker().cloned() {
            debug!(
                wrapper = current.display_name(),
                origin = origin.display_name(),
                "followed explicit origin marker"
            );
            current = origin;
            continue;
        }

        // A wrapper with declared parameters of its own is configuration,
        // not forwarding; never unwrap past it.
        if !current.declared_parameters().is_empty() {
            return current;
        }

        let target = {
            let mut candidates = current.captured_values().iter().filter_map(|v| match v {
                Captured::Callable(target) => Some(target),
                Captured::Value(_) => None,
            });
            match (candidates.next(), candidates.next()) {
                (Some(target), None) => Some(target.clone()),
                // Zero candidates: terminal. Several: ambiguous, also terminal.
                _ => None,
            }
        };
        match target {
            Some(target) => {
                debug!(
                    wrapper = current.display_name(),
                    target = target.display_name(),
                    "unwrapped null decorator"
                );
                current = target;
            }
            None => return current,
        }
    }

    warn!(
        callback = current.display_name(),
        max_depth, "unwrap depth bound reached, returning last examined callable"
    );
    current
}

/// Bindable parameter names declared by an already-resolved origin.
///
/// Positional-or-keyword and keyword-only parameters qualify regardless of
/// defaults; variadic catch-alls and the implicit receiver do not. Binding is
/// by name, so the result is a set.
#[must_use]
pub fn bindable_parameter_names(origin: &Callable) -> HashSet<String> {
    let skip = usize::from(origin.has_implicit_receiver());
    origin
        .declared_parameters()
        .iter()
        .skip(skip)
        .filter(|p| {
            matches!(
                p.kind,
                ParamKind::PositionalOrKeyword | ParamKind::KeywordOnly
            )
        })
        .map(|p| p.name.clone())
        .collect()
}

/// Bindable parameter names of `callback`'s resolved origin.
///
/// Always computed against [`resolve_origin`], never the outward-facing
/// wrapper.
#[must_use]
pub fn resolve_parameter_names(callback: &Callable) -> HashSet<String> {
    bindable_parameter_names(&resolve_origin(callback))
}
