//! # Resolver Module
//!
//! The resolver module recovers the undecorated callable behind a chain of
//! wrappers and derives the set of parameter names that URL segments can be
//! bound to.
//!
//! ## Overview
//!
//! Decorators hide the handler's real signature: the outward-facing wrapper
//! usually forwards through a variadic catch-all and carries no usable name
//! information. [`resolve_origin`] walks the wrapper chain using two sources
//! of evidence:
//!
//! 1. an explicit origin marker left by a cooperating decorator (trusted
//!    directly), or
//! 2. for marker-less wrappers that declare no parameters of their own, the
//!    single callable value they close over (the "null decorator" heuristic).
//!
//! The heuristic is deliberately conservative: a wrapper with declared
//! parameters, or one closing over zero or several callables, is terminal.
//! Traversal is bounded so a cyclic chain cannot loop forever.
//!
//! [`resolve_parameter_names`] then reads the bindable names off the origin:
//! positional-or-keyword and keyword-only parameters, with variadic
//! catch-alls and the implicit receiver excluded.

mod core;
#[cfg(test)]
mod tests;

pub use core::{
    bindable_parameter_names, resolve_origin, resolve_origin_with_depth, resolve_parameter_names,
    MAX_UNWRAP_DEPTH,
};
