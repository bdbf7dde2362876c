//! # Pattern Module
//!
//! The pattern module compiles registered URL patterns into matching
//! expressions that the dispatch layer can hand to the `regex` crate.
//!
//! ## Overview
//!
//! Two entry points:
//!
//! 1. **Flattening**: [`flatten`] rewrites every unnamed capturing group in a
//!    raw regex pattern into a non-capturing group. Named groups, extension
//!    syntax (`(?:`, `(?=`, ...) and escaped parentheses are left untouched,
//!    so caller-supplied sub-patterns cannot shift or collide with the group
//!    indices the router relies on.
//!
//! 2. **Rule compilation**: [`compile_rule`] turns a human-friendly rule with
//!    embedded wildcards (e.g. `/pets/<id:int>`) into an anchored regex with
//!    one named group per wildcard, plus the ordered list of parameter names.
//!
//! Both run once per route at registration time; neither is on the request
//! hot path.

mod core;
#[cfg(test)]
mod tests;

pub use core::{compile_rule, flatten, CompiledPattern, ParamVec, MAX_INLINE_PARAMS};
