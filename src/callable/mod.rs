//! # Callable Module
//!
//! The callable module models handler callables and the reflection surface
//! the resolver works against.
//!
//! ## Overview
//!
//! Rust has no runtime callable introspection, so the embedding layer
//! describes each handler it registers with a [`Callable`] handle:
//!
//! - a plain **function** with a declared parameter list,
//! - a **bound method** (receiver discarded for signature purposes, the
//!   underlying function retained),
//! - a **callable object** instance whose effective signature is that of its
//!   call operation and whose name may be absent.
//!
//! Wrappers produced by decorators are functions too: they may close over
//! captured values ([`Captured`]) and may carry an explicit origin marker
//! (the [`Callable::wraps`] builder) recording what they wrap.
//!
//! Handles are cheap `Arc` clones and compare by identity, so a resolved
//! origin can be checked against the function that was registered.

mod core;

pub use core::{Callable, Captured, ParamKind, ParameterMeta};
