//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for routebind's runtime behavior.
//!
//! ## Environment Variables
//!
//! ### `ROUTEBIND_MAX_UNWRAP_DEPTH`
//!
//! Bounds how many wrapper layers [`crate::resolver::resolve_origin_with_depth`]
//! walks before giving up and returning the last examined callable. Accepts
//! values in:
//! - Decimal: `64`
//! - Hexadecimal: `0x40`
//!
//! Default: [`crate::resolver::MAX_UNWRAP_DEPTH`].
//!
//! The bound exists to guarantee termination on pathological or cyclic
//! decorator chains; ordinary stacks are a handful of layers deep and never
//! come near it.
//!
//! ## Usage
//!
//! ```rust
//! use routebind::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Unwrap depth bound: {}", config.max_unwrap_depth);
//! ```

use std::env;

use crate::resolver::MAX_UNWRAP_DEPTH;

/// Runtime configuration loaded from environment variables.
///
/// Load this at startup using [`RuntimeConfig::from_env()`].
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Wrapper chain depth bound for origin resolution
    pub max_unwrap_depth: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            max_unwrap_depth: MAX_UNWRAP_DEPTH,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let max_unwrap_depth = match env::var("ROUTEBIND_MAX_UNWRAP_DEPTH") {
            Ok(val) => {
                if let Some(hex) = val.strip_prefix("0x") {
                    usize::from_str_radix(hex, 16).unwrap_or(MAX_UNWRAP_DEPTH)
                } else {
                    val.parse().unwrap_or(MAX_UNWRAP_DEPTH)
                }
            }
            Err(_) => MAX_UNWRAP_DEPTH,
        };
        RuntimeConfig { max_unwrap_depth }
    }
}
