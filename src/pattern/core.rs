//! Pattern core module - flattening and rule compilation.

use anyhow::{bail, Context};
use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;
use tracing::debug;

/// Maximum number of wildcard parameters before heap allocation.
/// Most routes carry ≤4 wildcards (e.g., `/users/<id>/posts/<post_id>`).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter name storage for compiled rules.
pub type ParamVec = SmallVec<[String; MAX_INLINE_PARAMS]>;

/// Default wildcard mask: one path segment.
const DEFAULT_MASK: &str = "[^/]+";

/// Rewrite every unnamed capturing group in `pattern` into a non-capturing
/// group.
///
/// Named groups (`(?P<name>...)`) and any other `(?` extension syntax are
/// emitted unchanged, as are escaped parentheses and unmatched delimiters.
/// Closing parentheses never need rewriting: capturing and non-capturing
/// groups close identically.
///
/// The scan tracks escape state one character at a time; a backslash escapes
/// only the character that follows it.
///
/// # Example
///
/// ```rust
/// use routebind::pattern::flatten;
///
/// assert_eq!(flatten(r"(aaa)(_bbb)"), "(?:aaa)(?:_bbb)");
/// assert_eq!(flatten(r"(?:aaa)(?P<x>bbb)"), "(?:aaa)(?P<x>bbb)");
/// ```
#[must_use]
pub fn flatten(pattern: &str) -> String {
    if !pattern.contains('(') {
        return pattern.to_string();
    }

    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();
    let mut escaped = false;
    while let Some(c) = chars.next() {
        if escaped {
            out.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => {
                out.push(c);
                escaped = true;
            }
            '(' if chars.peek() != Some(&'?') => out.push_str("(?:"),
            _ => out.push(c),
        }
    }
    out
}

/// A route rule compiled into a matching expression.
///
/// Produced by [`compile_rule`]. The dispatch layer matches request paths
/// against `regex` and binds each named group to the parameter of the same
/// name; `params` preserves rule order for diagnostics.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Final anchored regex source, post-flattening of any custom masks
    pub pattern: String,
    /// Compiled matcher for the full request path
    pub regex: Regex,
    /// Wildcard parameter names in rule order (stack-allocated for ≤8 params)
    pub params: ParamVec,
}

/// Wildcard grammar: `<name>`, `<name:filter>` or `<name:filter:mask>`.
/// The mask arm tolerates escaped characters so `re:` masks may contain `\>`.
static WILDCARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<([a-zA-Z_][a-zA-Z_0-9]*)(?::([a-zA-Z_]*)(?::((?:\\.|[^\\>])+))?)?>")
        .expect("wildcard grammar regex is valid")
});

/// Compile a wildcard rule into an anchored regex with named groups.
///
/// Literal spans are escaped; each wildcard becomes `(?P<name>mask)` where
/// the mask comes from the filter:
///
/// | filter  | mask          |
/// |---------|---------------|
/// | (none)  | `[^/]+`       |
/// | `int`   | `-?\d+`       |
/// | `float` | `-?[\d.]+`    |
/// | `path`  | `.+?`         |
/// | `re`    | caller's mask |
///
/// Caller-supplied `re:` masks are passed through [`flatten`] first so any
/// capturing groups inside them cannot shift the group indices of the named
/// groups this function emits.
///
/// # Errors
///
/// Returns an error for an unknown filter name or a mask the `regex` crate
/// rejects (including duplicate wildcard names in one rule).
pub fn compile_rule(rule: &str) -> anyhow::Result<CompiledPattern> {
    let mut pattern = String::with_capacity(rule.len() + 8);
    pattern.push('^');
    let mut params = ParamVec::new();

    let mut last = 0usize;
    for caps in WILDCARD.captures_iter(rule) {
        let Some(whole) = caps.get(0) else { continue };
        let name = &caps[1];

        let mask = match caps.get(2).map(|m| m.as_str()) {
            None | Some("") => DEFAULT_MASK.to_string(),
            Some("int") => r"-?\d+".to_string(),
            Some("float") => r"-?[\d.]+".to_string(),
            Some("path") => ".+?".to_string(),
            Some("re") => flatten(caps.get(3).map_or(DEFAULT_MASK, |m| m.as_str())),
            Some(other) => bail!("unknown path filter '{}' in rule '{}'", other, rule),
        };

        pattern.push_str(&regex::escape(&rule[last..whole.start()]));
        pattern.push_str("(?P<");
        pattern.push_str(name);
        pattern.push('>');
        pattern.push_str(&mask);
        pattern.push(')');
        params.push(name.to_string());
        last = whole.end();
    }
    pattern.push_str(&regex::escape(&rule[last..]));
    pattern.push('$');

    let regex = Regex::new(&pattern)
        .with_context(|| format!("rule '{}' compiled to invalid pattern '{}'", rule, pattern))?;

    debug!(
        rule = rule,
        pattern = %regex.as_str(),
        params = ?params,
        "compiled route rule"
    );

    Ok(CompiledPattern {
        pattern,
        regex,
        params,
    })
}
