//! Callable core module - handler descriptions and the reflection surface.

use std::fmt;
use std::sync::Arc;

/// Fallback label for callables with no introspectable name.
const ANONYMOUS: &str = "<callable>";

/// Kind of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Ordinary parameter, bindable by position or by name
    PositionalOrKeyword,
    /// Parameter bindable by name only
    KeywordOnly,
    /// Variadic positional catch-all (`*args`)
    VarPositional,
    /// Variadic keyword catch-all (`**kwargs`)
    VarKeyword,
}

/// A single declared parameter of a callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterMeta {
    pub name: String,
    pub kind: ParamKind,
    pub has_default: bool,
}

impl ParameterMeta {
    /// Ordinary positional-or-keyword parameter.
    #[must_use]
    pub fn positional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ParamKind::PositionalOrKeyword,
            has_default: false,
        }
    }

    /// Keyword-only parameter.
    #[must_use]
    pub fn keyword_only(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ParamKind::KeywordOnly,
            has_default: false,
        }
    }

    /// Variadic positional catch-all.
    #[must_use]
    pub fn var_positional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ParamKind::VarPositional,
            has_default: false,
        }
    }

    /// Variadic keyword catch-all.
    #[must_use]
    pub fn var_keyword(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ParamKind::VarKeyword,
            has_default: false,
        }
    }

    /// Mark the parameter as carrying a default value.
    #[must_use]
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }
}

/// A value closed over by a wrapper callable.
///
/// Only callable captures are candidate unwrap targets; everything else is
/// opaque auxiliary state, labelled for diagnostics.
#[derive(Debug, Clone)]
pub enum Captured {
    /// A captured callable (function, bound method or callable object)
    Callable(Callable),
    /// Any non-callable binding; the label is only used in diagnostics
    Value(String),
}

impl Captured {
    /// Whether this captured binding holds a callable value.
    #[must_use]
    pub fn is_callable(&self) -> bool {
        matches!(self, Captured::Callable(_))
    }
}

#[derive(Debug, Clone)]
enum Shape {
    Function,
    BoundMethod { function: Callable },
    CallableObject,
}

#[derive(Debug, Clone)]
struct Inner {
    shape: Shape,
    name: Option<String>,
    params: Vec<ParameterMeta>,
    /// First declared parameter is an implicit receiver (method function)
    receiver: bool,
    /// Closed-over bindings, in capture order
    captured: Vec<Captured>,
    /// Explicit "this wraps that" marker left by a cooperating decorator
    wraps: Option<Callable>,
}

/// Opaque handle to a handler callable.
///
/// Cheap to clone; equality is identity, not structure, so two independently
/// built callables with the same description are distinct. All resolver-facing
/// accessors are total: a callable with no name still renders via
/// [`Callable::display_name`].
#[derive(Clone)]
pub struct Callable {
    inner: Arc<Inner>,
}

impl Callable {
    fn from_inner(inner: Inner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// A plain function with the given declared parameter list.
    #[must_use]
    pub fn function(name: &str, params: Vec<ParameterMeta>) -> Self {
        Self::from_inner(Inner {
            shape: Shape::Function,
            name: Some(name.to_string()),
            params,
            receiver: false,
            captured: Vec::new(),
            wraps: None,
        })
    }

    /// A function declared as a method: its first parameter is the implicit
    /// receiver and is excluded from the bindable name set.
    #[must_use]
    pub fn method_function(name: &str, params: Vec<ParameterMeta>) -> Self {
        Self::from_inner(Inner {
            shape: Shape::Function,
            name: Some(name.to_string()),
            params,
            receiver: true,
            captured: Vec::new(),
            wraps: None,
        })
    }

    /// A wrapper function closing over `captured` values.
    #[must_use]
    pub fn closure(name: &str, params: Vec<ParameterMeta>, captured: Vec<Captured>) -> Self {
        Self::from_inner(Inner {
            shape: Shape::Function,
            name: Some(name.to_string()),
            params,
            receiver: false,
            captured,
            wraps: None,
        })
    }

    /// A method bound to an owning instance. Signature queries delegate to
    /// the underlying function; the receiver is discarded.
    #[must_use]
    pub fn bound(function: &Callable) -> Self {
        Self::from_inner(Inner {
            shape: Shape::BoundMethod {
                function: function.clone(),
            },
            name: function.name().map(str::to_string),
            params: Vec::new(),
            receiver: false,
            captured: Vec::new(),
            wraps: None,
        })
    }

    /// A callable object instance. Its effective signature is that of its
    /// call operation; the instance may have no introspectable name.
    #[must_use]
    pub fn object(name: Option<&str>, params: Vec<ParameterMeta>) -> Self {
        Self::from_inner(Inner {
            shape: Shape::CallableObject,
            name: name.map(str::to_string),
            params,
            receiver: false,
            captured: Vec::new(),
            wraps: None,
        })
    }

    /// Attach an explicit origin marker recording what this callable wraps.
    ///
    /// This is the cooperative-decorator fast path: the resolver follows the
    /// marker directly instead of guessing from closed-over state.
    #[must_use]
    pub fn wraps(self, origin: &Callable) -> Self {
        let mut inner = (*self.inner).clone();
        inner.wraps = Some(origin.clone());
        Self::from_inner(inner)
    }

    /// The declared name, if the callable has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// A label that is always printable: the declared name or a generic
    /// placeholder for nameless callable objects.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.inner.name.as_deref().unwrap_or(ANONYMOUS)
    }

    /// Declared parameter list. For a bound method this is the underlying
    /// function's list (receiver included).
    #[must_use]
    pub fn declared_parameters(&self) -> &[ParameterMeta] {
        match &self.inner.shape {
            Shape::BoundMethod { function } => function.declared_parameters(),
            _ => &self.inner.params,
        }
    }

    /// Closed-over bindings, in capture order.
    #[must_use]
    pub fn captured_values(&self) -> &[Captured] {
        &self.inner.captured
    }

    /// Explicit origin marker, if a cooperating decorator left one.
    #[must_use]
    pub fn origin_marker(&self) -> Option<&Callable> {
        self.inner.wraps.as_ref()
    }

    /// For a bound method, the underlying function.
    #[must_use]
    pub fn underlying_function(&self) -> Option<&Callable> {
        match &self.inner.shape {
            Shape::BoundMethod { function } => Some(function),
            _ => None,
        }
    }

    /// Whether the first declared parameter is an implicit receiver.
    #[must_use]
    pub fn has_implicit_receiver(&self) -> bool {
        match &self.inner.shape {
            Shape::BoundMethod { function } => function.has_implicit_receiver(),
            _ => self.inner.receiver,
        }
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Callable {}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match &self.inner.shape {
            Shape::Function => "Function",
            Shape::BoundMethod { .. } => "BoundMethod",
            Shape::CallableObject => "CallableObject",
        };
        f.debug_struct("Callable")
            .field("shape", &shape)
            .field("name", &self.display_name())
            .finish()
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
