//! Expression nodes.
//!
//! The lowering stage encodes several surface constructs (jumps, object
//! indexing, associative arrays) as calls on a marker type rather than as
//! dedicated nodes. Those calls are ordinary [`Expr::Invocation`]s with the
//! `intrinsic` tag set; [`Expr::intrinsic`] builds them.

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::operators::BinaryOperator;
use crate::primitive::Primitive;

/// Expression node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    // =========================================================================
    // Calls
    // =========================================================================
    /// Method invocation: `target.method(args)` or bare `method(args)`.
    Invocation {
        /// `None` for an implicit self/bare call.
        #[serde(default)]
        target: Option<Box<Self>>,
        method: String,
        #[serde(default)]
        args: Vec<Self>,
        /// Set by the lowering stage when the call targets the marker type,
        /// i.e. when the call may encode an intrinsic.
        #[serde(default)]
        intrinsic: bool,
    },

    // =========================================================================
    // Literals
    // =========================================================================
    /// Array literal: `[a, b, c]`
    ArrayLiteral(Vec<Self>),

    /// Literal value: `"text"`, `42`, `true`
    Primitive(Primitive),

    // =========================================================================
    // Operators
    // =========================================================================
    /// Binary expression: `left op right`
    BinaryOp {
        operator: BinaryOperator,
        left: Box<Self>,
        right: Box<Self>,
    },

    /// Conditional expression: `cond ? then : else`
    TernaryOp {
        condition: Box<Self>,
        when_true: Box<Self>,
        when_false: Box<Self>,
    },

    // =========================================================================
    // References
    // =========================================================================
    /// Variable whose name is static or built from resolved segments.
    ComplexReference(QualifiedName),

    /// Plain variable: `foo`
    VariableRef(String),

    /// Field of an optional target.
    FieldRef {
        #[serde(default)]
        target: Option<Box<Self>>,
        field: String,
    },

    /// Type name, used as the target of static calls.
    TypeRef(TypeRef),

    // =========================================================================
    // Nodes without an AutoHotkey rendering
    // =========================================================================
    /// Receiver reference produced for object-oriented backends.
    This,

    /// Explicit conversion produced for statically typed backends.
    Cast { target_type: String, expr: Box<Self> },
}

/// Name payload of a [`Expr::ComplexReference`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualifiedName {
    /// Statically known name.
    Literal(String),
    /// Literal segments (primitives) interleaved with nested references that
    /// are resolved at run time: `pre%name%post`.
    Parts(Vec<Expr>),
}

/// Reference to a type by fully-qualified name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    /// Internal runtime type: its name never appears in the output.
    #[serde(default)]
    pub internal: bool,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal: false,
        }
    }

    pub fn internal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal: true,
        }
    }
}

// =========================================================================
// Builder helpers for tree construction
// =========================================================================

impl Expr {
    /// Variant name for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Create a variable reference
    pub fn var(name: impl Into<String>) -> Self {
        Self::VariableRef(name.into())
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::Primitive(Primitive::String(s.into()))
    }

    /// Create an integer literal
    pub fn int(n: i64) -> Self {
        Self::Primitive(Primitive::Integer(n))
    }

    /// Create a floating-point literal
    pub fn float(n: f64) -> Self {
        Self::Primitive(Primitive::Float(n))
    }

    /// Create a boolean literal
    pub fn boolean(b: bool) -> Self {
        Self::Primitive(Primitive::Boolean(b))
    }

    /// Create the null literal
    pub fn null() -> Self {
        Self::Primitive(Primitive::Null)
    }

    /// Create a binary expression
    pub fn binary(left: Self, operator: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a conditional expression
    pub fn ternary(condition: Self, when_true: Self, when_false: Self) -> Self {
        Self::TernaryOp {
            condition: Box::new(condition),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
        }
    }

    /// Create a bare call: `name(args)`
    pub fn call(method: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Invocation {
            target: None,
            method: method.into(),
            args,
            intrinsic: false,
        }
    }

    /// Create a method call on a target: `target.name(args)`
    pub fn method(target: Self, method: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Invocation {
            target: Some(Box::new(target)),
            method: method.into(),
            args,
            intrinsic: false,
        }
    }

    /// Create a call on the marker type.
    pub fn intrinsic(method: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Invocation {
            target: None,
            method: method.into(),
            args,
            intrinsic: true,
        }
    }

    /// Create a field reference
    pub fn field(target: Option<Self>, field: impl Into<String>) -> Self {
        Self::FieldRef {
            target: target.map(Box::new),
            field: field.into(),
        }
    }

    /// Create an array literal
    pub fn array(elements: Vec<Self>) -> Self {
        Self::ArrayLiteral(elements)
    }

    /// Create a type reference
    pub fn type_ref(name: impl Into<String>) -> Self {
        Self::TypeRef(TypeRef::new(name))
    }

    /// Create a reference to the internal runtime type
    pub fn internal_type(name: impl Into<String>) -> Self {
        Self::TypeRef(TypeRef::internal(name))
    }

    /// Create a statically named complex reference
    pub fn complex(name: impl Into<String>) -> Self {
        Self::ComplexReference(QualifiedName::Literal(name.into()))
    }

    /// Create a complex reference from name segments
    pub fn complex_parts(parts: Vec<Self>) -> Self {
        Self::ComplexReference(QualifiedName::Parts(parts))
    }
}

impl From<Primitive> for Expr {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}
