use serde::{Deserialize, Serialize};

use crate::expr::Expr;

/// Statement node.
///
/// Only the statements whose rendering is a single line of expression
/// syntax live here; block-structured control flow is emitted elsewhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stmt {
    /// Expression evaluated for its effect: `Foo(1)`
    Expression(Expr),

    /// Variable declaration: `x := value`
    VariableDeclaration {
        name: String,
        #[serde(default)]
        init: Option<Expr>,
    },

    /// Assignment: `left := right`
    Assignment { left: Expr, right: Expr },

    /// Return statement: `return` or `return value`
    Return(Option<Expr>),

    /// Jump to a label: `goto name`
    Goto(String),
}

impl Stmt {
    pub fn expr(expr: Expr) -> Self {
        Self::Expression(expr)
    }

    pub fn var_decl(name: impl Into<String>, init: Option<Expr>) -> Self {
        Self::VariableDeclaration {
            name: name.into(),
            init,
        }
    }

    pub fn assign(left: Expr, right: Expr) -> Self {
        Self::Assignment { left, right }
    }

    pub fn ret(value: Option<Expr>) -> Self {
        Self::Return(value)
    }

    pub fn goto(label: impl Into<String>) -> Self {
        Self::Goto(label.into())
    }
}
