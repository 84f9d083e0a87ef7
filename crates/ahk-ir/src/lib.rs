//! Lowered syntax-tree object model for the ahkgen emitter.
//!
//! An earlier parsing/lowering stage builds these trees; the emitter walks
//! them and writes AutoHotkey source. Nodes are plain immutable data: every
//! variant carries only what its rendering rule needs.
//!
//! # Structure
//!
//! - [`Expr`]: the closed set of expression variants
//! - [`Stmt`]: the statement shapes the emitter is handed
//! - [`Primitive`]: literal values
//! - [`BinaryOperator`] / [`ScriptOperator`]: operator codes
//!
//! Builder helpers (`Expr::var`, `Expr::call`, `Expr::intrinsic`, ...) keep
//! tree construction in tests and tools short.

pub mod expr;
pub mod operators;
pub mod primitive;
pub mod stmt;

pub use expr::{Expr, QualifiedName, TypeRef};
pub use operators::{BinaryOperator, ScriptOperator};
pub use primitive::Primitive;
pub use stmt::Stmt;

pub use rust_decimal::Decimal;
