//! AutoHotkey source emitter for lowered syntax trees.
//!
//! The [`Printer`] walks an [`ahk_ir::Expr`] or [`ahk_ir::Stmt`] and writes
//! AutoHotkey text into any [`std::fmt::Write`] sink. Calls the lowering stage
//! tagged as intrinsic are matched against a static registry
//! ([`intrinsics::INTRINSICS`]) and turned back into surface syntax: label
//! jumps, object indexing, indexed assignment and associative-array literals.
//!
//! ```
//! use ahk_emitter::Printer;
//! use ahk_ir::Expr;
//!
//! let expr = Expr::intrinsic("Index", vec![Expr::var("x"), Expr::int(1)]);
//! assert_eq!(Printer::emit_to_string(&expr).unwrap(), "x[1]");
//! ```
//!
//! Emission is all-or-nothing: the first [`EmitError`] aborts the call and
//! whatever was written to the sink before it should be discarded.

pub mod context;
pub mod error;
pub mod intrinsics;
pub mod operators;
pub mod printer;

mod expressions;
mod literals;
mod references;
mod statements;

pub use context::EmitContext;
pub use error::{EmitError, EmitResult};
pub use intrinsics::IntrinsicKind;
pub use printer::{PrintOptions, Printer};
