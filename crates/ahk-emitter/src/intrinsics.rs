//! Intrinsic call recognition.
//!
//! The lowering stage encodes several constructs as calls on the marker
//! type. A call is an intrinsic only when it is tagged as a marker call and
//! its name and argument count both match a registry entry; every other
//! marker call is emitted as a plain call.

use std::fmt::Write;

use ahk_common::tokens;
use ahk_ir::{Expr, ScriptOperator};

use crate::context::EmitContext;
use crate::error::{EmitError, EmitResult};
use crate::operators::{assignment_text, script_operator_text};
use crate::printer::Printer;

/// Method names the lowering stage uses for intrinsic calls.
pub mod names {
    pub const LABEL_CALL: &str = "LabelCall";
    pub const IF_ELSE: &str = "IfElse";
    pub const OPERATE: &str = "Operate";
    pub const EXTEND_ARRAY: &str = "ExtendArray";
    pub const SET_OBJECT: &str = "SetObject";
    pub const INDEX: &str = "Index";
    pub const DICTIONARY: &str = "Dictionary";
}

/// Surface construct an intrinsic call encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntrinsicKind {
    /// `LabelCall("name")` -> `goto name`
    LabelJump,
    /// `IfElse(cond)` -> `cond`
    ConditionalPassthrough,
    /// `Operate(Operator.X, a, b)` -> `a op b`
    BinaryOperate,
    /// `ExtendArray(n)` -> nothing
    ArrayExtend,
    /// `SetObject(key, index, container, value)` -> `index container key := value`
    IndexedAssign,
    /// `Index(container, index)` -> `container[index]`
    IndexAccess,
    /// `Dictionary([keys], [values])` -> `{ k := v, ... }`
    MapLiteral,
}

/// Registry entry.
#[derive(Clone, Copy, Debug)]
pub struct Intrinsic {
    pub name: &'static str,
    pub arity: usize,
    pub kind: IntrinsicKind,
}

pub static INTRINSICS: [Intrinsic; 7] = [
    Intrinsic {
        name: names::LABEL_CALL,
        arity: 1,
        kind: IntrinsicKind::LabelJump,
    },
    Intrinsic {
        name: names::IF_ELSE,
        arity: 1,
        kind: IntrinsicKind::ConditionalPassthrough,
    },
    Intrinsic {
        name: names::OPERATE,
        arity: 3,
        kind: IntrinsicKind::BinaryOperate,
    },
    Intrinsic {
        name: names::EXTEND_ARRAY,
        arity: 1,
        kind: IntrinsicKind::ArrayExtend,
    },
    Intrinsic {
        name: names::SET_OBJECT,
        arity: 4,
        kind: IntrinsicKind::IndexedAssign,
    },
    Intrinsic {
        name: names::INDEX,
        arity: 2,
        kind: IntrinsicKind::IndexAccess,
    },
    Intrinsic {
        name: names::DICTIONARY,
        arity: 2,
        kind: IntrinsicKind::MapLiteral,
    },
];

/// Find the intrinsic registered for `name` called with `arity` arguments.
#[must_use]
pub fn lookup(name: &str, arity: usize) -> Option<&'static Intrinsic> {
    INTRINSICS
        .iter()
        .find(|entry| entry.name == name && entry.arity == arity)
}

impl<W: Write> Printer<W> {
    /// Emit a marker call as the construct it encodes. Returns `false`,
    /// having written nothing, when the call is not a registered intrinsic.
    pub(crate) fn try_emit_intrinsic(
        &mut self,
        method: &str,
        args: &[Expr],
        ctx: EmitContext,
    ) -> EmitResult<bool> {
        let Some(intrinsic) = lookup(method, args.len()) else {
            return Ok(false);
        };
        tracing::debug!(
            name = intrinsic.name,
            kind = ?intrinsic.kind,
            depth = ctx.depth,
            "emitting intrinsic"
        );

        match intrinsic.kind {
            IntrinsicKind::LabelJump => self.emit_label_jump(&args[0])?,
            IntrinsicKind::ConditionalPassthrough => self.emit(&args[0], ctx)?,
            IntrinsicKind::BinaryOperate => {
                self.emit_operate(&args[0], &args[1], &args[2], ctx)?;
            }
            IntrinsicKind::ArrayExtend => {}
            IntrinsicKind::IndexedAssign => {
                self.emit(&args[1], ctx.operand())?;
                self.emit(&args[2], ctx.operand())?;
                self.emit(&args[0], ctx.operand())?;
                self.write_space()?;
                self.write(assignment_text())?;
                self.write_space()?;
                self.emit(&args[3], ctx.operand())?;
            }
            IntrinsicKind::IndexAccess => {
                self.emit(&args[0], ctx.operand())?;
                self.write(tokens::ARRAY_OPEN)?;
                self.emit(&args[1], ctx.operand())?;
                self.write(tokens::ARRAY_CLOSE)?;
            }
            IntrinsicKind::MapLiteral => self.emit_map_literal(&args[0], &args[1], ctx)?,
        }
        Ok(true)
    }

    fn emit_label_jump(&mut self, label: &Expr) -> EmitResult {
        let Some(name) = string_literal(label) else {
            return Err(EmitError::malformed_intrinsic(
                names::LABEL_CALL,
                format!("label must be a string literal, found {}", describe(label)),
            ));
        };
        self.emit_goto(name)
    }

    fn emit_operate(
        &mut self,
        selector: &Expr,
        left: &Expr,
        right: &Expr,
        ctx: EmitContext,
    ) -> EmitResult {
        let Expr::FieldRef { field, .. } = selector else {
            return Err(EmitError::malformed_intrinsic(
                names::OPERATE,
                format!(
                    "operator selector must be a field reference, found {}",
                    selector.kind()
                ),
            ));
        };
        let op: ScriptOperator = field.parse().map_err(|_| {
            EmitError::malformed_intrinsic(names::OPERATE, format!("unknown operator `{field}`"))
        })?;

        self.emit(left, ctx.operand())?;
        self.write_space()?;
        self.write(script_operator_text(op))?;
        self.write_space()?;
        self.emit(right, ctx.operand())
    }

    /// Shape is checked before anything is written.
    fn emit_map_literal(&mut self, keys: &Expr, values: &Expr, ctx: EmitContext) -> EmitResult {
        let (Expr::ArrayLiteral(keys), Expr::ArrayLiteral(values)) = (keys, values) else {
            return Err(EmitError::malformed_intrinsic(
                names::DICTIONARY,
                format!(
                    "keys and values must be array literals, found {} and {}",
                    keys.kind(),
                    values.kind()
                ),
            ));
        };
        if keys.len() != values.len() {
            return Err(EmitError::malformed_intrinsic(
                names::DICTIONARY,
                format!("{} keys but {} values", keys.len(), values.len()),
            ));
        }

        if keys.is_empty() {
            self.write(tokens::BLOCK_OPEN)?;
            return self.write(tokens::BLOCK_CLOSE);
        }

        self.write(tokens::BLOCK_OPEN)?;
        self.write_space()?;
        for (i, (key, value)) in keys.iter().zip(values).enumerate() {
            if i > 0 {
                self.write_list_separator()?;
            }
            self.emit(key, ctx.nested())?;
            self.write_space()?;
            self.write(assignment_text())?;
            self.write_space()?;
            self.emit(value, ctx.nested())?;
        }
        self.write_space()?;
        self.write(tokens::BLOCK_CLOSE)
    }
}

fn string_literal(expr: &Expr) -> Option<&str> {
    match expr {
        Expr::Primitive(value) => value.as_str(),
        _ => None,
    }
}

fn describe(expr: &Expr) -> &'static str {
    match expr {
        Expr::Primitive(value) => value.kind(),
        other => other.kind(),
    }
}
