use std::fmt::Write;

use ahk_common::tokens;
use ahk_ir::{BinaryOperator, Expr};

use crate::context::EmitContext;
use crate::error::{EmitError, EmitResult};
use crate::intrinsics::lookup;
use crate::operators::{binary_operator_text, ternary_tokens};
use crate::printer::Printer;

impl<W: Write> Printer<W> {
    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Emit any expression node.
    pub(crate) fn emit(&mut self, expr: &Expr, ctx: EmitContext) -> EmitResult {
        if ctx.depth > self.options.max_depth {
            return Err(EmitError::DepthLimitExceeded {
                limit: self.options.max_depth,
            });
        }

        match expr {
            Expr::Invocation {
                target,
                method,
                args,
                intrinsic,
            } => self.emit_invocation(target.as_deref(), method, args, *intrinsic, ctx),
            Expr::ArrayLiteral(elements) => self.emit_array(elements, ctx),
            Expr::ComplexReference(name) => self.emit_qualified_name(name, ctx),
            Expr::Primitive(value) => self.emit_primitive(value),
            Expr::BinaryOp {
                operator,
                left,
                right,
            } => self.emit_binary(*operator, left, right, ctx),
            Expr::TernaryOp {
                condition,
                when_true,
                when_false,
            } => self.emit_ternary(condition, when_true, when_false, ctx),
            Expr::VariableRef(name) => self.write(name),
            Expr::FieldRef { target, field } => {
                self.emit_field_reference(target.as_deref(), field, ctx)
            }
            Expr::TypeRef(type_ref) => self.emit_type_reference(type_ref),
            Expr::This | Expr::Cast { .. } => {
                Err(EmitError::UnsupportedExpression { kind: expr.kind() })
            }
        }
    }

    // =========================================================================
    // Calls
    // =========================================================================

    fn emit_invocation(
        &mut self,
        target: Option<&Expr>,
        method: &str,
        args: &[Expr],
        intrinsic: bool,
        ctx: EmitContext,
    ) -> EmitResult {
        if intrinsic {
            // A marker call may only target the internal type, or nothing.
            if let Some(target) = target.filter(|t| !is_internal_type(t)) {
                let name = lookup(method, args.len()).map_or("marker call", |entry| entry.name);
                return Err(EmitError::malformed_intrinsic(
                    name,
                    format!(
                        "`{method}` is tagged as a marker call but targets {}",
                        target.kind()
                    ),
                ));
            }
            if self.try_emit_intrinsic(method, args, ctx)? {
                return Ok(());
            }
            tracing::trace!(
                method,
                arity = args.len(),
                "marker call matches no intrinsic, emitting as a plain call"
            );
        }

        // Calls on the internal runtime type are written bare.
        if let Some(target) = target {
            if !is_internal_type(target) {
                self.emit(target, ctx.nested())?;
                self.write(tokens::CONCATENATE)?;
            }
        }

        self.write(method)?;
        self.write(tokens::PAREN_OPEN)?;
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.write_list_separator()?;
            }
            self.emit(arg, ctx.nested())?;
        }
        self.write(tokens::PAREN_CLOSE)
    }

    // =========================================================================
    // Operators
    // =========================================================================

    /// Binary expressions are parenthesized everywhere except as the whole
    /// body of an expression statement.
    fn emit_binary(
        &mut self,
        operator: BinaryOperator,
        left: &Expr,
        right: &Expr,
        ctx: EmitContext,
    ) -> EmitResult {
        let wrap = !ctx.statement;

        if wrap {
            self.write(tokens::PAREN_OPEN)?;
        }

        self.emit(left, ctx.nested())?;
        self.write_space()?;
        self.write(binary_operator_text(operator))?;
        self.write_space()?;
        self.emit(right, ctx.nested())?;

        if wrap {
            self.write(tokens::PAREN_CLOSE)?;
        }
        Ok(())
    }

    fn emit_ternary(
        &mut self,
        condition: &Expr,
        when_true: &Expr,
        when_false: &Expr,
        ctx: EmitContext,
    ) -> EmitResult {
        let (question, colon) = ternary_tokens();

        self.emit(condition, ctx.nested())?;
        self.write_space()?;
        self.write(question)?;
        self.write_space()?;
        self.emit(when_true, ctx.nested())?;
        self.write_space()?;
        self.write(colon)?;
        self.write_space()?;
        self.emit(when_false, ctx.nested())
    }

    // =========================================================================
    // Arrays
    // =========================================================================

    fn emit_array(&mut self, elements: &[Expr], ctx: EmitContext) -> EmitResult {
        self.write(tokens::ARRAY_OPEN)?;
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.write_list_separator()?;
            }
            self.emit(element, ctx.nested())?;
        }
        self.write(tokens::ARRAY_CLOSE)
    }
}

/// Whether the expression references the internal runtime type, whose name
/// is never written.
pub(crate) fn is_internal_type(expr: &Expr) -> bool {
    matches!(expr, Expr::TypeRef(type_ref) if type_ref.internal)
}
