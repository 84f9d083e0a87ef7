use std::fmt::Write;

use ahk_common::tokens;
use ahk_ir::{Expr, Stmt};

use crate::context::EmitContext;
use crate::error::EmitResult;
use crate::operators::assignment_text;
use crate::printer::Printer;

impl<W: Write> Printer<W> {
    // =========================================================================
    // Statements
    // =========================================================================

    /// Emit one statement with an explicit context, without a line terminator.
    pub fn emit_statement_in(&mut self, stmt: &Stmt, ctx: EmitContext) -> EmitResult {
        match stmt {
            Stmt::Expression(expr) => self.emit(expr, ctx.statement()),
            Stmt::VariableDeclaration { name, init } => {
                self.emit_variable_declaration(name, init.as_ref(), ctx)
            }
            Stmt::Assignment { left, right } => self.emit_assignment(left, right, ctx),
            Stmt::Return(value) => self.emit_return(value.as_ref(), ctx),
            Stmt::Goto(label) => self.emit_goto(label),
        }
    }

    /// Emit a statement list, one statement per line, each indented by
    /// `indent_level` levels.
    #[tracing::instrument(level = "trace", skip_all, fields(count = stmts.len(), indent_level = indent_level))]
    pub fn emit_statements(&mut self, stmts: &[Stmt], indent_level: usize) -> EmitResult {
        for stmt in stmts {
            self.write_indent(indent_level)?;
            self.emit_statement_in(stmt, EmitContext::root())?;
            self.write_line()?;
        }
        Ok(())
    }

    fn emit_variable_declaration(
        &mut self,
        name: &str,
        init: Option<&Expr>,
        ctx: EmitContext,
    ) -> EmitResult {
        self.write(name)?;
        self.write_assignment()?;
        match init {
            Some(init) => self.emit(init, ctx.nested()),
            None => self.write(tokens::NULL_TXT),
        }
    }

    fn emit_assignment(&mut self, left: &Expr, right: &Expr, ctx: EmitContext) -> EmitResult {
        self.emit(left, ctx.operand())?;
        self.write_assignment()?;
        self.emit(right, ctx.operand())
    }

    fn emit_return(&mut self, value: Option<&Expr>, ctx: EmitContext) -> EmitResult {
        self.write(tokens::FLOW_RETURN)?;
        if let Some(value) = value {
            self.write_space()?;
            self.emit(value, ctx.nested())?;
        }
        Ok(())
    }

    pub(crate) fn emit_goto(&mut self, label: &str) -> EmitResult {
        self.write(tokens::FLOW_GOTO)?;
        self.write_space()?;
        self.write(label)
    }

    /// ` := `
    fn write_assignment(&mut self) -> EmitResult {
        self.write_space()?;
        self.write(assignment_text())?;
        self.write_space()
    }
}
