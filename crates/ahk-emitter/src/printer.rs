//! The printer: output sink, options, and public entry points.
//!
//! Rendering rules live in sibling modules as further `impl Printer` blocks:
//! - `expressions`: the dispatcher, calls, operators, arrays
//! - `intrinsics`: marker-call recognition
//! - `literals` / `references`: leaves
//! - `statements`: statement adapters

use std::fmt::Write;

use ahk_common::NewLineKind;
use ahk_common::limits;
use ahk_ir::{Expr, Stmt};

use crate::context::EmitContext;
use crate::error::EmitResult;

/// Emitter configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    /// Escape quotes, backticks and control characters inside string
    /// literals. Off by default: the lowering stage hands over string
    /// values already in source form.
    pub escape_strings: bool,
    /// Write `.` between a field reference's target and its name.
    pub field_separator: bool,
    /// Deepest nesting accepted before emission fails.
    pub max_depth: u32,
    /// Line terminator written after each statement by `emit_statements`.
    pub new_line: NewLineKind,
    /// One level of indentation for `emit_statements`.
    pub indent: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            escape_strings: false,
            field_separator: false,
            max_depth: limits::default_max_emit_depth(),
            new_line: NewLineKind::LineFeed,
            indent: "    ".to_string(),
        }
    }
}

/// Writes AutoHotkey source for lowered trees into a text sink.
pub struct Printer<W = String> {
    pub(crate) writer: W,
    pub(crate) options: PrintOptions,
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, PrintOptions::default())
    }

    pub fn with_options(writer: W, options: PrintOptions) -> Self {
        Self { writer, options }
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// Text written so far.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Emit an expression in expression (not statement) position.
    pub fn emit_expression(&mut self, expr: &Expr) -> EmitResult {
        self.emit_expression_in(expr, EmitContext::root())
    }

    /// Emit an expression with an explicit context.
    pub fn emit_expression_in(&mut self, expr: &Expr, ctx: EmitContext) -> EmitResult {
        self.emit(expr, ctx)
    }

    /// Emit an expression as the whole body of an expression statement.
    pub fn emit_expression_statement(&mut self, expr: &Expr) -> EmitResult {
        self.emit_expression_in(expr, EmitContext::root().statement())
    }

    /// Emit one statement, without a line terminator.
    pub fn emit_statement(&mut self, stmt: &Stmt) -> EmitResult {
        self.emit_statement_in(stmt, EmitContext::root())
    }

    // =========================================================================
    // Output helpers
    // =========================================================================

    pub(crate) fn write(&mut self, text: &str) -> EmitResult {
        self.writer.write_str(text)?;
        Ok(())
    }

    pub(crate) fn write_char(&mut self, ch: char) -> EmitResult {
        self.writer.write_char(ch)?;
        Ok(())
    }

    pub(crate) fn write_space(&mut self) -> EmitResult {
        self.write(ahk_common::tokens::SPACE)
    }

    /// Write `, ` between list items.
    pub(crate) fn write_list_separator(&mut self) -> EmitResult {
        self.write(ahk_common::tokens::MULTICAST)?;
        self.write_space()
    }

    pub(crate) fn write_line(&mut self) -> EmitResult {
        let new_line = self.options.new_line.as_str();
        self.write(new_line)
    }

    pub(crate) fn write_indent(&mut self, level: usize) -> EmitResult {
        for _ in 0..level {
            self.writer.write_str(&self.options.indent)?;
        }
        Ok(())
    }
}

impl Printer<String> {
    /// Emit an expression into a fresh string.
    pub fn emit_to_string(expr: &Expr) -> EmitResult<String> {
        let mut printer = Self::new(String::new());
        printer.emit_expression(expr)?;
        Ok(printer.finish())
    }

    /// Emit a statement into a fresh string.
    pub fn statement_to_string(stmt: &Stmt) -> EmitResult<String> {
        let mut printer = Self::new(String::new());
        printer.emit_statement(stmt)?;
        Ok(printer.finish())
    }

    pub fn finish(self) -> String {
        self.writer
    }
}
