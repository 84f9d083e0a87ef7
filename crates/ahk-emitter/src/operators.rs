//! Operator table: operator codes to AutoHotkey tokens.
//!
//! Both enumerations are closed, so the mapping is total and an unknown code
//! cannot reach the printer.

use ahk_common::tokens;
use ahk_ir::{BinaryOperator, ScriptOperator};

/// Token for the operator of a `BinaryOp` node.
#[must_use]
pub const fn binary_operator_text(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::Add => "+",
        BinaryOperator::Subtract => "-",
        BinaryOperator::Multiply => "*",
        BinaryOperator::Divide => "/",
        BinaryOperator::Assign => tokens::ASSIGN,
        BinaryOperator::IdentityEquality => "==",
        BinaryOperator::IdentityInequality => "!=",
        BinaryOperator::ValueEquality => "=",
        BinaryOperator::BitwiseOr => "|",
        BinaryOperator::BitwiseAnd => "&",
        BinaryOperator::BooleanOr => "||",
        BinaryOperator::BooleanAnd => "&&",
        BinaryOperator::LessThan => "<",
        BinaryOperator::LessThanOrEqual => "<=",
        BinaryOperator::GreaterThan => ">",
        BinaryOperator::GreaterThanOrEqual => ">=",
    }
}

/// Token for a runtime operator selected by an `Operate` intrinsic.
#[must_use]
pub const fn script_operator_text(op: ScriptOperator) -> &'static str {
    match op {
        ScriptOperator::Add => "+",
        ScriptOperator::Subtract => "-",
        ScriptOperator::Multiply => "*",
        ScriptOperator::Divide => "/",
        ScriptOperator::FloorDivide => "//",
        ScriptOperator::Power => "**",
        ScriptOperator::Concat => tokens::CONCATENATE,
        ScriptOperator::BitShiftLeft => "<<",
        ScriptOperator::BitShiftRight => ">>",
        ScriptOperator::BitwiseAnd => "&",
        ScriptOperator::BitwiseOr => "|",
        ScriptOperator::BitwiseXor => "^",
        ScriptOperator::BooleanAnd => "&&",
        ScriptOperator::BooleanOr => "||",
        ScriptOperator::ValueEquality => "=",
        ScriptOperator::IdentityEquality => "==",
        ScriptOperator::ValueInequality => "!=",
        ScriptOperator::IdentityInequality => "!==",
        ScriptOperator::LessThan => "<",
        ScriptOperator::LessThanOrEqual => "<=",
        ScriptOperator::GreaterThan => ">",
        ScriptOperator::GreaterThanOrEqual => ">=",
        ScriptOperator::Assign => tokens::ASSIGN,
        ScriptOperator::RegEx => "~=",
    }
}

/// The two tokens of a conditional expression, in source order.
#[must_use]
pub const fn ternary_tokens() -> (&'static str, &'static str) {
    (tokens::TERNARY_A, tokens::TERNARY_B)
}

/// Assignment token used by declarations, assignments, indexed assignment
/// and map entries.
#[must_use]
pub const fn assignment_text() -> &'static str {
    tokens::ASSIGN
}
