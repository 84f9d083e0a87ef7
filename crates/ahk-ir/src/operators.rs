//! Operator codes carried by the tree.
//!
//! Two enumerations exist because the lowering stage produces binary
//! expressions in two forms: plain `BinaryOp` nodes carrying a
//! [`BinaryOperator`], and calls to the runtime `Operate` intrinsic whose
//! first argument names a [`ScriptOperator`] member as a field reference.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Operator code of a `BinaryOp` node.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Assign,
    IdentityEquality,
    IdentityInequality,
    ValueEquality,
    BitwiseOr,
    BitwiseAnd,
    BooleanOr,
    BooleanAnd,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

/// Runtime operator selected by name in an `Operate` intrinsic call.
///
/// Member names are part of the contract with the lowering stage: the
/// operator travels as the field name of a `FieldRef`, and is recovered
/// with [`str::parse`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum ScriptOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    Power,
    Concat,
    BitShiftLeft,
    BitShiftRight,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BooleanAnd,
    BooleanOr,
    ValueEquality,
    IdentityEquality,
    ValueInequality,
    IdentityInequality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Assign,
    RegEx,
}

impl ScriptOperator {
    /// Member name, as it appears in the lowered `FieldRef`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}
