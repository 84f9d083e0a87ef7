use std::fmt;

use thiserror::Error;

/// Generation failure.
///
/// Every variant other than `Write` means the incoming tree violates the
/// emitter's input contract; they point at a defect in the lowering stage,
/// not at anything the script author can fix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmitError {
    #[error("unrecognised expression: {kind}")]
    UnsupportedExpression { kind: &'static str },

    #[error("unrecognised primitive: {value}")]
    UnsupportedLiteral { value: String },

    #[error("malformed complex reference: unexpected {part} part")]
    MalformedReference { part: &'static str },

    #[error("malformed `{name}` intrinsic: {reason}")]
    MalformedIntrinsic { name: &'static str, reason: String },

    #[error("expression nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: u32 },

    #[error("failed to write to the output sink")]
    Write(#[from] fmt::Error),
}

pub type EmitResult<T = ()> = Result<T, EmitError>;

impl EmitError {
    pub(crate) fn malformed_intrinsic(name: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedIntrinsic {
            name,
            reason: reason.into(),
        }
    }
}
