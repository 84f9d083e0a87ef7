//! Emission state threaded through recursive emission.
//!
//! The context is a `Copy` value passed down by parameter. A callee receives
//! its own copy, so the caller's statement flag and depth are untouched on
//! every return path, error paths included, and independent trees can be
//! emitted concurrently with independent printers.

/// Statement flag and nesting depth for one emission call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmitContext {
    /// True only for the outermost expression of an expression statement.
    pub statement: bool,
    /// Number of nested descents from the root of the emission call.
    pub depth: u32,
}

impl EmitContext {
    /// Context at the root of an emission call.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            statement: false,
            depth: 0,
        }
    }

    /// Context for the outermost expression of an expression statement.
    #[must_use]
    pub const fn statement(self) -> Self {
        Self {
            statement: true,
            depth: self.depth,
        }
    }

    /// Context for a sub-expression one level deeper.
    #[must_use]
    pub const fn nested(self) -> Self {
        Self {
            statement: false,
            depth: self.depth.saturating_add(1),
        }
    }

    /// Context for a sub-expression emitted at the same depth.
    #[must_use]
    pub const fn operand(self) -> Self {
        Self {
            statement: false,
            depth: self.depth,
        }
    }
}

#[cfg(test)]
#[path = "../tests/emit_context.rs"]
mod tests;
