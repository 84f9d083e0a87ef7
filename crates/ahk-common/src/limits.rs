//! Centralized limits for the emitter.
//!
//! Trees handed to the emitter are built by an external lowering stage and
//! are only guaranteed to be finite. Every recursive descent in the emitter
//! increments a depth counter; these constants bound it so a pathological
//! tree produces a generation error instead of a stack overflow.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth for expression emission.
///
/// Each nested operand, argument, element, or map entry adds one level.
/// Lowered AutoHotkey rarely goes past a few dozen levels; chains of
/// concatenation operators are the usual deep case:
///
/// ```autohotkey
/// msg := (((("a" . b) . "c") . d) . "e")
/// ```
pub const MAX_EMIT_DEPTH: u32 = 512;

/// Depth limit used on WASM targets, where the stack is far smaller.
pub const WASM_MAX_EMIT_DEPTH: u32 = 128;

/// Default depth limit for the current target.
#[must_use]
pub const fn default_max_emit_depth() -> u32 {
    if cfg!(target_arch = "wasm32") {
        WASM_MAX_EMIT_DEPTH
    } else {
        MAX_EMIT_DEPTH
    }
}
