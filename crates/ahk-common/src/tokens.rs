//! Lexical tokens of the AutoHotkey expression grammar.
//!
//! Renderers write these constants rather than inline literals so that the
//! operator table, the literal renderer and the intrinsic recognizer agree on
//! one vocabulary.

// =========================================================================
// Whitespace and punctuation
// =========================================================================

pub const SPACE: &str = " ";
pub const PAREN_OPEN: &str = "(";
pub const PAREN_CLOSE: &str = ")";
pub const ARRAY_OPEN: &str = "[";
pub const ARRAY_CLOSE: &str = "]";
pub const BLOCK_OPEN: &str = "{";
pub const BLOCK_CLOSE: &str = "}";

/// Separator between list items (call arguments, array elements, map entries).
pub const MULTICAST: &str = ",";

/// Member access and concatenation share one token in AutoHotkey.
pub const CONCATENATE: &str = ".";

/// Delimits a dynamically resolved segment of a variable name: `pre%name%post`.
pub const RESOLVE: &str = "%";

// =========================================================================
// Assignment
// =========================================================================

/// First half of the expression assignment token.
pub const ASSIGN_PRE: &str = ":";
pub const EQUAL: &str = "=";
/// The full expression assignment token, `ASSIGN_PRE` followed by `EQUAL`.
pub const ASSIGN: &str = ":=";

// =========================================================================
// Ternary
// =========================================================================

pub const TERNARY_A: &str = "?";
pub const TERNARY_B: &str = ":";

// =========================================================================
// Literals
// =========================================================================

pub const STRING_BOUND: char = '"';
/// Escape character inside string literals.
pub const ESCAPE: char = '`';
/// AutoHotkey has no null; the empty string stands in for it.
pub const NULL_TXT: &str = "\"\"";
pub const TRUE_TXT: &str = "true";
pub const FALSE_TXT: &str = "false";

// =========================================================================
// Flow keywords
// =========================================================================

pub const FLOW_RETURN: &str = "return";
pub const FLOW_GOTO: &str = "goto";
