//! Common types and utilities for the ahkgen emitter.
//!
//! This crate provides foundational items used across the ahkgen crates:
//! - Surface-syntax tokens of the AutoHotkey expression grammar (`tokens`)
//! - Output line endings (`NewLineKind`)
//! - Emitter recursion limits

// Surface tokens - the lexical vocabulary shared by every renderer
pub mod tokens;

// Common types
pub mod common;
pub use common::NewLineKind;

// Centralized limits and thresholds
pub mod limits;
