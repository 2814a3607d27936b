//! Purpose: Define the stable public Rust API boundary for jsonlens.
//! Exports: Core types and operations needed by the CLI and embedding hosts.
//! Role: Public, additive-only surface; hides internal module layout.
//! Invariants: This module is the only import path the CLI uses into the core.
//! Invariants: Re-exports stay additive; renames happen behind this boundary.

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::format::{to_compact, to_pretty};
pub use crate::core::parse::{ParseOutcome, parse};
pub use crate::core::resolve::{
    DEFAULT_DECODE_DEPTH, MAX_DECODE_DEPTH, MIN_DECODE_DEPTH, ResolveConfig, resolve,
    resolve_top_level,
};
pub use crate::assist::{Assistant, RepairOutcome, repair_invalid};
