//! Purpose: Shared core library crate used by the `jsonlens` CLI and tests.
//! Exports: `core` (parse, resolve, format, errors), `assist`, `render`, `api`.
//! Role: Internal library backing the binary; not yet a stable public SDK.
//! Invariants: Treat the crate API as internal until a dedicated library release.
//! Invariants: Core functions are pure; expected failures are values, not panics.
pub mod api;
pub mod assist;
pub mod core;
pub mod render;
