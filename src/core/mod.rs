// Core modules implementing parsing, embedded-JSON resolution, formatting, and error modeling.
pub mod error;
pub mod format;
pub mod parse;
pub mod resolve;
