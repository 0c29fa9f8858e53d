//! Command implementations for the cover-ignore CLI.

pub mod filter;
