// cover-ignore/src/lib.rs
//! # cover-ignore CLI Application
//!
//! This crate provides the command-line shell around `cover-ignore-core`:
//! argument and environment parsing, logging setup, and the file I/O of the
//! filter operation.

pub mod cli;
pub mod commands;
pub mod logger;
