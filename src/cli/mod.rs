//! Command-line interface for quickentry.

pub mod args;
pub mod commands;
