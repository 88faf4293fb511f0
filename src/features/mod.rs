//! Feature implementations for quickentry.
//!
//! - Quick-entry task parsing
//! - Shell integration

pub mod nlp;
pub mod shell;
