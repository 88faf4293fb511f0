//! quickentry - quick-entry task parser
//!
//! Turns a single free-text line into structured task-creation fields:
//! inline `#context`, `+project`, `do:date` and `due:date` tokens are
//! extracted, names are fuzzy-matched against caller-supplied entity lists,
//! and natural-language dates are resolved against a reference time.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::{match_entity, resolve_date, Entity};
pub use error::QuickEntryError;
pub use features::nlp::{parse_task_input, CreateTaskRequest, ParseResult};
