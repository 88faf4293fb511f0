//! Quick-entry parsing for task input.
//!
//! This module turns a single line such as:
//! - "Call Bob #Work do:tomorrow"
//! - "Ship release +Website due:mar 15"
//! - "Plan trip #Personal do:sat due:2w"
//!
//! into a title plus context, project, when and deadline fields.

mod parser;
mod request;

pub use parser::{parse_task_input, ParseResult, RawTokens, TokenKind};
pub use request::CreateTaskRequest;
