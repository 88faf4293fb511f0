//! Core building blocks for quickentry.
//!
//! Date resolution and entity matching are the two leaves the task input
//! parser delegates to. Both are pure functions.

mod datetime;
mod entity;
mod matcher;
mod traits;

pub use datetime::{resolve_date, resolve_date_on, to_iso_date};
pub use entity::Entity;
pub use matcher::{find_entity, match_entity};
pub use traits::Named;
