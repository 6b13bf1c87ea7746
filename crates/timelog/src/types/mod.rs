//! Core types: the render-time data model and the logged time entry.

mod entry;
mod model;

pub use entry::{FormError, TimeEntry};
pub use model::Model;
