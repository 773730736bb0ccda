pub mod cache;
pub mod cli;
pub mod error;
pub mod parse;
pub mod record;
pub mod store;
pub mod tracing;

pub use error::{ParseError, Result, Violation};
pub use parse::{CANONICAL_BINDING, emit_index, parse_index};
pub use record::{Category, IndexRecord};
pub use store::IndexStore;
