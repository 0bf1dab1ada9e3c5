//! Database module
//!
//! The in-memory collection of value records for one configuration store.

mod record;
mod store;

pub use record::ValueRecord;
pub use store::Database;
