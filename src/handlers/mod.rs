//! HTTP handlers for collection list, read and create.

pub mod collection;
pub use collection::*;
