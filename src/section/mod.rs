//! Course sections and the catalog adapter that builds them.

mod catalog;
mod error;
mod section;

pub use catalog::{sections_from_catalog, CatalogEntry};
pub use error::CatalogError;
pub use section::{distinct_by_id, elective_group, Section};
