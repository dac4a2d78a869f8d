//! flowmeta-records: typed process-engine records for metadata aggregation.
//!
//! Provides serde structs for the records a process-instance view fetches
//! for a selected element (element instance, job, called process instance,
//! decision instance, user task), the enumerations they carry, and two
//! document entry points:
//!
//! - [`from_sources_json`] reads an element instance plus its already
//!   selected linked records into [`MetadataSources`].
//! - [`from_pages_json`] reads an element instance plus raw search pages
//!   into [`LinkedPages`].

pub mod deserialize;
pub mod enums;
mod error;
pub mod types;

pub use deserialize::{from_pages_json, from_sources_json};
pub use enums::*;
pub use error::RecordError;
pub use types::*;
