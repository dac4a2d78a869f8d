//! flowmeta-core: element instance metadata for process-instance views.
//!
//! The heart of the crate is [`build_instance_metadata`], a pure function
//! that merges an element instance with its optional linked records (job,
//! called process instance, decision instance, user-task fields) into one
//! flat [`InstanceMetadata`]. Around it:
//!
//! - [`resolve`] picks linked records out of search-result pages.
//! - [`summary`] derives the popover's headline rows.

pub mod aggregate;
pub mod duration;
mod error;
pub mod resolve;
pub mod summary;

pub use aggregate::{
    build_from_sources, build_instance_metadata, InstanceMetadata, InstanceMetadataBuilder,
    MetadataState,
};
pub use error::MetadataError;
pub use resolve::resolve_linked_records;
pub use summary::{MetadataSummary, SummaryOptions};

/// Read a metadata sources document and aggregate it.
pub fn metadata_from_sources_json(
    doc: &serde_json::Value,
) -> Result<InstanceMetadata, MetadataError> {
    let sources = flowmeta_records::from_sources_json(doc)?;
    Ok(build_from_sources(&sources))
}

/// Read a linked pages document, resolve its linked records and aggregate.
pub fn metadata_from_pages_json(
    doc: &serde_json::Value,
) -> Result<InstanceMetadata, MetadataError> {
    let pages = flowmeta_records::from_pages_json(doc)?;
    Ok(build_from_sources(&resolve_linked_records(&pages)))
}
