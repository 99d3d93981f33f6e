//! Resource classification layer
//!
//! Turns the raw ARNs returned by the tagging API into [`ResourceRecord`]s.
//!
//! # Architecture
//!
//! - [`arn`] - Splits an ARN into service identifier and short ARN
//! - [`classifier`] - Per-service decomposition strategies
//! - [`record`] - The normalized record and its builder
//! - [`fetcher`] - Pagination driver over a [`TagSource`]
//!
//! # Example
//!
//! ```ignore
//! use tagscan::resource::{collect_resources, RecordPolicy};
//! use tokio_util::sync::CancellationToken;
//!
//! async fn list(source: &impl TagSource) -> anyhow::Result<()> {
//!     let report =
//!         collect_resources(source, "us-east-1", RecordPolicy::Skip, &CancellationToken::new())
//!             .await?;
//!     println!("{} resources", report.records.len());
//!     Ok(())
//! }
//! ```

pub mod arn;
pub mod classifier;
mod fetcher;
mod record;

pub use classifier::{classify, ServiceKind};
pub use fetcher::{
    collect_resources, RecordPolicy, ScanReport, SkippedRecord, SourceError, TagPage, TagSource,
    TaggedResource, PAGE_SIZE,
};
pub use record::{ResourceRecord, ResourceRecordBuilder, Tag};
