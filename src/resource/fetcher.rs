//! Resource Fetcher
//!
//! Drives the paginated listing call and classifies every returned ARN.

use super::classifier::classify;
use super::record::{ResourceRecord, Tag};
use crate::aws::error::hint_for_code;
use crate::error::ScanError;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Resources requested per page
pub const PAGE_SIZE: i32 = 50;

/// One resource as returned by the listing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedResource {
    pub arn: String,
    pub tags: Vec<Tag>,
}

impl TaggedResource {
    pub fn new(arn: &str) -> Self {
        Self {
            arn: arn.to_string(),
            tags: Vec::new(),
        }
    }
}

/// One page of results.
///
/// `next_token` is `None` once the provider has no more pages; sources must
/// map an empty token to `None`.
#[derive(Debug, Clone, Default)]
pub struct TagPage {
    pub resources: Vec<TaggedResource>,
    pub next_token: Option<String>,
}

/// Failure reported by a [`TagSource`]
#[derive(Debug, Clone)]
pub struct SourceError {
    /// Provider error code, e.g. `ThrottlingException`
    pub code: Option<String>,
    pub message: String,
}

/// Paginated "list tagged resources" operation
#[async_trait]
pub trait TagSource: Send + Sync {
    /// Fetch one page. `token` is `None` for the first request.
    async fn get_page(&self, page_size: i32, token: Option<&str>)
        -> Result<TagPage, SourceError>;
}

/// What to do with a resource whose ARN cannot be classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordPolicy {
    /// Log it, count it, keep going
    #[default]
    Skip,
    /// Fail the whole run
    Abort,
}

/// Resource left out of the report under [`RecordPolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub arn: String,
    pub error: ScanError,
}

/// Result of a full pagination pass
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub records: Vec<ResourceRecord>,
    pub skipped: Vec<SkippedRecord>,
    pub pages: usize,
}

impl ScanReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Fetch every page from `source` and classify each resource for `region`.
///
/// Records keep the order the provider returned them in.
pub async fn collect_resources<S: TagSource + ?Sized>(
    source: &S,
    region: &str,
    policy: RecordPolicy,
    cancel: &CancellationToken,
) -> Result<ScanReport, ScanError> {
    let mut report = ScanReport::default();
    let mut token: Option<String> = None;

    loop {
        let page_index = report.pages + 1;

        if cancel.is_cancelled() {
            return Err(ScanError::Cancelled { page: page_index });
        }

        tracing::debug!(
            "Fetching page {} (token: {})",
            page_index,
            token.as_deref().unwrap_or("<none>")
        );

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ScanError::Cancelled { page: page_index }),
            result = source.get_page(PAGE_SIZE, token.as_deref()) => result,
        };

        let page = result.map_err(|e| {
            tracing::error!("Page {} failed: {}", page_index, e.message);
            ScanError::Api {
                page: page_index,
                hint: e.code.as_deref().and_then(hint_for_code).map(String::from),
                message: e.message,
            }
        })?;

        report.pages = page_index;
        tracing::debug!(
            "Page {} returned {} resources",
            page_index,
            page.resources.len()
        );

        for resource in page.resources {
            match classify(&resource.arn, region, resource.tags) {
                Ok(record) => report.records.push(record),
                Err(e) if policy == RecordPolicy::Skip => {
                    tracing::warn!("Skipping resource: {}", e);
                    report.skipped.push(SkippedRecord {
                        arn: resource.arn,
                        error: e,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        match page.next_token {
            None => break,
            Some(next) if token.as_deref() == Some(next.as_str()) => {
                return Err(ScanError::PaginationStalled {
                    page: page_index,
                    token: next,
                });
            }
            Some(next) => token = Some(next),
        }
    }

    tracing::info!(
        "Collected {} resources ({} skipped) over {} pages in {}",
        report.records.len(),
        report.skipped.len(),
        report.pages,
        region
    );

    Ok(report)
}
