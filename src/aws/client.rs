//! Tagging API client
//!
//! Wraps the Resource Groups Tagging API `GetResources` call behind
//! [`TagSource`] so the pagination driver never sees SDK types.

use crate::resource::{SourceError, Tag, TagPage, TagSource, TaggedResource};
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_resourcegroupstagging as tagging;
use aws_sdk_resourcegroupstagging::error::{DisplayErrorContext, ProvideErrorMetadata};

/// Resource Groups Tagging API client for one region
#[derive(Clone, Debug)]
pub struct TaggingClient {
    client: tagging::Client,
    region: String,
}

impl TaggingClient {
    /// Load credentials and settings from the default provider chain.
    ///
    /// SDK retries are disabled: a failed page is reported, not retried.
    pub async fn new(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        tracing::info!("Loaded AWS configuration for {}", region);

        Self {
            client: tagging::Client::new(&config),
            region: region.to_string(),
        }
    }

    /// Build from an explicit service config (custom endpoints, test credentials)
    pub fn from_conf(conf: tagging::Config) -> Self {
        let region = conf
            .region()
            .map(|r| r.to_string())
            .unwrap_or_default();

        Self {
            client: tagging::Client::from_conf(conf),
            region,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl TagSource for TaggingClient {
    async fn get_page(
        &self,
        page_size: i32,
        token: Option<&str>,
    ) -> Result<TagPage, SourceError> {
        let mut request = self.client.get_resources().resources_per_page(page_size);
        if let Some(token) = token {
            request = request.pagination_token(token);
        }

        let output = request.send().await.map_err(|e| SourceError {
            code: e.code().map(String::from),
            message: e
                .message()
                .map(String::from)
                .unwrap_or_else(|| DisplayErrorContext(&e).to_string()),
        })?;

        let resources = output
            .resource_tag_mapping_list
            .unwrap_or_default()
            .into_iter()
            .filter_map(|mapping| {
                let Some(arn) = mapping.resource_arn else {
                    tracing::warn!("Skipping tag mapping without an ARN");
                    return None;
                };
                let tags = mapping
                    .tags
                    .unwrap_or_default()
                    .into_iter()
                    .map(|tag| Tag {
                        key: tag.key,
                        value: tag.value,
                    })
                    .collect();
                Some(TaggedResource { arn, tags })
            })
            .collect();

        Ok(TagPage {
            resources,
            next_token: normalize_token(output.pagination_token),
        })
    }
}

/// AWS signals the last page with an empty token
fn normalize_token(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}
