//! Service classification
//!
//! Each service identifier maps to a [`ServiceKind`], which knows how to turn
//! a short ARN into a [`ResourceRecord`]. Services without a dedicated kind
//! fall back to [`ServiceKind::Generic`] so every resource is still listed.
//!
//! Adding a service means adding one row to [`SERVICE_KINDS`].

use super::arn::{decompose, PATH_SEPARATOR};
use super::record::{ResourceRecord, Tag};
use crate::error::ScanError;

/// Decomposition strategy for a service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// Identifier is the whole short ARN, no product
    Generic,
    /// `ec2`: `<product>/<id>`
    ComputeInstance,
    /// `ecs`: `<product>/<id>`
    ContainerOrchestration,
}

/// Services with a dedicated strategy
const SERVICE_KINDS: &[(&str, ServiceKind)] = &[
    ("ec2", ServiceKind::ComputeInstance),
    ("ecs", ServiceKind::ContainerOrchestration),
];

impl ServiceKind {
    /// Look up the strategy for a service identifier
    pub fn for_service(service: &str) -> Self {
        SERVICE_KINDS
            .iter()
            .find(|(name, _)| *name == service)
            .map(|(_, kind)| *kind)
            .unwrap_or(ServiceKind::Generic)
    }

    /// Build a record from an already-shortened ARN
    pub fn build(
        self,
        short_arn: &str,
        service: &str,
        region: &str,
        tags: Vec<Tag>,
    ) -> Result<ResourceRecord, ScanError> {
        let builder = ResourceRecord::builder(region, service, short_arn).tags(tags);

        match self {
            ServiceKind::Generic => Ok(builder.build()),
            ServiceKind::ComputeInstance | ServiceKind::ContainerOrchestration => {
                let (product, identifier) = split_product(short_arn, service)?;
                Ok(builder.product(product).identifier(identifier).build())
            }
        }
    }
}

/// First two `/`-separated segments as (product, identifier)
fn split_product<'a>(short_arn: &'a str, service: &str) -> Result<(&'a str, &'a str), ScanError> {
    let mut segments = short_arn.split(PATH_SEPARATOR);
    match (segments.next(), segments.next()) {
        (Some(product), Some(identifier)) => Ok((product, identifier)),
        _ => Err(ScanError::MalformedResourcePath {
            service: service.to_string(),
            short_arn: short_arn.to_string(),
        }),
    }
}

/// Classify a full ARN into a record for `region`
pub fn classify(arn: &str, region: &str, tags: Vec<Tag>) -> Result<ResourceRecord, ScanError> {
    let parts = decompose(arn)?;
    ServiceKind::for_service(&parts.service).build(&parts.short_arn, &parts.service, region, tags)
}
