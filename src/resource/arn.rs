//! ARN decomposition
//!
//! Splits `arn:aws:<service>:<region>:<account>:<resource...>` into the service
//! identifier and the short ARN (resource portion only).

use crate::error::ScanError;

/// Only the commercial partition is accepted
const ARN_PREFIX: &str = "arn:aws:";

/// `arn`, partition, service, region, account, resource
const MIN_SEGMENTS: usize = 6;

/// Index of the first resource segment
const RESOURCE_INDEX: usize = 5;

/// Separator used when rejoining resource segments
pub const PATH_SEPARATOR: &str = "/";

/// Decomposed ARN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArnParts {
    pub service: String,
    pub short_arn: String,
}

/// Extract the service identifier and short ARN from a full ARN
pub fn decompose(arn: &str) -> Result<ArnParts, ScanError> {
    let segments: Vec<&str> = arn.split(':').collect();

    if segments.len() < MIN_SEGMENTS {
        return Err(invalid(arn, "expected at least 6 ':'-separated segments"));
    }

    if !arn.starts_with(ARN_PREFIX) {
        return Err(invalid(arn, "missing 'arn:aws:' prefix"));
    }

    let service = segments[2];
    if service.is_empty() {
        return Err(invalid(arn, "empty service identifier"));
    }

    Ok(ArnParts {
        service: service.to_string(),
        short_arn: segments[RESOURCE_INDEX..].join(PATH_SEPARATOR),
    })
}

/// Service identifier of an ARN
pub fn service_name(arn: &str) -> Result<String, ScanError> {
    decompose(arn).map(|parts| parts.service)
}

/// Resource portion of an ARN, joined with `/`
pub fn short_arn(arn: &str) -> Result<String, ScanError> {
    decompose(arn).map(|parts| parts.short_arn)
}

fn invalid(arn: &str, reason: &'static str) -> ScanError {
    ScanError::InvalidArnFormat {
        arn: arn.to_string(),
        reason,
    }
}
