//! tagscan - list tagged AWS resources in a region, classified by service
//!
//! The binary in `main.rs` wires these modules to the command line.

pub mod aws;
pub mod config;
pub mod error;
pub mod output;
pub mod resource;

pub use error::ScanError;

/// Validate a region code such as `us-east-1` or `ap-southeast-2`
pub fn parse_region(value: &str) -> Result<String, ScanError> {
    let parts: Vec<&str> = value.split('-').collect();

    let well_formed = parts.len() >= 3
        && parts[0].len() == 2
        && parts[..parts.len() - 1]
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_lowercase()))
        && parts[parts.len() - 1]
            .chars()
            .all(|c| c.is_ascii_digit())
        && !parts[parts.len() - 1].is_empty();

    if well_formed {
        Ok(value.to_string())
    } else {
        Err(ScanError::Usage(format!(
            "'{}' is not a valid AWS region code (expected e.g. us-east-1)",
            value
        )))
    }
}
