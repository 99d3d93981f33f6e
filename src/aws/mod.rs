//! AWS API interaction module
//!
//! # Module Structure
//!
//! - [`client`] - Resource Groups Tagging API client
//! - [`error`] - User-facing hints for AWS error codes
//!
//! # Example
//!
//! ```ignore
//! use tagscan::aws::client::TaggingClient;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = TaggingClient::new("us-east-1").await;
//!     let page = client.get_page(50, None).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
