//! Normalized resource records

use serde::Serialize;

/// Resource tag as returned by the tagging API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// One tagged resource, classified by service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub region: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    pub identifier: String,
    /// Short ARN (resource portion only)
    pub arn: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl ResourceRecord {
    /// Start a record; `identifier` defaults to the short ARN
    pub fn builder(region: &str, service: &str, short_arn: &str) -> ResourceRecordBuilder {
        ResourceRecordBuilder {
            region: region.to_string(),
            service: service.to_string(),
            product: None,
            identifier: None,
            arn: short_arn.to_string(),
            tags: Vec::new(),
        }
    }

    /// Product as displayed in the table (empty when unset)
    pub fn product_display(&self) -> &str {
        self.product.as_deref().unwrap_or("")
    }
}

/// Builder used by the classification strategies
#[derive(Debug, Clone)]
pub struct ResourceRecordBuilder {
    region: String,
    service: String,
    product: Option<String>,
    identifier: Option<String>,
    arn: String,
    tags: Vec<Tag>,
}

impl ResourceRecordBuilder {
    pub fn product(mut self, product: &str) -> Self {
        self.product = Some(product.to_string());
        self
    }

    pub fn identifier(mut self, identifier: &str) -> Self {
        self.identifier = Some(identifier.to_string());
        self
    }

    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn build(self) -> ResourceRecord {
        let identifier = self.identifier.unwrap_or_else(|| self.arn.clone());
        ResourceRecord {
            region: self.region,
            service: self.service,
            product: self.product,
            identifier,
            arn: self.arn,
            tags: self.tags,
        }
    }
}
