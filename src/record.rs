//! The DNS resource record set submitted to the provider.

use serde::{Deserialize, Serialize};

pub const DEFAULT_RECORD_TYPE: &str = "A";
pub const DEFAULT_TTL: u32 = 300;

/// A resource record set: every value served for one (name, type) pair.
///
/// Serializes in the provider's own shape, e.g.
/// `{"Name":"home.example.com","Type":"A","TTL":300,"ResourceRecords":[{"Value":"1.2.3.4"}]}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RecordSet {
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "TTL")]
    pub ttl: u32,
    pub resource_records: Vec<ResourceRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecord {
    pub value: String,
}

impl RecordSet {
    /// A single-valued record set for `subdomain` under `domain_suffix`.
    #[must_use]
    pub fn single(
        subdomain: &str,
        domain_suffix: &str,
        record_type: &str,
        ttl: u32,
        value: &str,
    ) -> Self {
        Self {
            name: format!("{subdomain}.{domain_suffix}"),
            record_type: record_type.to_string(),
            ttl,
            resource_records: vec![ResourceRecord {
                value: value.to_string(),
            }],
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.resource_records.iter().map(|rr| rr.value.as_str())
    }
}
