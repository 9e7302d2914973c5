//! Upserting resource record sets at a DNS hosting provider.
//!
//! [`route53::Route53Provider`] talks to AWS Route 53. [`memory::InMemoryDnsProvider`] keeps
//! zones in memory and logs every call, for tests and local runs.

use crate::error::Error;
use crate::record::RecordSet;
use std::sync::Arc;

pub mod memory;
pub mod route53;

#[allow(clippy::module_name_repetitions)]
pub use memory::InMemoryDnsProvider;
pub use route53::Route53Provider;

/// `DynDnsProvider` is a shareable handle to any [`DnsProvider`].
#[allow(clippy::module_name_repetitions)]
pub type DynDnsProvider = Arc<dyn DnsProvider + Send + Sync>;

#[async_trait::async_trait]
pub trait DnsProvider {
    /// Create `record` in `zone_id`, or fully replace the existing set with the same name and
    /// type. Submitting the same record twice leaves the zone as the first call did.
    async fn upsert_record(&self, zone_id: &str, record: &RecordSet) -> Result<(), Error>;
}
