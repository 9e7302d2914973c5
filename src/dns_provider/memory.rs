use crate::dns_provider::DnsProvider;
use crate::error::Error;
use crate::record::RecordSet;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Record sets keyed by lower-cased name and upper-cased type, as the provider compares them.
type Zone = HashMap<(String, String), RecordSet>;

/// Zones held in memory. Every [`DnsProvider::upsert_record`] call is logged, whether it
/// succeeds or not, so callers can count them.
#[derive(Default, Debug)]
pub struct InMemoryDnsProvider {
    zones: RwLock<HashMap<String, Zone>>,
    calls: RwLock<Vec<(String, RecordSet)>>,
    failure: Option<String>,
}

impl InMemoryDnsProvider {
    /// A provider that rejects every upsert with [`Error::DnsProvider`].
    #[must_use]
    pub fn failing(detail: &str) -> Self {
        Self {
            failure: Some(detail.to_string()),
            ..Self::default()
        }
    }

    /// Every upsert submitted so far, as `(zone_id, record)`, oldest first.
    pub async fn calls(&self) -> Vec<(String, RecordSet)> {
        self.calls.read().await.clone()
    }

    /// The record set currently held for `name` and `record_type` in `zone_id`.
    pub async fn get_record(
        &self,
        zone_id: &str,
        name: &str,
        record_type: &str,
    ) -> Option<RecordSet> {
        self.zones
            .read()
            .await
            .get(zone_id)
            .and_then(|zone| zone.get(&key(name, record_type)))
            .cloned()
    }

    /// Every record set held in `zone_id`.
    pub async fn zone_records(&self, zone_id: &str) -> Vec<RecordSet> {
        self.zones
            .read()
            .await
            .get(zone_id)
            .map_or(Vec::default(), |zone| zone.values().cloned().collect())
    }
}

fn key(name: &str, record_type: &str) -> (String, String) {
    (name.to_ascii_lowercase(), record_type.to_ascii_uppercase())
}

#[async_trait::async_trait]
impl DnsProvider for InMemoryDnsProvider {
    async fn upsert_record(&self, zone_id: &str, record: &RecordSet) -> Result<(), Error> {
        self.calls
            .write()
            .await
            .push((zone_id.to_string(), record.clone()));
        if let Some(detail) = &self.failure {
            return Err(Error::DnsProvider(detail.clone()));
        }
        self.zones
            .write()
            .await
            .entry(zone_id.to_string())
            .or_default()
            .insert(key(&record.name, &record.record_type), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_creates_then_replaces() {
        let provider = InMemoryDnsProvider::default();
        let first = RecordSet::single("home", "example.com", "A", 300, "1.2.3.4");
        let second = RecordSet::single("home", "example.com", "A", 60, "5.6.7.8");

        provider.upsert_record("Z1", &first).await.unwrap();
        assert_eq!(
            provider.get_record("Z1", "home.example.com", "A").await,
            Some(first)
        );

        provider.upsert_record("Z1", &second).await.unwrap();
        assert_eq!(provider.zone_records("Z1").await, vec![second]);
        assert_eq!(provider.calls().await.len(), 2);
    }

    #[tokio::test]
    async fn repeated_upsert_is_idempotent() {
        let provider = InMemoryDnsProvider::default();
        let record = RecordSet::single("home", "example.com", "A", 300, "1.2.3.4");

        provider.upsert_record("Z1", &record).await.unwrap();
        let after_first = provider.zone_records("Z1").await;
        provider.upsert_record("Z1", &record).await.unwrap();

        assert_eq!(provider.zone_records("Z1").await, after_first);
        assert_eq!(provider.calls().await.len(), 2);
    }

    #[tokio::test]
    async fn types_are_kept_apart() {
        let provider = InMemoryDnsProvider::default();
        provider
            .upsert_record("Z1", &RecordSet::single("home", "example.com", "A", 300, "1.2.3.4"))
            .await
            .unwrap();
        provider
            .upsert_record("Z1", &RecordSet::single("home", "example.com", "AAAA", 300, "::1"))
            .await
            .unwrap();
        assert_eq!(provider.zone_records("Z1").await.len(), 2);
        assert!(provider.get_record("Z2", "home.example.com", "A").await.is_none());
    }

    #[tokio::test]
    async fn failing_provider_logs_call_but_keeps_zone_empty() {
        let provider = InMemoryDnsProvider::failing("InvalidChangeBatch");
        let record = RecordSet::single("home", "example.com", "A", 300, "1.2.3.4");

        let err = provider.upsert_record("Z1", &record).await.unwrap_err();
        assert_eq!(err.to_string(), "DNS provider error: InvalidChangeBatch");
        assert_eq!(provider.calls().await.len(), 1);
        assert!(provider.zone_records("Z1").await.is_empty());
    }
}
