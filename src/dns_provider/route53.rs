use crate::dns_provider::DnsProvider;
use crate::error::Error;
use crate::record::RecordSet;
use aws_config::SdkConfig;
use aws_sdk_route53::error::{BuildError, DisplayErrorContext, SdkError};
use aws_sdk_route53::operation::change_resource_record_sets::ChangeResourceRecordSetsError;
use aws_sdk_route53::types::{
    Change, ChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType,
};
use aws_sdk_route53::Client;

/// Submits each record as a one-change `UPSERT` batch through `ChangeResourceRecordSets`.
#[derive(Debug, Clone)]
pub struct Route53Provider {
    client: Client,
}

impl Route53Provider {
    #[must_use]
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

fn error_detail(err: &SdkError<ChangeResourceRecordSetsError>) -> String {
    match err {
        SdkError::ServiceError(service_err) => service_err.err().to_string(),
        SdkError::TimeoutError(_) => "request to Route 53 timed out".to_string(),
        _ => DisplayErrorContext(err).to_string(),
    }
}

fn invalid_change(err: BuildError) -> Error {
    Error::DnsProvider(format!("invalid change: {err}"))
}

fn resource_record_set(record: &RecordSet) -> Result<ResourceRecordSet, Error> {
    let resource_records = record
        .values()
        .map(|value| ResourceRecord::builder().value(value).build())
        .collect::<Result<Vec<_>, _>>()
        .map_err(invalid_change)?;
    ResourceRecordSet::builder()
        .name(&record.name)
        .r#type(RrType::from(record.record_type.as_str()))
        .ttl(i64::from(record.ttl))
        .set_resource_records(Some(resource_records))
        .build()
        .map_err(invalid_change)
}

fn upsert_batch(record: &RecordSet) -> Result<ChangeBatch, Error> {
    let change = Change::builder()
        .action(ChangeAction::Upsert)
        .resource_record_set(resource_record_set(record)?)
        .build()
        .map_err(invalid_change)?;
    ChangeBatch::builder()
        .changes(change)
        .build()
        .map_err(invalid_change)
}

#[async_trait::async_trait]
impl DnsProvider for Route53Provider {
    async fn upsert_record(&self, zone_id: &str, record: &RecordSet) -> Result<(), Error> {
        let batch = upsert_batch(record)?;
        self.client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|err| Error::DnsProvider(error_detail(&err)))?;
        tracing::debug!("route 53 accepted upsert of {} {}", record.record_type, record.name);
        Ok(())
    }
}
