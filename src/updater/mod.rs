//! The update pipeline: validate, authenticate, upsert, describe the outcome.
//!
//! Every request runs the stages in order, and each stage gates the next. A request that fails
//! validation never reaches the secret store, and a request that fails authentication never
//! reaches the DNS provider. A successful request makes exactly one upsert call.

use crate::auth;
use crate::config::SharedOperatingConfig;
use crate::dns_provider::DynDnsProvider;
use crate::error::Error;
use crate::record::RecordSet;
use crate::secret_store::DynSecretStore;
use serde_json::json;
use std::sync::Arc;

mod request;

pub use request::{UpdateRecordRequest, ValidUpdate};

pub const TEXT_PLAIN: &str = "text/plain";
pub const APPLICATION_JSON: &str = "application/json";

pub type SharedUpdater = Arc<Updater>;

/// A completed update: the response body to send back and its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub body: String,
    pub content_type: &'static str,
}

impl UpdateOutcome {
    /// The caller's `ok_resp_body` verbatim as `text/plain` if given (even when empty), else a
    /// JSON message describing `record`.
    fn new(record: &RecordSet, ok_resp_body: Option<String>) -> Result<Self, Error> {
        let (body, content_type) = match ok_resp_body {
            Some(body) => (body, TEXT_PLAIN),
            None => {
                let message = format!(
                    "DNS record for {} upserted: {}",
                    record.name,
                    serde_json::to_string(record)?
                );
                (json!({ "message": message }).to_string(), APPLICATION_JSON)
            }
        };
        Ok(Self { body, content_type })
    }
}

/// Runs update requests against the injected secret store and DNS provider.
pub struct Updater {
    config: SharedOperatingConfig,
    secret_store: DynSecretStore,
    dns_provider: DynDnsProvider,
}

impl Updater {
    #[must_use]
    pub fn new(
        config: SharedOperatingConfig,
        secret_store: DynSecretStore,
        dns_provider: DynDnsProvider,
    ) -> Self {
        Self {
            config,
            secret_store,
            dns_provider,
        }
    }

    /// Validate `request`, authenticate its password and upsert its record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameters`] for incomplete requests, [`Error::InvalidTtl`] for a
    /// `ttl` that isn't a whole number, [`Error::InvalidPassword`] for a wrong password, and [`Error::SecretUnavailable`], [`Error::SecretStore`] or
    /// [`Error::DnsProvider`] when an upstream service fails.
    pub async fn handle(&self, request: UpdateRecordRequest) -> Result<UpdateOutcome, Error> {
        let update = request.validate().map_err(|err| {
            tracing::debug!("rejected update request: {err}");
            err
        })?;

        if let Err(err) = auth::authenticate(
            &self.secret_store,
            &self.config.secret_parameter_ref,
            &update.password,
        )
        .await
        {
            match &err {
                Error::InvalidPassword => {
                    tracing::warn!(
                        "rejected update for \"{}\": invalid password",
                        update.subdomain
                    );
                }
                _ => {
                    tracing::error!(
                        "could not authenticate update for \"{}\": {err}",
                        update.subdomain
                    );
                }
            }
            return Err(err);
        }

        let record = RecordSet::single(
            &update.subdomain,
            &self.config.domain_suffix,
            &update.record_type,
            update.ttl,
            &update.new_val,
        );
        tracing::info!(
            "upserting {} {} -> \"{}\" (ttl {})",
            record.record_type,
            record.name,
            update.new_val,
            record.ttl
        );
        if let Err(err) = self
            .dns_provider
            .upsert_record(&self.config.zone_id, &record)
            .await
        {
            tracing::error!("upsert of {} {} failed: {err}", record.record_type, record.name);
            return Err(err);
        }

        UpdateOutcome::new(&record, update.ok_resp_body)
    }
}
