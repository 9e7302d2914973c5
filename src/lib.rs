//! Route 53 DDNS
//!
//! A small dynamic DNS update endpoint in front of [AWS Route 53]. Clients such as [inadyn]
//! call it with a subdomain, a password and a new record value; when the password's SHA-256
//! digest matches the one kept in [SSM Parameter Store], the record is upserted in the
//! configured hosted zone.
//!
//! Three environment variables must be set before the service will start:
//!
//! * `SSM_PASSWORD_PARAMETER_NAME`: the parameter holding the hex SHA-256 password digest.
//! * `HOSTED_ZONE_ID`: the hosted zone receiving the upserts.
//! * `DOMAIN_NAME`: the suffix appended to every subdomain.
//!
//! [AWS Route 53]: https://aws.amazon.com/route53/
//! [inadyn]: https://github.com/troglobit/inadyn
//! [SSM Parameter Store]: https://docs.aws.amazon.com/systems-manager/latest/userguide/systems-manager-parameter-store.html
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod auth;
pub mod config;
pub mod dns_provider;
pub mod error;
pub mod record;
pub mod secret_store;
pub mod updater;

pub use api::new as new_http;
pub use config::{OperatingConfig, ServerConfig};
pub use dns_provider::{InMemoryDnsProvider, Route53Provider};
pub use record::RecordSet;
pub use secret_store::{InMemorySecretStore, SsmSecretStore};
pub use updater::{UpdateRecordRequest, Updater};
