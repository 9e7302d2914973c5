use crate::error::Error;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub type SharedOperatingConfig = Arc<OperatingConfig>;

pub const SECRET_PARAMETER_ENV: &str = "SSM_PASSWORD_PARAMETER_NAME";
pub const ZONE_ID_ENV: &str = "HOSTED_ZONE_ID";
pub const DOMAIN_SUFFIX_ENV: &str = "DOMAIN_NAME";
pub const API_BIND_ADDR_ENV: &str = "API_BIND_ADDR";

/// The three parameters the update pipeline can't operate without. Resolved once before any
/// request is served and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatingConfig {
    /// Name of the secret store parameter holding the hex SHA-256 digest of the password.
    pub secret_parameter_ref: String,
    /// Hosted zone that receives the upserts.
    pub zone_id: String,
    /// Appended to every caller supplied subdomain.
    pub domain_suffix: String,
}

impl OperatingConfig {
    /// Resolve the operating parameters from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] naming the first variable that is unset or empty.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the operating parameters through an arbitrary lookup function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] naming the first variable that is unset or empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let required = |name: &'static str| match lookup(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(Error::MissingConfig(name)),
        };
        Ok(Self {
            secret_parameter_ref: required(SECRET_PARAMETER_ENV)?,
            zone_id: required(ZONE_ID_ENV)?,
            domain_suffix: required(DOMAIN_SUFFIX_ENV)?,
        })
    }
}

/// HTTP listener settings. Optional: every field has a default.
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub api_bind_addr: SocketAddr,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub api_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)),
            api_timeout: Duration::from_secs(30),
        }
    }
}

impl ServerConfig {
    /// Load a [`ServerConfig`] from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the file can't be read and [`Error::InvalidJSON`] if it doesn't
    /// parse.
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: ServerConfig = serde_json::from_reader(reader)?;
        Ok(conf)
    }

    /// Apply `API_BIND_ADDR` from the environment, if set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the variable isn't a socket address.
    pub fn with_env_overrides(self) -> Result<Self, Error> {
        self.with_lookup_overrides(|name| std::env::var(name).ok())
    }

    fn with_lookup_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Error> {
        if let Some(value) = lookup(API_BIND_ADDR_ENV) {
            self.api_bind_addr = value.parse().map_err(|_| Error::InvalidConfig {
                name: API_BIND_ADDR_ENV,
                value,
            })?;
        }
        Ok(self)
    }
}
