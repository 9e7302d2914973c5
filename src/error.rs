//! Error types.

/// Error enumerates the possible error states of the update endpoint.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned at startup when one of the required operating parameters is absent or empty
    /// in the environment. See [`OperatingConfig`][crate::config::OperatingConfig].
    #[error("{0} environment variable is not set.")]
    MissingConfig(&'static str),

    /// Returned at startup when an optional setting is present but can't be parsed.
    #[error("invalid value for {name}: \"{value}\"")]
    InvalidConfig { name: &'static str, value: String },

    /// Returned when an update request lacks `subdomain`, `password` or `newVal`, or one of them
    /// is empty.
    #[error("Missing required parameters: subdomain, password, and newVal are required.")]
    MissingParameters,

    /// Returned when a complete update request carries a `ttl` that isn't a whole number of
    /// seconds.
    #[error("Invalid ttl \"{0}\": must be a whole number of seconds.")]
    InvalidTtl(String),

    /// Returned when the SHA-256 digest of the supplied password doesn't match the stored secret.
    #[error("Invalid password.")]
    InvalidPassword,

    /// Returned when the secret store answered but holds no value for the configured reference.
    #[error("Failed to retrieve the password from the secret store.")]
    SecretUnavailable,

    /// Returned when the secret store can't be reached or refuses the read.
    #[error("secret store error: {0}")]
    SecretStore(String),

    /// Returned when the DNS provider rejects or fails the upsert change.
    #[error("DNS provider error: {0}")]
    DnsProvider(String),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when a [`ServerConfig`][crate::config::ServerConfig] file holds invalid JSON,
    /// or a response body can't be serialized.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}
