//! Read access to the stored password digest.
//!
//! Two implementations are provided, [`ssm::SsmSecretStore`] backed by AWS Systems Manager
//! Parameter Store, and [`memory::InMemorySecretStore`] for tests and local runs.

use crate::error::Error;
use std::sync::Arc;

pub mod memory;
pub mod ssm;

#[allow(clippy::module_name_repetitions)]
pub use memory::InMemorySecretStore;
#[allow(clippy::module_name_repetitions)]
pub use ssm::SsmSecretStore;

/// `DynSecretStore` is a shareable handle to any [`SecretStore`].
#[allow(clippy::module_name_repetitions)]
pub type DynSecretStore = Arc<dyn SecretStore + Send + Sync>;

/// An async trait describing a store of named secret values. The update pipeline only ever
/// reads from it.
#[async_trait::async_trait]
pub trait SecretStore {
    /// Get the value stored under `reference`, or `None` if the store holds no value for it.
    async fn get_secret(&self, reference: &str) -> Result<Option<String>, Error>;
}
