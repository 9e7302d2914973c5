use crate::auth::hash_password;
use crate::error::Error;
use crate::secret_store::SecretStore;
use std::collections::HashMap;

/// A fixed map of secrets, optionally failing every read.
#[derive(Default, Debug, Clone)]
pub struct InMemorySecretStore {
    secrets: HashMap<String, String>,
    failure: Option<String>,
}

impl InMemorySecretStore {
    /// Store `value` verbatim under `reference`.
    #[must_use]
    pub fn with_secret(mut self, reference: &str, value: &str) -> Self {
        self.secrets.insert(reference.to_string(), value.to_string());
        self
    }

    /// Store the digest of `password` under `reference`, as a deployment would.
    #[must_use]
    pub fn with_password(self, reference: &str, password: &str) -> Self {
        let digest = hash_password(password);
        self.with_secret(reference, &digest)
    }

    /// A store whose every read fails with [`Error::SecretStore`].
    #[must_use]
    pub fn failing(detail: &str) -> Self {
        Self {
            secrets: HashMap::default(),
            failure: Some(detail.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl SecretStore for InMemorySecretStore {
    async fn get_secret(&self, reference: &str) -> Result<Option<String>, Error> {
        if let Some(detail) = &self.failure {
            return Err(Error::SecretStore(detail.clone()));
        }
        Ok(self.secrets.get(reference).cloned())
    }
}
