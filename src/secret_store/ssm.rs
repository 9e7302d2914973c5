//! AWS Systems Manager Parameter Store implementation of [`SecretStore`][super::SecretStore].
use crate::error::Error;
use crate::secret_store::SecretStore;
use aws_config::SdkConfig;
use aws_sdk_ssm::error::{DisplayErrorContext, SdkError};
use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use aws_sdk_ssm::Client;

/// Reads secrets with `GetParameter`, decrypting `SecureString` parameters.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct SsmSecretStore {
    client: Client,
}

impl SsmSecretStore {
    #[must_use]
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

fn error_detail(err: &SdkError<GetParameterError>) -> String {
    match err {
        SdkError::ServiceError(service_err) => service_err.err().to_string(),
        SdkError::TimeoutError(_) => "request to SSM timed out".to_string(),
        _ => DisplayErrorContext(err).to_string(),
    }
}

#[async_trait::async_trait]
impl SecretStore for SsmSecretStore {
    async fn get_secret(&self, reference: &str) -> Result<Option<String>, Error> {
        let output = self
            .client
            .get_parameter()
            .name(reference)
            .with_decryption(true)
            .send()
            .await
            .map_err(|err| Error::SecretStore(error_detail(&err)))?;
        Ok(output
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(str::to_string))
    }
}
