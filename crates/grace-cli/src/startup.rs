//! Startup checks for the `grace` binary.

use aws_config::SdkConfig;
use aws_credential_types::provider::ProvideCredentials;

/// Resolve AWS credentials once, before any boundary client is built.
///
/// The default provider chain always installs a provider, so its mere
/// presence proves nothing; credentials have to be fetched to find out
/// whether the chain can actually produce any.
const NO_CREDENTIALS: &str =
    "AWS credentials are not configured; set them up or disable the [iam]/[llm] sections";

pub async fn ensure_aws_credentials(aws: &SdkConfig) -> anyhow::Result<()> {
    let provider = aws
        .credentials_provider()
        .ok_or_else(|| anyhow::anyhow!(NO_CREDENTIALS))?;
    provider
        .provide_credentials()
        .await
        .map_err(|e| anyhow::Error::new(e).context(NO_CREDENTIALS))?;
    Ok(())
}
