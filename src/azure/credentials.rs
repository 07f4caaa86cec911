//! Credential sources and session resolution.
//!
//! Authentication itself is delegated to `azure_identity`; this module only
//! decides which credential sources are allowed to participate and resolves
//! the subscription the rest of the pipeline targets.

use super::subscriptions::list_subscriptions;
use crate::config;
use crate::error::PipelineError;
use azure_core::auth::{AccessToken, TokenCredential};
use azure_identity::DefaultAzureCredentialBuilder;

/// A credential source the resolver may consult.
///
/// Probe precedence is the provider's documented chain order:
/// environment, then managed identity, then az CLI login state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Service-principal settings from AZURE_* environment variables.
    Environment,
    /// IMDS managed identity of the hosting VM/service.
    ManagedIdentity,
    /// Token from the local `az` CLI login state.
    AzureCli,
}

/// Explicit enumeration of the accepted credential sources.
///
/// Replaces ambient default-credential discovery so a run's behavior does
/// not depend on an open-ended process-global lookup. The default accepts
/// the same chain the original tool used.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub sources: Vec<CredentialSource>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            sources: vec![
                CredentialSource::Environment,
                CredentialSource::ManagedIdentity,
                CredentialSource::AzureCli,
            ],
        }
    }
}

/// Authenticated handle the collector runs against: an HTTP client, the ARM
/// bearer token and the resolved subscription id.
pub struct ArmSession {
    pub(crate) http: reqwest::Client,
    token: AccessToken,
    pub subscription_id: String,
}

impl ArmSession {
    pub(crate) fn bearer(&self) -> &str {
        self.token.token.secret()
    }
}

/// Obtain an authenticated session and resolve the target subscription.
///
/// Targets the first subscription in ARM listing order, same as the
/// original tool. Multi-subscription accounts therefore hit the same
/// subscription on every run, absent upstream ordering changes.
///
/// # Returns
/// * `Ok(ArmSession)` - session handle for the collector
/// * `Err(PipelineError::Authentication)` - no configured source yielded a token
/// * `Err(PipelineError::NoSubscription)` - the account has zero subscriptions
pub async fn resolve_session(resolver_config: &ResolverConfig) -> Result<ArmSession, PipelineError> {
    log::info!(
        "#Start resolve_session() sources={:?}",
        resolver_config.sources
    );

    if resolver_config.sources.is_empty() {
        return Err(PipelineError::Authentication(
            "no credential sources configured".to_string(),
        ));
    }

    let mut builder = DefaultAzureCredentialBuilder::new();
    if !resolver_config.sources.contains(&CredentialSource::Environment) {
        builder.exclude_environment_credential();
    }
    if !resolver_config
        .sources
        .contains(&CredentialSource::ManagedIdentity)
    {
        builder.exclude_managed_identity_credential();
    }
    if !resolver_config.sources.contains(&CredentialSource::AzureCli) {
        builder.exclude_azure_cli_credential();
    }
    let credential = builder.build();

    let token = credential
        .get_token(&[config::ARM_SCOPE])
        .await
        .map_err(|e| PipelineError::Authentication(e.to_string()))?;

    let http = reqwest::Client::new();
    let subscriptions = list_subscriptions(&http, token.token.secret())
        .await
        .map_err(|e| PipelineError::Authentication(format!("listing subscriptions: {e}")))?;

    // First subscription in listing order, a documented tie-break.
    let first = subscriptions
        .into_iter()
        .next()
        .ok_or(PipelineError::NoSubscription)?;
    log::info!(
        "using subscription {} ({})",
        first.subscription_id,
        first.display_name.as_deref().unwrap_or("unnamed"),
    );

    Ok(ArmSession {
        http,
        token,
        subscription_id: first.subscription_id,
    })
}
