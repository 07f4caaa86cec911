//! Resource group and resource listing.
//!
//! Builds the [`ResourceInventory`] the emitter consumes: every resource
//! group of the subscription, then every resource scoped to each group, in
//! upstream listing order. No filtering, no dedup, no sorting.

use super::arm::{fetch_all_pages, ArmError};
use super::credentials::ArmSession;
use crate::config;
use crate::error::PipelineError;
use crate::models::{ResourceDescriptor, ResourceGroup, ResourceInventory};
use serde::Deserialize;

/// One resource group record from the ARM listing. Only the name feeds the
/// inventory; the group's resources come from a second listing call.
#[derive(Deserialize, Debug)]
pub(crate) struct ResourceGroupRecord {
    pub name: String,
}

/// Collect the full resource inventory of the session's subscription.
///
/// Fail-fast: a listing fault on any group aborts the whole run with
/// [`PipelineError::Collection`]; there is no partial-result mode.
pub async fn collect_resources(session: &ArmSession) -> Result<ResourceInventory, PipelineError> {
    log::info!(
        "#Start collect_resources() subscription={}",
        session.subscription_id
    );

    let groups_url = format!(
        "{}/subscriptions/{}/resourcegroups?api-version={}",
        config::ARM_ENDPOINT,
        session.subscription_id,
        config::API_VERSION_RESOURCES,
    );
    let group_records: Vec<ResourceGroupRecord> =
        fetch_all_pages(&session.http, session.bearer(), groups_url)
            .await
            .map_err(|e| collection_error("resource groups".to_string(), e))?;
    log::info!("found {} resource groups", group_records.len());

    let mut inventory = ResourceInventory::default();
    for record in group_records {
        let resources_url = format!(
            "{}/subscriptions/{}/resourceGroups/{}/resources?api-version={}",
            config::ARM_ENDPOINT,
            session.subscription_id,
            record.name,
            config::API_VERSION_RESOURCES,
        );
        let resources: Vec<ResourceDescriptor> =
            fetch_all_pages(&session.http, session.bearer(), resources_url)
                .await
                .map_err(|e| {
                    collection_error(format!("resources in group '{}'", record.name), e)
                })?;

        log::info!("group '{}' -> {} resources", record.name, resources.len());
        inventory.groups.push(ResourceGroup {
            name: record.name,
            resources,
        });
    }

    log::info!(
        "collected {} resources across {} groups",
        inventory.resource_count(),
        inventory.group_count(),
    );
    Ok(inventory)
}

fn collection_error(scope: String, source: ArmError) -> PipelineError {
    PipelineError::Collection {
        scope,
        source: Box::new(source),
    }
}
