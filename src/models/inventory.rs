//! Resource inventory grouped by resource group.

use super::ResourceDescriptor;
use serde::{Deserialize, Serialize};

/// A resource group and the resources listed under it, in upstream
/// listing order.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ResourceGroup {
    /// Resource group name, unique within the subscription.
    pub name: String,
    /// Resources scoped to this group, in upstream listing order.
    pub resources: Vec<ResourceDescriptor>,
}

/// All resource groups of one subscription, in listing order.
///
/// Built once per run, read-only afterwards, never merged with a prior
/// run's inventory. Every descriptor sits in exactly the bucket it was
/// listed under.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct ResourceInventory {
    pub groups: Vec<ResourceGroup>,
}

impl ResourceInventory {
    /// Number of resource groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total resources across all groups.
    pub fn resource_count(&self) -> usize {
        self.groups.iter().map(|g| g.resources.len()).sum()
    }
}
