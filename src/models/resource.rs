//! Azure resource descriptor model.

use serde::{Deserialize, Serialize};

/// The flattened record this tool extracts per Azure resource.
///
/// Built straight from the ARM listing record during collection and never
/// mutated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ResourceDescriptor {
    /// Resource name.
    pub name: String,
    /// Slash-delimited hierarchical type, e.g. "Microsoft.Compute/virtualMachines".
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Azure region location.
    pub location: String,
    /// Fully-qualified resource identifier.
    pub id: String,
}

impl ResourceDescriptor {
    /// Final segment of the hierarchical type string, used as the
    /// shape-lookup key. A type without `/` is its own leaf.
    pub fn leaf_type(&self) -> &str {
        match self.resource_type.rfind('/') {
            Some(idx) => &self.resource_type[idx + 1..],
            None => &self.resource_type,
        }
    }
}
