//! Azure credential and Resource Manager interaction.
//!
//! This module handles all Azure-related operations:
//! - [`arm`] - shared ARM REST plumbing (paging, wire errors)
//! - [`credentials`] - credential sources and session resolution
//! - [`subscriptions`] - subscription listing
//! - [`resources`] - resource group and resource listing

mod arm;
mod credentials;
mod resources;
mod subscriptions;

// Re-export public types and functions
pub use arm::ArmError;
pub use credentials::{resolve_session, ArmSession, CredentialSource, ResolverConfig};
pub use resources::collect_resources;
pub use subscriptions::Subscription;
