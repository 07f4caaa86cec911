// cargo watch -x 'fmt' -x 'run'

//! Enumerates the resources of one Azure subscription, groups them by
//! resource group and emits D2 diagram-description files: one file per
//! resource group plus a `main.d2` index importing them all.
//!
//! The pipeline is three sequential stages with data flowing one way:
//! [`resolve_session`] -> [`collect_resources`] -> [`generate_diagram_files`].

pub mod azure;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use azure::{collect_resources, resolve_session, ArmSession, CredentialSource, ResolverConfig};
pub use error::PipelineError;
pub use models::{ResourceDescriptor, ResourceGroup, ResourceInventory, Shape};
pub use output::{generate_diagram_files, render_group_file, render_index_file};
