//! Error taxonomy for the pipeline.
//!
//! One variant per stage fault. Every stage propagates its fault upward
//! unchanged with `?`; there is no retry, backoff or suppression.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// No configured credential source produced a usable ARM token.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The credential is valid but the account has zero accessible
    /// subscriptions.
    #[error("no accessible subscriptions on this account")]
    NoSubscription,

    /// A listing call failed while collecting the inventory. Fail-fast:
    /// the failing scope aborts the whole run, no partial inventory.
    #[error("collecting {scope} failed: {source}")]
    Collection {
        scope: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The output directory or one of the diagram files could not be
    /// written. Files written before the failure remain on disk.
    #[error("writing {path:?} failed: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
