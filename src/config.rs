//! Process-wide constants.

/// Base URL of the Azure Resource Manager endpoint (public cloud).
pub const ARM_ENDPOINT: &str = "https://management.azure.com";

/// OAuth scope requested for ARM tokens.
pub const ARM_SCOPE: &str = "https://management.azure.com/.default";

/// api-version used when listing subscriptions.
pub const API_VERSION_SUBSCRIPTIONS: &str = "2022-12-01";

/// api-version used when listing resource groups and resources.
pub const API_VERSION_RESOURCES: &str = "2021-04-01";

/// Directory the diagram files are written into.
pub const OUTPUT_DIR: &str = "d2_output";

/// Extension of the emitted diagram-description files.
pub const FILE_EXT: &str = "d2";
