//! Configuration for the module registry.

use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::ModuleRegistry`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Whether attribute access may materialize a not-yet-loaded module.
    /// When disabled, only explicit imports load modules and attribute
    /// access on an unloaded module is an error.
    pub lazy_loading: bool,
    /// Whether to fail a load when the realized export surface differs
    /// from the loader's declared manifest
    pub strict_surface: bool,
    /// Log each module materialization
    pub log_loads: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            lazy_loading: true,
            strict_surface: true,
            log_loads: true,
        }
    }
}

impl RegistryConfig {
    /// Configuration for hosts without deferred-loading support: every
    /// module must be imported explicitly
    #[must_use]
    pub fn eager_only() -> Self {
        Self {
            lazy_loading: false,
            ..Self::default()
        }
    }
}
