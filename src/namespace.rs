//! Top-level namespace of the datekit toolkit
//!
//! The namespace is the user-facing import surface: the fixed list of
//! public components, the package version, and the three access paths the
//! toolkit supports (attribute access, explicit import, wildcard import),
//! all backed by one shared [`ModuleRegistry`].

use std::collections::BTreeMap;

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::registry::{ModuleHandle, standard_loaders};
use crate::registry_manager::ModuleRegistry;

/// The components a wildcard import of the toolkit binds, in surface order
///
/// The Windows-only `tzwin` component is importable on Windows hosts but is
/// deliberately never part of the wildcard surface.
pub const ALL_MODULES: &[&str] = &[
    "easter",
    "parser",
    "relativedelta",
    "rrule",
    "tz",
    "utils",
    "zoneinfo",
];

/// The toolkit version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The toolkit's top-level namespace
pub struct Namespace {
    registry: ModuleRegistry,
}

impl Namespace {
    /// Namespace over the standard component set with default configuration
    #[must_use]
    pub fn standard() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Namespace over the standard component set with explicit configuration
    ///
    /// Registration of the built-in loaders cannot collide, so any failure
    /// here would be a bug in the component tables; the loaders are
    /// registered before the namespace is handed out.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        let registry = ModuleRegistry::with_config(config);

        for loader in standard_loaders() {
            if let Err(e) = registry.register(loader) {
                unreachable!("built-in loader registration failed: {e}");
            }
        }

        Self { registry }
    }

    /// The wildcard surface of the namespace
    #[must_use]
    pub fn all(&self) -> &'static [&'static str] {
        ALL_MODULES
    }

    /// The toolkit version string
    #[must_use]
    pub fn version(&self) -> &'static str {
        VERSION
    }

    /// Attribute access on the namespace (lazy when the registry allows it)
    pub fn attr(&self, name: &str) -> Result<ModuleHandle> {
        self.registry.get(name)
    }

    /// Explicit import of one component
    pub fn import(&self, name: &str) -> Result<ModuleHandle> {
        self.registry.load(name)
    }

    /// Wildcard import: materialize and bind every name in [`ALL_MODULES`]
    ///
    /// Returns the bound name-to-handle map; each handle is identical to
    /// the one an explicit import of the same component yields.
    pub fn import_star(&self) -> Result<BTreeMap<&'static str, ModuleHandle>> {
        let mut bound = BTreeMap::new();
        for &name in ALL_MODULES {
            bound.insert(name, self.registry.load(name)?);
        }

        Ok(bound)
    }

    /// The registry backing this namespace
    #[must_use]
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::standard()
    }
}
