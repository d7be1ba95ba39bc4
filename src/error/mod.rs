//! Error handling for the datekit registry.

use thiserror::Error;

/// Specialized error type for registry and import-surface operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No component with this name is registered in the namespace
    #[error("unknown module: {name}")]
    UnknownModule {
        /// The requested module name
        name: String,
    },

    /// A qualified symbol lookup missed the module's public surface
    #[error("module '{module}' has no public symbol '{symbol}'")]
    UnknownSymbol {
        /// The module that was searched
        module: String,
        /// The symbol that was requested
        symbol: String,
    },

    /// The realized export surface does not match the declared manifest
    #[error("export surface drift in '{module}': missing {missing:?}, unexpected {unexpected:?}")]
    SurfaceDrift {
        /// The module whose surface drifted
        module: String,
        /// Declared names absent from the realized surface
        missing: Vec<String>,
        /// Realized names absent from the declaration
        unexpected: Vec<String>,
    },

    /// Attribute-triggered loading was requested on an eager-only registry
    #[error("lazy loading is disabled; import module '{module}' explicitly")]
    LazyLoadingDisabled {
        /// The module whose lazy materialization was refused
        module: String,
    },

    /// A platform-gated component was requested on the wrong host
    #[error("module '{module}' is not available on {platform}")]
    PlatformUnsupported {
        /// The gated module name
        module: String,
        /// The host platform identifier
        platform: &'static str,
    },

    /// A loader was registered twice under the same name
    #[error("module already registered: {name}")]
    AlreadyRegistered {
        /// The duplicated module name
        name: String,
    },

    /// A registry lock was poisoned by a panicking holder
    #[error("failed to acquire lock on {what}")]
    LockPoisoned {
        /// Which internal map the lock guards
        what: &'static str,
    },
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
