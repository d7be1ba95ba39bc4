//! A Rust library providing the component-loading layer of the datekit
//! date/time toolkit: a lazy module registry, explicit and wildcard import
//! paths, and verifiable export surfaces.

pub mod config;
pub mod error;
pub mod namespace;
pub mod registry;
pub mod registry_manager;
pub mod surface;

// Re-export the most common types for easier use
// Core types
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use namespace::{ALL_MODULES, Namespace, VERSION};

// Registry types
pub use registry::{Module, ModuleHandle, ModuleLoader, Platform, loader_from_name};
pub use registry_manager::{ModuleRegistry, RegistrySnapshot, ScopedReset};

// Surface verification
pub use surface::{ExportSurface, SurfaceDiff, Symbol, SymbolKind};
