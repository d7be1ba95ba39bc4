//! Component descriptors and loaders for the datekit toolkit
//!
//! This module contains the descriptors for the toolkit's components and the
//! loader trait through which the registry materializes them. Each component
//! declares its public export surface as literal data; loading a component
//! produces a [`Module`] handle that the registry memoizes.
//!
//! Available components:
//! - `easter`: Easter-date calculation
//! - `parser`: Natural-language date parsing
//! - `relativedelta`: Relative date arithmetic
//! - `rrule`: Recurrence-rule generation
//! - `tz`: Timezone handling
//! - `utils`: Generic date helpers
//! - `zoneinfo`: Bundled IANA zone-info access
//! - `tzwin`: Windows registry timezone bindings (Windows hosts only)

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{RegistryError, Result};
use crate::surface::{ExportSurface, Symbol, SymbolKind};

pub mod easter;
pub mod factory;
pub mod parser;
pub mod relativedelta;
pub mod rrule;
pub mod tz;
pub mod utils;
pub mod zoneinfo;

#[cfg(windows)]
pub mod tzwin;

pub use factory::{loader_from_name, standard_loaders};

/// Host requirement of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Loadable on every host
    Any,
    /// Loadable only on Windows hosts
    Windows,
}

/// Static description of one toolkit component
#[derive(Debug)]
pub struct ModuleManifest {
    /// The component's import name
    pub name: &'static str,
    /// One-line module description
    pub doc: &'static str,
    /// Host requirement
    pub platform: Platform,
    /// Names bound by a wildcard import
    pub star: &'static [(&'static str, SymbolKind)],
    /// Additional public names reachable only by qualified access
    pub members: &'static [(&'static str, SymbolKind)],
}

/// A materialized toolkit component
///
/// Handles are reference-counted; two handles obtained through different
/// import paths compare identical with [`Arc::ptr_eq`] exactly when no
/// duplicate initialization occurred.
#[derive(Debug)]
pub struct Module {
    name: &'static str,
    doc: &'static str,
    surface: ExportSurface,
    init_seq: usize,
}

/// Shared handle to a loaded module
pub type ModuleHandle = Arc<Module>;

impl Module {
    /// Build a module from its manifest
    ///
    /// `init_seq` records which initialization of the owning loader
    /// produced this instance (1-based).
    #[must_use]
    pub fn from_manifest(manifest: &ModuleManifest, init_seq: usize) -> Self {
        Self {
            name: manifest.name,
            doc: manifest.doc,
            surface: ExportSurface::new(manifest.star, manifest.members),
            init_seq,
        }
    }

    /// The component's import name
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line module description
    #[must_use]
    pub fn doc(&self) -> &'static str {
        self.doc
    }

    /// The module's public export surface
    #[must_use]
    pub fn surface(&self) -> &ExportSurface {
        &self.surface
    }

    /// Which initialization of the loader produced this instance
    #[must_use]
    pub fn init_seq(&self) -> usize {
        self.init_seq
    }

    /// Qualified symbol lookup (`from module import name`)
    pub fn symbol(&self, name: &str) -> Result<&Symbol> {
        self.surface
            .get(name)
            .ok_or_else(|| RegistryError::UnknownSymbol {
                module: self.name.to_string(),
                symbol: name.to_string(),
            })
    }

    /// The symbols a wildcard import of this module binds
    #[must_use]
    pub fn star_exports(&self) -> &[Symbol] {
        self.surface.star_exports()
    }
}

/// Base trait for component loaders
pub trait ModuleLoader: std::fmt::Debug + Send + Sync {
    /// The component's import name
    fn name(&self) -> &'static str;

    /// Host requirement
    fn platform(&self) -> Platform {
        Platform::Any
    }

    /// The declared export surface, available without materializing
    fn surface(&self) -> ExportSurface;

    /// Materialize the component
    ///
    /// Each call runs a fresh initialization; memoization is the
    /// registry's job, not the loader's.
    fn load(&self) -> Result<ModuleHandle>;

    /// How many times this loader has initialized its component
    fn init_count(&self) -> usize;
}

/// Manifest-driven loader shared by all built-in components
///
/// Initialization is counted so callers can verify that memoized access
/// never re-runs it.
#[derive(Debug)]
pub struct DescriptorLoader {
    manifest: &'static ModuleManifest,
    init_count: AtomicUsize,
}

impl DescriptorLoader {
    /// Create a loader over a static manifest
    #[must_use]
    pub fn new(manifest: &'static ModuleManifest) -> Self {
        Self {
            manifest,
            init_count: AtomicUsize::new(0),
        }
    }
}

impl ModuleLoader for DescriptorLoader {
    fn name(&self) -> &'static str {
        self.manifest.name
    }

    fn platform(&self) -> Platform {
        self.manifest.platform
    }

    fn surface(&self) -> ExportSurface {
        ExportSurface::new(self.manifest.star, self.manifest.members)
    }

    fn load(&self) -> Result<ModuleHandle> {
        let seq = self.init_count.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("initializing module '{}' (init #{seq})", self.manifest.name);
        Ok(Arc::new(Module::from_manifest(self.manifest, seq)))
    }

    fn init_count(&self) -> usize {
        self.init_count.load(Ordering::SeqCst)
    }
}
