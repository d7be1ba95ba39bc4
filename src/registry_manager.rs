//! Module registry for the toolkit's components
//!
//! This is the explicit analogue of an interpreter's module cache: a mapping
//! from component name to loaded-module handle, with lazy materialization on
//! first attribute access and deterministic snapshot/restore so a harness can
//! force fresh imports without leaking state between tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rustc_hash::FxHashMap;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::registry::{ModuleHandle, ModuleLoader, Platform};

/// Registry of component loaders and the modules they have materialized
///
/// Attribute access ([`ModuleRegistry::get`]) loads a component at most once
/// and hands out the same reference-counted handle on every subsequent
/// access. Explicit import ([`ModuleRegistry::load`]) shares the same cache,
/// so both paths observe identical module instances.
pub struct ModuleRegistry {
    /// Registered loaders
    loaders: RwLock<HashMap<String, Arc<dyn ModuleLoader>>>,

    /// Materialized modules, keyed by component name
    loaded: RwLock<FxHashMap<String, ModuleHandle>>,

    /// Registry behavior switches
    config: RegistryConfig,
}

/// A snapshot of which modules were loaded at some point in time
///
/// Restoring a snapshot discards everything loaded since it was taken and
/// reinstates the captured handles.
#[derive(Clone, Default)]
pub struct RegistrySnapshot {
    loaded: FxHashMap<String, ModuleHandle>,
}

impl RegistrySnapshot {
    /// Names of the modules captured in this snapshot, sorted
    #[must_use]
    pub fn module_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loaded.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Whether the snapshot captured no loaded modules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

impl ModuleRegistry {
    /// Create an empty registry with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with the given configuration
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            loaders: RwLock::new(HashMap::new()),
            loaded: RwLock::new(FxHashMap::default()),
            config,
        }
    }

    /// The registry's configuration
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a component loader
    ///
    /// Registration does not materialize anything; the component stays
    /// unloaded until first access.
    pub fn register(&self, loader: Arc<dyn ModuleLoader>) -> Result<()> {
        let name = loader.name().to_string();

        if loader.platform() == Platform::Windows && !cfg!(windows) {
            return Err(RegistryError::PlatformUnsupported {
                module: name,
                platform: std::env::consts::OS,
            });
        }

        let mut loaders = self
            .loaders
            .write()
            .map_err(|_| RegistryError::LockPoisoned { what: "loaders" })?;

        if loaders.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered { name });
        }

        loaders.insert(name, loader);
        Ok(())
    }

    /// Register multiple component loaders
    pub fn register_all(&self, loaders: Vec<Arc<dyn ModuleLoader>>) -> Result<()> {
        for loader in loaders {
            self.register(loader)?;
        }

        Ok(())
    }

    /// Attribute access: return the module, materializing it lazily
    ///
    /// The first access runs the loader once and memoizes the handle; every
    /// later access returns the identical handle without re-initializing.
    /// With lazy loading disabled, access to a not-yet-loaded module is an
    /// error and the module stays unloaded.
    pub fn get(&self, name: &str) -> Result<ModuleHandle> {
        if let Some(handle) = self.peek(name)? {
            return Ok(handle);
        }

        if !self.config.lazy_loading {
            // The loader must still exist for the name to be an attribute
            // at all; unknown names report as such either way.
            if !self.has_loader(name)? {
                return Err(RegistryError::UnknownModule {
                    name: name.to_string(),
                });
            }
            return Err(RegistryError::LazyLoadingDisabled {
                module: name.to_string(),
            });
        }

        self.materialize(name)
    }

    /// Explicit import: return the module, loading it if necessary
    ///
    /// Shares the memoization cache with [`ModuleRegistry::get`], so an
    /// import after an attribute access (or the other way round) observes
    /// the same instance. An explicit import is always allowed, even on an
    /// eager-only registry.
    pub fn load(&self, name: &str) -> Result<ModuleHandle> {
        if let Some(handle) = self.peek(name)? {
            return Ok(handle);
        }

        self.materialize(name)
    }

    /// Whether a component is currently materialized (without loading it)
    pub fn is_loaded(&self, name: &str) -> Result<bool> {
        Ok(self.peek(name)?.is_some())
    }

    /// Whether a loader is registered under this name
    pub fn has_loader(&self, name: &str) -> Result<bool> {
        let loaders = self
            .loaders
            .read()
            .map_err(|_| RegistryError::LockPoisoned { what: "loaders" })?;

        Ok(loaders.contains_key(name))
    }

    /// Names of all registered components, sorted
    pub fn module_names(&self) -> Result<Vec<String>> {
        let loaders = self
            .loaders
            .read()
            .map_err(|_| RegistryError::LockPoisoned { what: "loaders" })?;

        let mut names: Vec<String> = loaders.keys().cloned().collect();
        names.sort_unstable();
        Ok(names)
    }

    /// How many times a component's loader has run
    pub fn init_count(&self, name: &str) -> Result<usize> {
        Ok(self.loader(name)?.init_count())
    }

    /// Capture the currently loaded modules
    pub fn snapshot(&self) -> Result<RegistrySnapshot> {
        let loaded = self
            .loaded
            .read()
            .map_err(|_| RegistryError::LockPoisoned { what: "loaded modules" })?;

        Ok(RegistrySnapshot {
            loaded: loaded.clone(),
        })
    }

    /// Replace the loaded-module set with a previously captured snapshot
    pub fn restore(&self, snapshot: RegistrySnapshot) -> Result<()> {
        let mut loaded = self
            .loaded
            .write()
            .map_err(|_| RegistryError::LockPoisoned { what: "loaded modules" })?;

        log::debug!(
            "restoring module registry to {} loaded module(s)",
            snapshot.loaded.len()
        );
        *loaded = snapshot.loaded;
        Ok(())
    }

    /// Drop every materialized module, keeping the loaders registered
    ///
    /// The next access to each component runs its loader again.
    pub fn clear_loaded(&self) -> Result<()> {
        self.loaded
            .write()
            .map_err(|_| RegistryError::LockPoisoned { what: "loaded modules" })?
            .clear();

        Ok(())
    }

    /// Snapshot the loaded modules, clear them, and restore on drop
    ///
    /// This is the clean-import fixture: inside the scope every component
    /// reloads from scratch, and nothing loaded inside the scope survives
    /// it, on normal exit and panic unwind alike.
    pub fn scoped_reset(&self) -> Result<ScopedReset<'_>> {
        let mut loaded = self
            .loaded
            .write()
            .map_err(|_| RegistryError::LockPoisoned { what: "loaded modules" })?;

        let snapshot = RegistrySnapshot {
            loaded: std::mem::take(&mut *loaded),
        };
        drop(loaded);

        log::debug!(
            "scoped reset: cleared {} loaded module(s)",
            snapshot.loaded.len()
        );

        Ok(ScopedReset {
            registry: self,
            snapshot,
        })
    }

    // Helper functions

    /// Look up a memoized handle without materializing anything
    fn peek(&self, name: &str) -> Result<Option<ModuleHandle>> {
        let loaded = self
            .loaded
            .read()
            .map_err(|_| RegistryError::LockPoisoned { what: "loaded modules" })?;

        Ok(loaded.get(name).cloned())
    }

    /// Get a registered loader by name
    fn loader(&self, name: &str) -> Result<Arc<dyn ModuleLoader>> {
        self.loaders
            .read()
            .map_err(|_| RegistryError::LockPoisoned { what: "loaders" })?
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownModule {
                name: name.to_string(),
            })
    }

    /// Run a component's loader and memoize the handle
    fn materialize(&self, name: &str) -> Result<ModuleHandle> {
        let loader = self.loader(name)?;

        let mut loaded = self
            .loaded
            .write()
            .map_err(|_| RegistryError::LockPoisoned { what: "loaded modules" })?;

        // A concurrent access may have won the race between our cache miss
        // and taking the write lock; the first inserted handle stays.
        if let Some(handle) = loaded.get(name) {
            return Ok(handle.clone());
        }

        let handle = loader.load()?;

        if self.config.strict_surface {
            let declared = loader.surface();
            let declared_names = declared.star_names();
            let diff = handle.surface().diff(&declared_names);
            if !diff.is_clean() {
                return Err(RegistryError::SurfaceDrift {
                    module: name.to_string(),
                    missing: diff.missing,
                    unexpected: diff.unexpected,
                });
            }
        }

        if self.config.log_loads {
            log::info!(
                "loaded module '{name}' ({} public name(s))",
                handle.surface().star_names().len()
            );
        }

        loaded.insert(name.to_string(), handle.clone());
        Ok(handle)
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores a registry's loaded-module set when dropped
///
/// Created by [`ModuleRegistry::scoped_reset`]. The restore runs on every
/// exit path, including panic unwind, so one forced reload can never leak
/// into the surrounding session.
pub struct ScopedReset<'a> {
    registry: &'a ModuleRegistry,
    snapshot: RegistrySnapshot,
}

impl ScopedReset<'_> {
    /// The snapshot that will be restored on drop
    #[must_use]
    pub fn snapshot(&self) -> &RegistrySnapshot {
        &self.snapshot
    }
}

impl Drop for ScopedReset<'_> {
    fn drop(&mut self) {
        let snapshot = std::mem::take(&mut self.snapshot);

        // Restore even when the lock was poisoned by the panicking scope.
        let mut loaded = match self.registry.loaded.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        *loaded = snapshot.loaded;
    }
}
