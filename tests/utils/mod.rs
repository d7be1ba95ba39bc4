//! Shared helpers for the import-surface tests

use std::sync::Arc;

use datekit::{ModuleHandle, Namespace, RegistryConfig};

/// Initialize test logging (idempotent across tests in one binary)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Namespace over the standard component set
#[must_use]
pub fn standard_namespace() -> Namespace {
    init_logging();
    Namespace::standard()
}

/// Namespace that refuses lazy materialization
#[must_use]
pub fn eager_namespace() -> Namespace {
    init_logging();
    Namespace::with_config(RegistryConfig::eager_only())
}

/// Assert that two handles refer to the same module instance
pub fn assert_same_module(a: &ModuleHandle, b: &ModuleHandle) {
    assert!(
        Arc::ptr_eq(a, b),
        "expected identical module instances for '{}', got separate initializations (#{} and #{})",
        a.name(),
        a.init_seq(),
        b.init_seq()
    );
}
