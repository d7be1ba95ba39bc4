//! Timezone handling component
//!
//! On Windows hosts the surface additionally exposes the registry-backed
//! `tzwin` and `tzwinlocal` types; elsewhere those names do not exist at
//! all, so the surface is selected at compile time.

use super::{DescriptorLoader, ModuleManifest, Platform};
use crate::surface::SymbolKind;

#[cfg(not(windows))]
static STAR: &[(&str, SymbolKind)] = &[
    ("tzutc", SymbolKind::Type),
    ("tzoffset", SymbolKind::Type),
    ("tzlocal", SymbolKind::Type),
    ("tzfile", SymbolKind::Type),
    ("tzrange", SymbolKind::Type),
    ("tzstr", SymbolKind::Type),
    ("tzical", SymbolKind::Type),
    ("gettz", SymbolKind::Function),
    ("UTC", SymbolKind::Constant),
    ("datetime_ambiguous", SymbolKind::Function),
    ("datetime_exists", SymbolKind::Function),
    ("resolve_imaginary", SymbolKind::Function),
];

#[cfg(windows)]
static STAR: &[(&str, SymbolKind)] = &[
    ("tzutc", SymbolKind::Type),
    ("tzoffset", SymbolKind::Type),
    ("tzlocal", SymbolKind::Type),
    ("tzfile", SymbolKind::Type),
    ("tzrange", SymbolKind::Type),
    ("tzstr", SymbolKind::Type),
    ("tzical", SymbolKind::Type),
    ("gettz", SymbolKind::Function),
    ("UTC", SymbolKind::Constant),
    ("datetime_ambiguous", SymbolKind::Function),
    ("datetime_exists", SymbolKind::Function),
    ("resolve_imaginary", SymbolKind::Function),
    ("tzwin", SymbolKind::Type),
    ("tzwinlocal", SymbolKind::Type),
];

static MANIFEST: ModuleManifest = ModuleManifest {
    name: "tz",
    doc: "Timezone implementations and IANA database access",
    platform: Platform::Any,
    star: STAR,
    members: &[],
};

/// Create the `tz` component loader
#[must_use]
pub fn create_loader() -> DescriptorLoader {
    DescriptorLoader::new(&MANIFEST)
}
