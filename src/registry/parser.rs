//! Natural-language date parsing component
//!
//! The `parser` class itself is part of the wildcard surface alongside the
//! `parse` convenience function and the `parserinfo` configuration type.

use super::{DescriptorLoader, ModuleManifest, Platform};
use crate::surface::SymbolKind;

static MANIFEST: ModuleManifest = ModuleManifest {
    name: "parser",
    doc: "Natural-language date and time string parsing",
    platform: Platform::Any,
    star: &[
        ("parse", SymbolKind::Function),
        ("parserinfo", SymbolKind::Type),
        ("parser", SymbolKind::Type),
    ],
    members: &[],
};

/// Create the `parser` component loader
#[must_use]
pub fn create_loader() -> DescriptorLoader {
    DescriptorLoader::new(&MANIFEST)
}
