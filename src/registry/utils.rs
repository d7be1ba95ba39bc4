//! Generic date helper component

use super::{DescriptorLoader, ModuleManifest, Platform};
use crate::surface::SymbolKind;

static MANIFEST: ModuleManifest = ModuleManifest {
    name: "utils",
    doc: "Small date and timezone convenience helpers",
    platform: Platform::Any,
    star: &[
        ("today", SymbolKind::Function),
        ("default_tzinfo", SymbolKind::Function),
        ("within_delta", SymbolKind::Function),
    ],
    members: &[],
};

/// Create the `utils` component loader
#[must_use]
pub fn create_loader() -> DescriptorLoader {
    DescriptorLoader::new(&MANIFEST)
}
