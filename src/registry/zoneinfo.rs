//! Bundled IANA zone-info access component

use super::{DescriptorLoader, ModuleManifest, Platform};
use crate::surface::SymbolKind;

static MANIFEST: ModuleManifest = ModuleManifest {
    name: "zoneinfo",
    doc: "Access to the bundled IANA timezone database",
    platform: Platform::Any,
    star: &[
        ("gettz", SymbolKind::Function),
        ("gettz_db_metadata", SymbolKind::Function),
        ("rebuild", SymbolKind::Function),
    ],
    members: &[],
};

/// Create the `zoneinfo` component loader
#[must_use]
pub fn create_loader() -> DescriptorLoader {
    DescriptorLoader::new(&MANIFEST)
}
