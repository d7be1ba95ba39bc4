//! Windows registry timezone bindings
//!
//! Only compiled on Windows hosts; the component does not exist elsewhere.

use super::{DescriptorLoader, ModuleManifest, Platform};
use crate::surface::SymbolKind;

static MANIFEST: ModuleManifest = ModuleManifest {
    name: "tzwin",
    doc: "Timezone data sourced from the Windows registry",
    platform: Platform::Windows,
    star: &[
        ("tzwin", SymbolKind::Type),
        ("tzwinlocal", SymbolKind::Type),
        ("tzres", SymbolKind::Type),
    ],
    members: &[],
};

/// Create the `tzwin` component loader
#[must_use]
pub fn create_loader() -> DescriptorLoader {
    DescriptorLoader::new(&MANIFEST)
}
