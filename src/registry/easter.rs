//! Easter-date calculation component

use super::{DescriptorLoader, ModuleManifest, Platform};
use crate::surface::SymbolKind;

static MANIFEST: ModuleManifest = ModuleManifest {
    name: "easter",
    doc: "Easter-date calculation for the western, orthodox and julian calendars",
    platform: Platform::Any,
    star: &[("easter", SymbolKind::Function)],
    members: &[],
};

/// Create the `easter` component loader
#[must_use]
pub fn create_loader() -> DescriptorLoader {
    DescriptorLoader::new(&MANIFEST)
}
