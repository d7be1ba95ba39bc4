//! Relative date arithmetic component
//!
//! Exposes the `relativedelta` type and the seven weekday singletons; the
//! underlying `weekday` type is public but excluded from the wildcard
//! surface.

use super::{DescriptorLoader, ModuleManifest, Platform};
use crate::surface::SymbolKind;

static MANIFEST: ModuleManifest = ModuleManifest {
    name: "relativedelta",
    doc: "Relative date arithmetic with calendar-aware deltas",
    platform: Platform::Any,
    star: &[
        ("relativedelta", SymbolKind::Type),
        ("MO", SymbolKind::Constant),
        ("TU", SymbolKind::Constant),
        ("WE", SymbolKind::Constant),
        ("TH", SymbolKind::Constant),
        ("FR", SymbolKind::Constant),
        ("SA", SymbolKind::Constant),
        ("SU", SymbolKind::Constant),
    ],
    members: &[("weekday", SymbolKind::Type)],
};

/// Create the `relativedelta` component loader
#[must_use]
pub fn create_loader() -> DescriptorLoader {
    DescriptorLoader::new(&MANIFEST)
}
