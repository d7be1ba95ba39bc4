//! Recurrence-rule generation component
//!
//! The wildcard surface carries the rule types, the nine frequency
//! constants and the weekday singletons; `weekday` itself is qualified-only,
//! matching `relativedelta`.

use super::{DescriptorLoader, ModuleManifest, Platform};
use crate::surface::SymbolKind;

static MANIFEST: ModuleManifest = ModuleManifest {
    name: "rrule",
    doc: "Recurrence-rule expansion and rule-set composition",
    platform: Platform::Any,
    star: &[
        ("rrule", SymbolKind::Type),
        ("rruleset", SymbolKind::Type),
        ("rrulestr", SymbolKind::Type),
        ("YEARLY", SymbolKind::Constant),
        ("MONTHLY", SymbolKind::Constant),
        ("WEEKLY", SymbolKind::Constant),
        ("DAILY", SymbolKind::Constant),
        ("HOURLY", SymbolKind::Constant),
        ("MINUTELY", SymbolKind::Constant),
        ("SECONDLY", SymbolKind::Constant),
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

/// Create the `rrule` component loader
#[must_use]
pub fn create_loader() -> DescriptorLoader {
    DescriptorLoader::new(&MANIFEST)
}
