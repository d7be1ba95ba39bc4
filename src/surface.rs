//! Export-surface model for toolkit components
//!
//! Every component declares the set of names it exposes. The surface is
//! split the way the toolkit's wildcard-import contract splits it: the
//! `star` set (names bound by an unqualified `import *`) and the `members`
//! set (additional public names reachable only by qualified access, such as
//! `relativedelta::weekday`). Surfaces are static, literal data; the diff
//! operation is what turns them into a verifiable contract.

use itertools::Itertools;
use serde::Serialize;

/// What kind of object a public name refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolKind {
    /// A callable
    Function,
    /// A class-like type
    Type,
    /// A constant value (frequencies, weekday singletons, `UTC`)
    Constant,
    /// A nested module
    Module,
}

/// A single public name on a component's surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbol {
    /// The exported name
    pub name: &'static str,
    /// What the name refers to
    pub kind: SymbolKind,
}

/// The public symbol table of one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSurface {
    star: Vec<Symbol>,
    members: Vec<Symbol>,
}

impl ExportSurface {
    /// Build a surface from static symbol tables
    ///
    /// The star and member sets must be disjoint and free of duplicates;
    /// manifests are literal data so this is checked with debug assertions.
    #[must_use]
    pub fn new(star: &[(&'static str, SymbolKind)], members: &[(&'static str, SymbolKind)]) -> Self {
        let star: Vec<Symbol> = star
            .iter()
            .map(|&(name, kind)| Symbol { name, kind })
            .collect();
        let members: Vec<Symbol> = members
            .iter()
            .map(|&(name, kind)| Symbol { name, kind })
            .collect();

        debug_assert_eq!(
            star.iter().map(|s| s.name).unique().count(),
            star.len(),
            "duplicate name in star surface"
        );
        debug_assert!(
            members
                .iter()
                .all(|m| star.iter().all(|s| s.name != m.name)),
            "star and member surfaces overlap"
        );

        Self { star, members }
    }

    /// Names bound by a wildcard import, sorted
    #[must_use]
    pub fn star_names(&self) -> Vec<&'static str> {
        self.star.iter().map(|s| s.name).sorted_unstable().collect()
    }

    /// Additional qualified-only public names, sorted
    #[must_use]
    pub fn member_names(&self) -> Vec<&'static str> {
        self.members
            .iter()
            .map(|s| s.name)
            .sorted_unstable()
            .collect()
    }

    /// The symbols a wildcard import binds, in declaration order
    #[must_use]
    pub fn star_exports(&self) -> &[Symbol] {
        &self.star
    }

    /// Qualified lookup over the whole public surface (star and members)
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.star
            .iter()
            .chain(self.members.iter())
            .find(|s| s.name == name)
    }

    /// Whether a name is anywhere on the public surface
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Exact-set comparison of the star surface against an expected name list
    #[must_use]
    pub fn diff(&self, expected: &[&str]) -> SurfaceDiff {
        let actual = self.star_names();

        let missing = expected
            .iter()
            .filter(|&&name| !actual.iter().any(|&a| a == name))
            .map(|&name| name.to_string())
            .sorted_unstable()
            .collect();

        let unexpected = actual
            .iter()
            .filter(|&&a| !expected.iter().any(|&e| e == a))
            .map(|&a| a.to_string())
            .collect();

        SurfaceDiff {
            missing,
            unexpected,
        }
    }
}

/// The two-sided difference between a realized star surface and its
/// declared contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceDiff {
    /// Declared names the surface does not expose
    pub missing: Vec<String>,
    /// Exposed names the declaration does not list
    pub unexpected: Vec<String>,
}

impl SurfaceDiff {
    /// Whether the surfaces match exactly (no drift in either direction)
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}
