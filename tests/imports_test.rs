//! Import-correctness tests for the toolkit namespace
//!
//! For each component these verify that explicit import works, that
//! attribute access on the namespace yields the identical module instance,
//! and that the component's public symbols are all reachable by qualified
//! lookup.

mod utils;

#[cfg(not(windows))]
use datekit::loader_from_name;
use datekit::{RegistryError, SymbolKind, VERSION};
use utils::{assert_same_module, standard_namespace};

#[test]
fn test_import_version_str() {
    assert!(!VERSION.is_empty());
}

#[test]
fn test_import_version_root() -> anyhow::Result<()> {
    let ns = standard_namespace();
    assert_eq!(ns.version(), env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[test]
fn test_unknown_module_is_an_error() {
    let ns = standard_namespace();
    let err = ns.import("no_such_module").unwrap_err();
    assert!(matches!(err, RegistryError::UnknownModule { name } if name == "no_such_module"));
}

// Easter

#[test]
fn test_import_easter_direct() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let easter = ns.import("easter")?;
    assert_eq!(easter.name(), "easter");
    Ok(())
}

#[test]
fn test_import_easter_from() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let direct = ns.import("easter")?;
    let attr = ns.attr("easter")?;
    assert_same_module(&direct, &attr);
    Ok(())
}

#[test]
fn test_import_easter_star() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let easter = ns.import("easter")?;
    assert_eq!(easter.symbol("easter")?.kind, SymbolKind::Function);
    assert!(easter.surface().diff(&["easter"]).is_clean());
    Ok(())
}

// Parser

#[test]
fn test_import_parser_direct() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let parser = ns.import("parser")?;
    assert_eq!(parser.name(), "parser");
    Ok(())
}

#[test]
fn test_import_parser_from() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let direct = ns.import("parser")?;
    let attr = ns.attr("parser")?;
    assert_same_module(&direct, &attr);
    Ok(())
}

#[test]
fn test_import_parser_all() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let module = ns.import("parser")?;

    // All interface
    assert_eq!(module.symbol("parse")?.kind, SymbolKind::Function);
    assert_eq!(module.symbol("parserinfo")?.kind, SymbolKind::Type);

    // Other public classes
    assert_eq!(module.symbol("parser")?.kind, SymbolKind::Type);

    assert!(
        module
            .surface()
            .diff(&["parse", "parserinfo", "parser"])
            .is_clean()
    );
    Ok(())
}

#[test]
fn test_parser_unknown_symbol_is_an_error() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let module = ns.import("parser")?;
    let err = module.symbol("tokenize").unwrap_err();
    assert!(matches!(
        err,
        RegistryError::UnknownSymbol { module, symbol }
            if module == "parser" && symbol == "tokenize"
    ));
    Ok(())
}

// Relativedelta

#[test]
fn test_import_relative_delta_direct() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let relativedelta = ns.import("relativedelta")?;
    assert_eq!(relativedelta.name(), "relativedelta");
    Ok(())
}

#[test]
fn test_import_relative_delta_from() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let direct = ns.import("relativedelta")?;
    let attr = ns.attr("relativedelta")?;
    assert_same_module(&direct, &attr);
    Ok(())
}

#[test]
fn test_import_relative_delta_all() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let module = ns.import("relativedelta")?;

    assert_eq!(module.symbol("relativedelta")?.kind, SymbolKind::Type);
    for weekday in ["MO", "TU", "WE", "TH", "FR", "SA", "SU"] {
        assert_eq!(module.symbol(weekday)?.kind, SymbolKind::Constant);
    }

    // In the public interface but not in the wildcard surface
    assert_eq!(module.symbol("weekday")?.kind, SymbolKind::Type);
    assert_eq!(module.surface().member_names(), vec!["weekday"]);

    assert!(
        module
            .surface()
            .diff(&["relativedelta", "MO", "TU", "WE", "TH", "FR", "SA", "SU"])
            .is_clean()
    );
    Ok(())
}

// Rrule

#[test]
fn test_import_rrule_direct() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let rrule = ns.import("rrule")?;
    assert_eq!(rrule.name(), "rrule");
    Ok(())
}

#[test]
fn test_import_rrule_from() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let direct = ns.import("rrule")?;
    let attr = ns.attr("rrule")?;
    assert_same_module(&direct, &attr);
    Ok(())
}

#[test]
fn test_import_rrule_all() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let module = ns.import("rrule")?;

    for ty in ["rrule", "rruleset", "rrulestr"] {
        assert_eq!(module.symbol(ty)?.kind, SymbolKind::Type);
    }
    for freq in [
        "YEARLY", "MONTHLY", "WEEKLY", "DAILY", "HOURLY", "MINUTELY", "SECONDLY",
    ] {
        assert_eq!(module.symbol(freq)?.kind, SymbolKind::Constant);
    }
    for weekday in ["MO", "TU", "WE", "TH", "FR", "SA", "SU"] {
        assert_eq!(module.symbol(weekday)?.kind, SymbolKind::Constant);
    }

    // In the public interface but not in the wildcard surface
    assert_eq!(module.symbol("weekday")?.kind, SymbolKind::Type);
    assert_eq!(module.surface().member_names(), vec!["weekday"]);

    assert!(
        module
            .surface()
            .diff(&[
                "rrule", "rruleset", "rrulestr", "YEARLY", "MONTHLY", "WEEKLY", "DAILY", "HOURLY",
                "MINUTELY", "SECONDLY", "MO", "TU", "WE", "TH", "FR", "SA", "SU",
            ])
            .is_clean()
    );
    Ok(())
}

// Tz

#[test]
fn test_import_tz_direct() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let tz = ns.import("tz")?;
    assert_eq!(tz.name(), "tz");
    Ok(())
}

#[test]
fn test_import_tz_from() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let direct = ns.import("tz")?;
    let attr = ns.attr("tz")?;
    assert_same_module(&direct, &attr);
    Ok(())
}

#[test]
fn test_import_tz_all() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let module = ns.import("tz")?;

    let mut tz_all = vec![
        "tzutc",
        "tzoffset",
        "tzlocal",
        "tzfile",
        "tzrange",
        "tzstr",
        "tzical",
        "gettz",
        "datetime_ambiguous",
        "datetime_exists",
        "resolve_imaginary",
        "UTC",
    ];

    if cfg!(windows) {
        tz_all.extend(["tzwin", "tzwinlocal"]);
    }

    for name in &tz_all {
        assert!(
            module.surface().contains(name),
            "tz surface is missing '{name}'"
        );
    }

    assert!(module.surface().diff(&tz_all).is_clean());
    Ok(())
}

#[cfg(not(windows))]
#[test]
fn test_tz_windows_names_absent_elsewhere() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let module = ns.import("tz")?;
    assert!(!module.surface().contains("tzwin"));
    assert!(!module.surface().contains("tzwinlocal"));
    Ok(())
}

// Tzwin (Windows hosts only)

#[cfg(windows)]
#[test]
fn test_import_tz_windows_direct() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let tzwin = ns.import("tzwin")?;
    assert_eq!(tzwin.name(), "tzwin");
    Ok(())
}

#[cfg(windows)]
#[test]
fn test_import_tz_windows_from() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let direct = ns.import("tzwin")?;
    let attr = ns.attr("tzwin")?;
    assert_same_module(&direct, &attr);
    Ok(())
}

#[cfg(windows)]
#[test]
fn test_import_tz_windows_star() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let module = ns.import("tzwin")?;
    for name in ["tzwin", "tzwinlocal"] {
        assert_eq!(module.symbol(name)?.kind, SymbolKind::Type);
    }
    Ok(())
}

#[cfg(not(windows))]
#[test]
fn test_tzwin_unavailable_off_windows() {
    utils::init_logging();

    let err = loader_from_name("tzwin").unwrap_err();
    assert!(matches!(
        err,
        RegistryError::PlatformUnsupported { module, .. } if module == "tzwin"
    ));

    // The component is not registered at all on this host.
    let ns = standard_namespace();
    assert!(!ns.registry().has_loader("tzwin").unwrap());
}

// Utils

#[test]
fn test_import_utils_direct() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let module = ns.import("utils")?;
    assert_eq!(module.name(), "utils");
    Ok(())
}

#[test]
fn test_import_utils_from() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let direct = ns.import("utils")?;
    let attr = ns.attr("utils")?;
    assert_same_module(&direct, &attr);
    Ok(())
}

#[test]
fn test_import_utils_star() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let module = ns.import("utils")?;
    for name in ["today", "default_tzinfo", "within_delta"] {
        assert_eq!(module.symbol(name)?.kind, SymbolKind::Function);
    }
    Ok(())
}

// Zone info

#[test]
fn test_import_zone_info_direct() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let zoneinfo = ns.import("zoneinfo")?;
    assert_eq!(zoneinfo.name(), "zoneinfo");
    Ok(())
}

#[test]
fn test_import_zone_info_from() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let direct = ns.import("zoneinfo")?;
    let attr = ns.attr("zoneinfo")?;
    assert_same_module(&direct, &attr);
    Ok(())
}

#[test]
fn test_import_zone_info_star() -> anyhow::Result<()> {
    let ns = standard_namespace();
    let module = ns.import("zoneinfo")?;

    for name in ["gettz", "gettz_db_metadata", "rebuild"] {
        assert_eq!(module.symbol(name)?.kind, SymbolKind::Function);
    }

    assert!(
        module
            .surface()
            .diff(&["gettz", "gettz_db_metadata", "rebuild"])
            .is_clean()
    );
    Ok(())
}
