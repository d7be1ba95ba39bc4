//! Factory functions for creating component loaders
//!
//! This module maps component names to their loaders and assembles the
//! standard loader set the toolkit namespace is built from.

use std::sync::Arc;

use super::ModuleLoader;
use crate::error::{RegistryError, Result};

/// Create a component loader from its import name
pub fn loader_from_name(name: &str) -> Result<Arc<dyn ModuleLoader>> {
    match name.to_lowercase().as_str() {
        "easter" => Ok(Arc::new(super::easter::create_loader())),
        "parser" => Ok(Arc::new(super::parser::create_loader())),
        "relativedelta" => Ok(Arc::new(super::relativedelta::create_loader())),
        "rrule" => Ok(Arc::new(super::rrule::create_loader())),
        "tz" => Ok(Arc::new(super::tz::create_loader())),
        "utils" => Ok(Arc::new(super::utils::create_loader())),
        "zoneinfo" => Ok(Arc::new(super::zoneinfo::create_loader())),
        #[cfg(windows)]
        "tzwin" => Ok(Arc::new(super::tzwin::create_loader())),
        #[cfg(not(windows))]
        "tzwin" => Err(RegistryError::PlatformUnsupported {
            module: "tzwin".to_string(),
            platform: std::env::consts::OS,
        }),
        _ => Err(RegistryError::UnknownModule {
            name: name.to_string(),
        }),
    }
}

/// The loaders of every component available on this host
///
/// Seven components everywhere, plus `tzwin` on Windows.
#[must_use]
pub fn standard_loaders() -> Vec<Arc<dyn ModuleLoader>> {
    let mut loaders: Vec<Arc<dyn ModuleLoader>> = vec![
        Arc::new(super::easter::create_loader()),
        Arc::new(super::parser::create_loader()),
        Arc::new(super::relativedelta::create_loader()),
        Arc::new(super::rrule::create_loader()),
        Arc::new(super::tz::create_loader()),
        Arc::new(super::utils::create_loader()),
        Arc::new(super::zoneinfo::create_loader()),
    ];

    #[cfg(windows)]
    loaders.push(Arc::new(super::tzwin::create_loader()));

    loaders
}
