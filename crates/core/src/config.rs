//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services. The
//! core never reads process-wide environment variables itself; binaries do that and hand the
//! values over here.

use crate::catalog::SectionCatalog;
use crate::constants::CATALOG_FILE_EXTENSIONS;
use crate::{ConsultError, ConsultResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    catalog_path: Option<PathBuf>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `catalog_path` replaces the built-in catalog when set. It is validated here so a bad
    /// override fails at startup rather than on first use.
    pub fn new(catalog_path: Option<PathBuf>) -> ConsultResult<Self> {
        if let Some(path) = catalog_path.as_deref() {
            validate_catalog_path(path)?;
        }
        Ok(Self { catalog_path })
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    /// Load the configured catalog: the override file when set, otherwise the built-in one.
    pub fn load_catalog(&self) -> ConsultResult<SectionCatalog> {
        match self.catalog_path.as_deref() {
            Some(path) => {
                tracing::info!("loading section catalog from {}", path.display());
                SectionCatalog::from_path(path)
            }
            None => SectionCatalog::builtin(),
        }
    }
}

/// Parse an optional catalog override value.
///
/// `None`, empty and whitespace-only values mean "use the built-in catalog".
pub fn catalog_path_from_env_value(value: Option<String>) -> ConsultResult<CoreConfig> {
    let path = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    CoreConfig::new(path)
}

fn validate_catalog_path(path: &Path) -> ConsultResult<()> {
    if !path.is_file() {
        return Err(ConsultError::InvalidInput(format!(
            "catalog override is not a file: {}",
            path.display()
        )));
    }

    let extension_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| CATALOG_FILE_EXTENSIONS.contains(&e));

    if !extension_ok {
        return Err(ConsultError::InvalidInput(format!(
            "catalog override must be a .yaml or .yml file: {}",
            path.display()
        )));
    }

    Ok(())
}
