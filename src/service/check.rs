use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::domain::{Config, ValidationErrors};
use crate::ConfigProvider;

use super::format::FormatService;

/// Validates a config file without making it the active one.
pub(super) struct CheckService {
    path: Option<PathBuf>,
}

impl CheckService {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn run(&self) -> Result<()> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => Config::config_path()?,
        };

        match Config::from_path(&path) {
            Ok(config) => {
                FormatService::success(&format!(
                    "'{}' is valid: {} profiles, {} holiday entries, active profile '{}'",
                    path.display(),
                    config.profiles().count(),
                    config.holidays().len(),
                    config.active_profile()
                ));
                Ok(())
            }
            Err(err) => {
                let Some(errors) = err.downcast_ref::<ValidationErrors>() else {
                    return Err(err);
                };
                for (location, error) in errors.iter() {
                    FormatService::error(&format!("{}: {}", location, error));
                }
                bail!("'{}' has {} problem(s)", path.display(), errors.len())
            }
        }
    }
}
