use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::ConfigProvider;

use super::{
    course::{CourseConfig, CourseDO},
    error::{ConfigError, Location, ValidationErrors},
    holiday::{HolidayEntryDO, Holidays},
};

/// Default configuration shipped with the binary.
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

#[derive(Debug, Serialize, Deserialize)]
struct ConfigDO {
    active_profile: Option<String>,
    #[serde(default)]
    profiles: BTreeMap<String, CourseDO>,
    #[serde(default)]
    holidays: Vec<HolidayEntryDO>,
}

/// Validated configuration: every named course profile, the one in use and
/// the holiday list. Built once at startup and handed to whoever needs it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Config {
    profiles: BTreeMap<String, CourseConfig>,
    /// Key into `profiles`. Always present there.
    active: String,
    holidays: Holidays,
}

impl Config {
    /// Loads the configuration from `path`, or from the default config file
    /// location when no path is given. A missing default file is created from
    /// the built-in configuration.
    ///
    /// Platform-specific config directory paths
    /// Linux: $XDG_CONFIG_HOME or $HOME/.config/coursebook/config.toml
    /// macOS: $HOME/.config/coursebook/config.toml
    /// Windows: {FOLDERID_RoamingAppData}\coursebook\config.toml
    pub fn new(path: Option<&Path>) -> Result<Config> {
        if let Some(path) = path {
            return Config::from_path(path);
        }
        let config_path = match Self::config_path() {
            Ok(config_path) => config_path,
            Err(err) => {
                warn!("{:#}, using the built-in configuration", err);
                return Config::builtin();
            }
        };
        if !config_path.is_file() {
            Self::create_default_config_file(&config_path)?;
            info!(
                path = %config_path.display(),
                "created default config file"
            );
        }
        Config::from_path(config_path)
    }

    pub fn from_path<P>(path: P) -> Result<Config>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = std::fs::read_to_string(path)
            .with_context(|| anyhow!("Failed to open config file: {}", path.display()))?;
        debug!(path = %path.display(), "loading config");
        file.parse::<Config>()
            .with_context(|| anyhow!("Invalid config file: {}", path.display()))
    }

    pub fn builtin() -> Result<Config> {
        DEFAULT_CONFIG
            .parse::<Config>()
            .context("Built-in configuration is invalid")
    }

    fn from_do(config_do: ConfigDO) -> Result<Config, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let keys = config_do.profiles.keys().cloned().collect::<Vec<_>>();

        let mut profiles = BTreeMap::new();
        for (key, course_do) in config_do.profiles {
            match CourseConfig::from_do(course_do) {
                Ok(course) => {
                    profiles.insert(key, course);
                }
                Err(e) => errors.absorb(&Location::Profile(key), e),
            }
        }

        let holidays = match Holidays::from_do(config_do.holidays) {
            Ok(holidays) => holidays,
            Err(e) => {
                errors.append(e);
                Holidays::default()
            }
        };

        // Resolved against the declared keys so a bad selector is reported
        // even when the profile it names is itself invalid.
        let active = match config_do.active_profile {
            Some(name) if keys.contains(&name) => Some(name),
            Some(name) => {
                errors.push(
                    Location::Root,
                    ConfigError::UnknownProfile {
                        name,
                        available: keys.join(", "),
                    },
                );
                None
            }
            None if keys.is_empty() => {
                errors.push(Location::Root, ConfigError::NoProfiles);
                None
            }
            None => keys.first().cloned(),
        };

        match active {
            Some(active) if errors.is_empty() => Ok(Config {
                profiles,
                active,
                holidays,
            }),
            _ => Err(errors),
        }
    }

    /// Makes `name` the active profile.
    pub fn select(&mut self, name: &str) -> Result<(), ConfigError> {
        if !self.profiles.contains_key(name) {
            return Err(ConfigError::UnknownProfile {
                name: name.to_string(),
                available: available(&self.profiles),
            });
        }
        debug!(profile = name, "selected profile");
        self.active = name.to_string();
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        let config_do = ConfigDO {
            active_profile: Some(self.active.clone()),
            profiles: self
                .profiles
                .iter()
                .map(|(key, course)| (key.clone(), course.to_do()))
                .collect(),
            holidays: self.holidays.to_do(),
        };
        toml_edit::ser::to_string_pretty(&config_do).context("Failed to serialize config to toml")
    }

    pub fn create_default_config_file(path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .context("Failed to load parent of config file")?;
        std::fs::create_dir_all(parent)?;
        std::fs::write(path, DEFAULT_CONFIG).context("Failed to create config file")?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let dir = if cfg!(target_os = "macos") {
            let home_dir =
                dirs::home_dir().context("Failed to find home directory on your system")?;
            home_dir.join(".config")
        } else {
            dirs::config_dir().context("Failed to find config directory on your system.")?
        };
        Ok(dir.join("coursebook").join("config.toml"))
    }
}

fn available(profiles: &BTreeMap<String, CourseConfig>) -> String {
    profiles.keys().cloned().collect::<Vec<_>>().join(", ")
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config_do = toml_edit::de::from_str::<ConfigDO>(s)
            .with_context(|| anyhow!("Could not read Config from toml"))?;
        let config = Config::from_do(config_do)?;
        Ok(config)
    }
}

impl ConfigProvider for Config {
    fn course(&self) -> &CourseConfig {
        &self.profiles[&self.active]
    }

    fn active_profile(&self) -> &str {
        &self.active
    }

    fn profiles(&self) -> impl Iterator<Item = (&str, &CourseConfig)> {
        self.profiles.iter().map(|(key, course)| (key.as_str(), course))
    }

    fn holidays(&self) -> &Holidays {
        &self.holidays
    }
}
