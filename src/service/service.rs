use std::path::Path;

use anyhow::Result;
use clap::CommandFactory;
use tracing::debug;

use crate::{
    cli::{Cli, Commands},
    domain::Config,
    ConfigProvider,
};

use super::{
    check::CheckService, course::CourseService, holiday::HolidayService, profile::ProfileService,
};

pub struct Service<Provider>
where
    Provider: ConfigProvider,
{
    config: Provider,
}

impl<Provider> Service<Provider>
where
    Provider: ConfigProvider,
{
    pub fn new(config: Provider) -> Service<Provider> {
        Service { config }
    }

    pub fn show(&self, toml: bool) -> Result<()> {
        CourseService::new(&self.config).run(toml)
    }

    pub fn profiles(&self) -> Result<()> {
        ProfileService::new(&self.config).run()
    }

    pub fn holidays(&self) -> Result<()> {
        HolidayService::new(&self.config).run()
    }
}

/// Dispatches a parsed command line. The configuration is only loaded for
/// commands that read it.
pub fn run(args: Cli) -> Result<()> {
    let command = args.command.unwrap_or(Commands::Show { toml: false });
    debug!(?command, "running command");

    let config_path = args.config.as_deref();
    let profile = args.profile.as_deref();
    match command {
        Commands::Show { toml } => Service::new(load(config_path, profile)?).show(toml),
        Commands::Profiles => Service::new(load(config_path, profile)?).profiles(),
        Commands::Holidays => Service::new(load(config_path, profile)?).holidays(),
        Commands::Config => {
            print!("{}", load(config_path, profile)?.to_toml()?);
            Ok(())
        }
        Commands::Check { path } => CheckService::new(path.or(args.config.clone())).run(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cb", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Loads the configuration and applies the profile chosen on the command
/// line, which takes precedence over `active_profile` in the file.
fn load(path: Option<&Path>, profile: Option<&str>) -> Result<Config> {
    let mut config = Config::new(path)?;
    if let Some(profile) = profile {
        config.select(profile)?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_config(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("coursebook-load-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let text = Config::builtin().unwrap().to_toml().unwrap();
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_load_keeps_file_choice() {
        let path = write_config("keep.toml");
        let config = load(Some(path.as_path()), None).unwrap();
        assert_eq!(config.active_profile(), "jlpt-n5-batch-18");
    }

    #[test]
    fn test_load_profile_overrides_file_choice() {
        let path = write_config("override.toml");
        let config = load(Some(path.as_path()), Some("crash-course")).unwrap();
        assert_eq!(config.active_profile(), "crash-course");
        assert_eq!(config.course().name(), "1.5 months Crash course");
    }

    #[test]
    fn test_load_unknown_profile() {
        let path = write_config("unknown.toml");
        let err = load(Some(path.as_path()), Some("n4")).unwrap_err();
        assert!(err.to_string().starts_with("no profile named 'n4'"));
    }
}
