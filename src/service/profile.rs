use anyhow::Result;

use crate::ConfigProvider;

use super::format::FormatService;

pub(super) struct ProfileService<'s, Config>
where
    Config: ConfigProvider,
{
    config: &'s Config,
}

impl<'s, Config> ProfileService<'s, Config>
where
    Config: ConfigProvider,
{
    pub fn new(config: &'s Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        let (descriptors, active_idx) = self.rows();
        let is_active = move |idx: usize| -> bool { active_idx == Some(idx) };
        FormatService::active_item_table(descriptors, is_active);
        Ok(())
    }

    /// One line per profile and the index of the active one.
    fn rows(&self) -> (Vec<String>, Option<usize>) {
        let active = self.config.active_profile();
        let mut active_idx = None;
        let descriptors = self
            .config
            .profiles()
            .enumerate()
            .map(|(idx, (key, course))| {
                if key == active {
                    active_idx = Some(idx);
                }
                format!("{:<20} {}", key, course.name())
            })
            .collect();
        (descriptors, active_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Config;

    #[test]
    fn test_rows_mark_active_profile() {
        let mut config = Config::builtin().unwrap();
        let (rows, active) = ProfileService::new(&config).rows();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("crash-course"));
        assert_eq!(active, Some(1));

        config.select("crash-course").unwrap();
        let (_, active) = ProfileService::new(&config).rows();
        assert_eq!(active, Some(0));
    }
}
