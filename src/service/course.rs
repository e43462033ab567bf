use anyhow::{Context, Result};

use crate::domain::CourseConfig;
use crate::ConfigProvider;

use super::format::FormatService;

pub(super) struct CourseService<'s, Config>
where
    Config: ConfigProvider,
{
    config: &'s Config,
}

impl<'s, Config> CourseService<'s, Config>
where
    Config: ConfigProvider,
{
    pub fn new(config: &'s Config) -> Self {
        Self { config }
    }

    pub fn run(&self, toml: bool) -> Result<()> {
        if toml {
            print!("{}", self.render_toml()?);
            return Ok(());
        }
        FormatService::heading(&format!("Profile: {}", self.config.active_profile()));
        println!("{}", render_text(self.config.course()));
        Ok(())
    }

    fn render_toml(&self) -> Result<String> {
        toml_edit::ser::to_string_pretty(&self.config.course().to_do())
            .context("Failed to serialize course to toml")
    }
}

fn render_text(course: &CourseConfig) -> String {
    let days = course
        .class_days()
        .iter()
        .map(|it| format!("{} ({})", it, it.index()))
        .collect::<Vec<_>>()
        .join(", ");
    let slot = course.time_slot();
    [
        course.name().to_string(),
        format!("  Classes per week: {}", course.weekly_classes()),
        format!("  Class days:       {}", days),
        format!(
            "  Time slot:        {} - {}",
            slot.start().format("%H:%M"),
            slot.end().format("%H:%M")
        ),
        format!("  Hours per class:  {}", course.class_hours()),
        format!("  Duration:         {} months", course.duration_months()),
        format!("  Fee per hour:     {}", course.fee_per_hour()),
        format!(
            "  Starts on:        {}",
            course.course_start_date().format("%Y-%m-%d")
        ),
    ]
    .join("\n")
}
