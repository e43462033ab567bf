use anyhow::Result;

use crate::domain::Holidays;
use crate::ConfigProvider;

use super::format::FormatService;

pub(super) struct HolidayService<'s, Config>
where
    Config: ConfigProvider,
{
    config: &'s Config,
}

impl<'s, Config> HolidayService<'s, Config>
where
    Config: ConfigProvider,
{
    pub fn new(config: &'s Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        let holidays = self.config.holidays();
        if holidays.is_empty() {
            FormatService::info("No holidays configured");
            return Ok(());
        }
        for line in lines(holidays) {
            println!("{}", line);
        }
        Ok(())
    }
}

/// One line per entry in calendar order, e.g. `08 August   : 13, 14, 15`.
fn lines(holidays: &Holidays) -> Vec<String> {
    (1..=12)
        .flat_map(move |month| holidays.for_month(month))
        .map(|entry| {
            let days = entry
                .days()
                .iter()
                .map(|it| it.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{:02} {:<9}: {}", entry.month(), entry.month_name(), days)
        })
        .collect()
}
