use core::fmt;

use chrono::Weekday;

use super::error::ConfigError;

/// A weekday on which a class is held, stored by its index where 0 is Sunday and 6 is Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassDay(Weekday);

impl ClassDay {
    pub fn from_index(index: i64) -> Result<ClassDay, ConfigError> {
        let weekday = match index {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => return Err(ConfigError::InvalidWeekday { value: index }),
        };
        Ok(ClassDay(weekday))
    }

    pub fn index(&self) -> u8 {
        self.0.num_days_from_sunday() as u8
    }

}

impl fmt::Display for ClassDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 {
            Weekday::Sun => "Sunday",
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
        };
        write!(f, "{}", name)
    }
}
