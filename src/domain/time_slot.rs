use core::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

use super::error::ConfigError;

/// Daily window in which a class is held, written as `HH:MM-HH:MM` on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

fn slot_regex() -> &'static Regex {
    static SLOT: OnceLock<Regex> = OnceLock::new();
    SLOT.get_or_init(|| {
        Regex::new(r"^(?P<start_h>\d{2}):(?P<start_m>\d{2})-(?P<end_h>\d{2}):(?P<end_m>\d{2})$")
            .expect("time slot pattern is valid")
    })
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Option<TimeSlot> {
        (start < end).then_some(TimeSlot { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

impl FromStr for TimeSlot {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidTimeSlot {
            value: s.to_string(),
        };
        let captures = slot_regex().captures(s.trim()).ok_or_else(invalid)?;
        let time = |hour: &str, minute: &str| -> Option<NaiveTime> {
            let hour = captures.name(hour)?.as_str().parse().ok()?;
            let minute = captures.name(minute)?.as_str().parse().ok()?;
            NaiveTime::from_hms_opt(hour, minute, 0)
        };
        let start = time("start_h", "start_m").ok_or_else(invalid)?;
        let end = time("end_h", "end_m").ok_or_else(invalid)?;
        TimeSlot::new(start, end).ok_or_else(invalid)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start.hour(),
            self.start.minute(),
            self.end.hour(),
            self.end.minute()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let slot: TimeSlot = "15:00-16:30".parse().unwrap();
        assert_eq!(slot.start(), NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        assert_eq!(slot.end(), NaiveTime::from_hms_opt(16, 30, 0).unwrap());
        assert_eq!(slot.to_string(), "15:00-16:30");
    }

    #[test]
    fn test_rejects_malformed() {
        for text in ["", "15:00", "3:00-4:00", "15:00 - 16:30", "25:00-26:00", "15:61-16:00"] {
            assert_eq!(
                text.parse::<TimeSlot>(),
                Err(ConfigError::InvalidTimeSlot {
                    value: text.to_string()
                }),
                "{text}"
            );
        }
    }

    #[test]
    fn test_end_must_follow_start() {
        assert!("16:30-15:00".parse::<TimeSlot>().is_err());
        assert!("15:00-15:00".parse::<TimeSlot>().is_err());
    }
}
