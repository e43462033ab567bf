use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{ConfigError, Location, ValidationErrors};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Days of one month excluded from scheduling. The list recurs every year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayEntry {
    month: u32,
    days: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntryDO {
    pub month: i64,
    pub days: Vec<i64>,
}

/// Ordered list of holiday entries, as authored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Holidays(Vec<HolidayEntry>);

/// Longest a month can be in any year. February allows the 29th since the
/// list is not bound to one year.
fn days_in_month(month: u32) -> u32 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl HolidayEntry {
    pub fn from_do(entry_do: HolidayEntryDO) -> Result<HolidayEntry, ValidationErrors> {
        let month = match u32::try_from(entry_do.month) {
            Ok(month @ 1..=12) => month,
            _ => {
                return Err((
                    Location::Root,
                    ConfigError::InvalidHolidayMonth {
                        month: entry_do.month,
                    },
                )
                    .into())
            }
        };

        let mut errors = ValidationErrors::new();
        let last = days_in_month(month);
        let mut days = BTreeSet::new();
        for &day in &entry_do.days {
            match u32::try_from(day) {
                Ok(it) if (1..=last).contains(&it) => {
                    if !days.insert(it) {
                        warn!(month, day = it, "holiday day listed twice, ignoring duplicate");
                    }
                }
                _ => errors.push(
                    Location::Root,
                    ConfigError::InvalidHolidayDay { month, day },
                ),
            }
        }

        errors.into_result(HolidayEntry {
            month,
            days: days.into_iter().collect(),
        })
    }

    pub fn to_do(&self) -> HolidayEntryDO {
        HolidayEntryDO {
            month: self.month.into(),
            days: self.days.iter().map(|&it| it.into()).collect(),
        }
    }

    /// Month number, 1 = January.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Excluded days of the month, ascending.
    pub fn days(&self) -> &[u32] {
        &self.days
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl Holidays {
    pub fn new(entries: Vec<HolidayEntry>) -> Holidays {
        let mut months = HashSet::new();
        for entry in &entries {
            if !months.insert(entry.month) {
                warn!(month = entry.month, "month appears in more than one holiday entry");
            }
        }
        Holidays(entries)
    }

    /// Validates every entry and reports all problems at once, each tagged
    /// with the position of its entry.
    pub fn from_do(entries: Vec<HolidayEntryDO>) -> Result<Holidays, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut valid = Vec::with_capacity(entries.len());
        for (idx, entry_do) in entries.into_iter().enumerate() {
            match HolidayEntry::from_do(entry_do) {
                Ok(entry) => valid.push(entry),
                Err(e) => errors.absorb(&Location::Holiday(idx), e),
            }
        }
        errors.into_result(()).map(|_| Holidays::new(valid))
    }

    pub fn to_do(&self) -> Vec<HolidayEntryDO> {
        self.0.iter().map(HolidayEntry::to_do).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries for `month`, in authored order.
    pub fn for_month(&self, month: u32) -> impl Iterator<Item = &HolidayEntry> {
        self.0.iter().filter(move |it| it.month == month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(month: i64, days: &[i64]) -> HolidayEntryDO {
        HolidayEntryDO {
            month,
            days: days.to_vec(),
        }
    }

    #[test]
    fn test_valid_entry() {
        let entry = HolidayEntry::from_do(entry(8, &[15, 13, 14])).unwrap();
        assert_eq!(entry.month(), 8);
        assert_eq!(entry.days(), &[13, 14, 15]);
        assert_eq!(entry.month_name(), "August");
    }

    #[test]
    fn test_duplicate_days_are_merged() {
        let _guard = crate::logger::init_test_logger();
        let entry = HolidayEntry::from_do(entry(1, &[1, 2, 1])).unwrap();
        assert_eq!(entry.days(), &[1, 2]);
    }

    #[test]
    fn test_month_out_of_range() {
        for month in [0, 13, -1] {
            let errors = HolidayEntry::from_do(entry(month, &[1])).unwrap_err();
            assert_eq!(
                errors.errors().collect::<Vec<_>>(),
                vec![&ConfigError::InvalidHolidayMonth { month }]
            );
        }
    }

    #[test]
    fn test_day_bounded_by_month_length() {
        assert!(HolidayEntry::from_do(entry(4, &[30])).is_ok());
        assert!(HolidayEntry::from_do(entry(2, &[29])).is_ok());
        assert!(HolidayEntry::from_do(entry(12, &[31])).is_ok());

        let errors = HolidayEntry::from_do(entry(4, &[0, 31])).unwrap_err();
        assert_eq!(
            errors.errors().cloned().collect::<Vec<_>>(),
            vec![
                ConfigError::InvalidHolidayDay { month: 4, day: 0 },
                ConfigError::InvalidHolidayDay { month: 4, day: 31 },
            ]
        );
        assert!(HolidayEntry::from_do(entry(2, &[30])).is_err());
    }

    #[test]
    fn test_errors_carry_entry_position() {
        let errors =
            Holidays::from_do(vec![entry(1, &[1]), entry(4, &[31]), entry(14, &[1])]).unwrap_err();
        let locations = errors.iter().map(|(l, _)| l.clone()).collect::<Vec<_>>();
        assert_eq!(locations, vec![Location::Holiday(1), Location::Holiday(2)]);
    }

    #[test]
    fn test_duplicate_months_are_accepted() {
        let _guard = crate::logger::init_test_logger();
        let holidays = Holidays::from_do(vec![entry(5, &[1]), entry(5, &[3])]).unwrap();
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays.for_month(5).count(), 2);
        assert_eq!(holidays.for_month(6).count(), 0);
    }

    #[test]
    fn test_to_do_keeps_order() {
        let entries = vec![entry(12, &[30, 31]), entry(1, &[1, 2])];
        let holidays = Holidays::from_do(entries.clone()).unwrap();
        assert_eq!(holidays.to_do(), entries);
    }
}
