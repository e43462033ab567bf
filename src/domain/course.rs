use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    error::{ConfigError, Location, ValidationErrors},
    time_slot::TimeSlot,
    weekday::ClassDay,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Static parameters of one recurring course offering.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseConfig {
    name: String,
    weekly_classes: u8,
    class_days: Vec<ClassDay>,
    /// Length of a single session in hours.
    class_hours: f64,
    duration_months: u16,
    /// Rate per hour in a single currency unit.
    fee_per_hour: f64,
    course_start_date: NaiveDate,
    time_slot: TimeSlot,
}

/// Course record as written in the config file. Numbers are kept wide and
/// dates as text so that authoring mistakes reach validation instead of
/// failing inside the deserializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDO {
    pub name: String,
    #[serde(alias = "weeklyClasses")]
    pub weekly_classes: i64,
    #[serde(alias = "classDays")]
    pub class_days: Vec<i64>,
    #[serde(alias = "classHours")]
    pub class_hours: f64,
    #[serde(alias = "durationMonths")]
    pub duration_months: i64,
    #[serde(alias = "feePerHour")]
    pub fee_per_hour: f64,
    #[serde(alias = "courseStartDate")]
    pub course_start_date: String,
    #[serde(alias = "timeSlot")]
    pub time_slot: String,
}

impl CourseConfig {
    /// Validates a raw record. Every violation is collected; the result is
    /// either a fully valid course or the complete list of problems.
    pub fn from_do(course_do: CourseDO) -> Result<CourseConfig, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut fail = |error: ConfigError| errors.push(Location::Root, error);

        let name = course_do.name.trim().to_string();
        if name.is_empty() {
            fail(ConfigError::EmptyName);
        }

        let weekly_classes = match u8::try_from(course_do.weekly_classes) {
            Ok(it) => it,
            Err(_) if course_do.weekly_classes < 0 => {
                fail(ConfigError::NegativeValue {
                    field: "weekly_classes",
                    value: course_do.weekly_classes as f64,
                });
                0
            }
            Err(_) => {
                fail(ConfigError::OutOfRange {
                    field: "weekly_classes",
                    value: course_do.weekly_classes,
                });
                0
            }
        };

        let mut class_days = Vec::with_capacity(course_do.class_days.len());
        let mut seen = HashSet::new();
        for &index in &course_do.class_days {
            match ClassDay::from_index(index) {
                Ok(day) => {
                    if seen.insert(day) {
                        class_days.push(day);
                    } else {
                        fail(ConfigError::DuplicateWeekday { value: day.index() });
                    }
                }
                Err(e) => fail(e),
            }
        }

        if course_do.weekly_classes >= 0
            && course_do.class_days.len() as i64 != course_do.weekly_classes
        {
            fail(ConfigError::MismatchedClassDayCount {
                weekly_classes: course_do.weekly_classes,
                class_days: course_do.class_days.len(),
            });
        }

        let class_hours = non_negative("class_hours", course_do.class_hours, &mut fail);
        let fee_per_hour = non_negative("fee_per_hour", course_do.fee_per_hour, &mut fail);

        let duration_months = match u16::try_from(course_do.duration_months) {
            Ok(it) => it,
            Err(_) if course_do.duration_months < 0 => {
                fail(ConfigError::NegativeValue {
                    field: "duration_months",
                    value: course_do.duration_months as f64,
                });
                0
            }
            Err(_) => {
                fail(ConfigError::OutOfRange {
                    field: "duration_months",
                    value: course_do.duration_months,
                });
                0
            }
        };

        let course_start_date =
            match NaiveDate::parse_from_str(course_do.course_start_date.trim(), DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    fail(ConfigError::InvalidDate {
                        value: course_do.course_start_date.clone(),
                    });
                    None
                }
            };

        let time_slot = match course_do.time_slot.parse::<TimeSlot>() {
            Ok(slot) => Some(slot),
            Err(e) => {
                fail(e);
                None
            }
        };

        match (course_start_date, time_slot) {
            (Some(course_start_date), Some(time_slot)) if errors.is_empty() => Ok(CourseConfig {
                name,
                weekly_classes,
                class_days,
                class_hours,
                duration_months,
                fee_per_hour,
                course_start_date,
                time_slot,
            }),
            _ => Err(errors),
        }
    }

    pub fn to_do(&self) -> CourseDO {
        CourseDO {
            name: self.name.clone(),
            weekly_classes: self.weekly_classes.into(),
            class_days: self.class_days.iter().map(|it| it.index().into()).collect(),
            class_hours: self.class_hours,
            duration_months: self.duration_months.into(),
            fee_per_hour: self.fee_per_hour,
            course_start_date: self.course_start_date.format(DATE_FORMAT).to_string(),
            time_slot: self.time_slot.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weekly_classes(&self) -> u8 {
        self.weekly_classes
    }

    pub fn class_days(&self) -> &[ClassDay] {
        &self.class_days
    }

    pub fn class_hours(&self) -> f64 {
        self.class_hours
    }

    pub fn duration_months(&self) -> u16 {
        self.duration_months
    }

    pub fn fee_per_hour(&self) -> f64 {
        self.fee_per_hour
    }

    pub fn course_start_date(&self) -> NaiveDate {
        self.course_start_date
    }

    pub fn time_slot(&self) -> TimeSlot {
        self.time_slot
    }
}

fn non_negative<F>(field: &'static str, value: f64, fail: &mut F) -> f64
where
    F: FnMut(ConfigError),
{
    if !value.is_finite() {
        fail(ConfigError::NotFinite { field, value });
        0.0
    } else if value < 0.0 {
        fail(ConfigError::NegativeValue { field, value });
        0.0
    } else {
        value
    }
}
