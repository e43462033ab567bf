use std::fmt;

use thiserror::Error;

/// A single defect found while validating course or holiday data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("class day {value} is not a weekday index (expected 0 = Sunday .. 6 = Saturday)")]
    InvalidWeekday { value: i64 },

    #[error("class day {value} is listed more than once")]
    DuplicateWeekday { value: u8 },

    #[error("'{value}' is not a valid calendar date (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("weekly_classes is {weekly_classes} but {class_days} class days are listed")]
    MismatchedClassDayCount {
        weekly_classes: i64,
        class_days: usize,
    },

    #[error("{field} must not be negative (found {value})")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("{field} must be a finite number (found {value})")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} is out of range (found {value})")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("course name must not be empty")]
    EmptyName,

    #[error("'{value}' is not a valid time slot (expected HH:MM-HH:MM with end after start)")]
    InvalidTimeSlot { value: String },

    #[error("holiday month {month} is not in 1..=12")]
    InvalidHolidayMonth { month: i64 },

    #[error("day {day} does not exist in month {month}")]
    InvalidHolidayDay { month: u32, day: i64 },

    #[error("no profile named '{name}' (available: {available})")]
    UnknownProfile { name: String, available: String },

    #[error("the configuration does not define any profile")]
    NoProfiles,
}

/// Where in the configuration a [ConfigError] was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Profile(String),
    Holiday(usize),
    Root,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Profile(name) => write!(f, "profiles.{}", name),
            Location::Holiday(idx) => write!(f, "holidays[{}]", idx),
            Location::Root => write!(f, "config"),
        }
    }
}

/// All defects found in one load, reported together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors {
    errors: Vec<(Location, ConfigError)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, location: Location, error: ConfigError) {
        self.errors.push((location, error));
    }

    /// Moves every error of `other` into `self`, relocating them to `location`.
    pub fn absorb(&mut self, location: &Location, other: ValidationErrors) {
        self.errors.extend(
            other
                .errors
                .into_iter()
                .map(|(_, error)| (location.clone(), error)),
        );
    }

    pub fn append(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Location, ConfigError)> {
        self.errors.iter()
    }

    #[cfg(test)]
    pub fn errors(&self) -> impl Iterator<Item = &ConfigError> {
        self.errors.iter().map(|(_, error)| error)
    }

    /// `Ok(value)` when nothing was collected, otherwise the aggregated errors.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration ({} problem", self.errors.len())?;
        if self.errors.len() != 1 {
            write!(f, "s")?;
        }
        write!(f, ")")?;
        for (location, error) in &self.errors {
            write!(f, "\n  {}: {}", location, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<(Location, ConfigError)> for ValidationErrors {
    fn from((location, error): (Location, ConfigError)) -> Self {
        ValidationErrors {
            errors: vec![(location, error)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_problem() {
        let mut errors = ValidationErrors::new();
        errors.push(
            Location::Profile("a".into()),
            ConfigError::InvalidWeekday { value: 9 },
        );
        errors.push(
            Location::Holiday(2),
            ConfigError::InvalidHolidayDay { month: 4, day: 31 },
        );

        let text = errors.to_string();
        assert!(text.starts_with("invalid configuration (2 problems)"));
        assert!(text.contains("profiles.a: class day 9"));
        assert!(text.contains("holidays[2]: day 31 does not exist in month 4"));
    }

    #[test]
    fn test_absorb_relocates() {
        let mut inner = ValidationErrors::new();
        inner.push(Location::Root, ConfigError::EmptyName);
        let mut outer = ValidationErrors::new();
        outer.absorb(&Location::Profile("x".into()), inner);

        assert_eq!(outer.len(), 1);
        let (location, error) = outer.iter().next().unwrap();
        assert_eq!(location, &Location::Profile("x".into()));
        assert_eq!(error, &ConfigError::EmptyName);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(5), Ok(5));
        let errors: ValidationErrors = (Location::Root, ConfigError::NoProfiles).into();
        assert!(errors.into_result(5).is_err());
    }
}
