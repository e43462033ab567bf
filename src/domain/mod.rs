mod config;
mod course;
mod error;
mod holiday;
mod time_slot;
mod weekday;

pub(crate) use config::Config;
pub(crate) use course::CourseConfig;
pub(crate) use error::ValidationErrors;
pub(crate) use holiday::Holidays;
