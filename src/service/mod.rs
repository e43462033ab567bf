mod check;
mod course;
mod format;
mod holiday;
mod profile;
mod service;

pub(crate) use format::FormatService;
pub(crate) use service::run;
