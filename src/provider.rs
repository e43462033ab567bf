use crate::domain::{CourseConfig, Holidays};

/// Read-only access to the loaded configuration. Consumers take this instead
/// of reaching for global state.
pub(crate) trait ConfigProvider {
    /// The active course profile.
    fn course(&self) -> &CourseConfig;
    fn active_profile(&self) -> &str;
    /// All profiles ordered by key.
    fn profiles(&self) -> impl Iterator<Item = (&str, &CourseConfig)>;
    fn holidays(&self) -> &Holidays;
}
