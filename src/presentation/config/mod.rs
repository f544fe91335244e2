mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{HttpSettings, LoggingSettings, Settings, SettingsError};
