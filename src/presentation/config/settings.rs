use super::Environment;

const APP_ENV: &str = "APP_ENV";
const LOG_FORMAT: &str = "LOG_FORMAT";
const USER_AGENT: &str = "DOCREF_USER_AGENT";

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub logging: LoggingSettings,
    pub http: HttpSettings,
}

#[derive(Debug, Clone, Default)]
pub struct LoggingSettings {
    pub json_format: bool,
}

#[derive(Debug, Clone, Default)]
pub struct HttpSettings {
    pub user_agent: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{0}")]
    InvalidEnvironment(String),
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup(APP_ENV) {
            Some(raw) => raw
                .parse::<Environment>()
                .map_err(SettingsError::InvalidEnvironment)?,
            None => Environment::default(),
        };

        let json_format = lookup(LOG_FORMAT)
            .map(|v| v.to_lowercase() == "json")
            .unwrap_or(false);

        let user_agent = lookup(USER_AGENT).filter(|v| !v.trim().is_empty());

        Ok(Self {
            environment,
            logging: LoggingSettings { json_format },
            http: HttpSettings { user_agent },
        })
    }
}
