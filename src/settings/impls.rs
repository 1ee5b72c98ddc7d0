// Standard library
use std::time::Duration;

// 3rd party crates
use config::{Config, Environment};

// Current module imports
use super::errors::SettingsError;
use super::models::Settings;

impl Settings {
    /// Loads the settings from environment variables and validates them.
    ///
    /// Variables are matched case-insensitively against the field names
    /// (`ACCOUNT_ID`, `API_KEY`, ...). Any missing required setting or
    /// invalid value is a fatal error.
    pub fn load() -> Result<Self, SettingsError> {
        let settings: Settings = Config::builder()
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.account_id.trim().is_empty() {
            return Err(SettingsError::MissingRequired("ACCOUNT_ID"));
        }

        if self.api_key.trim().is_empty() {
            return Err(SettingsError::MissingRequired("API_KEY"));
        }

        if self.zone_id.trim().is_empty() {
            return Err(SettingsError::MissingRequired("ZONE_ID"));
        }

        if self.email_from.trim().is_empty() {
            return Err(SettingsError::MissingRequired("EMAIL_FROM"));
        }

        if self.email_to.trim().is_empty() {
            return Err(SettingsError::MissingRequired("EMAIL_TO"));
        }

        if self.email_password.is_empty() {
            return Err(SettingsError::MissingRequired("EMAIL_PASSWORD"));
        }

        if self.sleep_time == 0 {
            return Err(SettingsError::InvalidSleepTime(self.sleep_time));
        }

        if self.record_names().is_empty() {
            return Err(SettingsError::NoRecordNames);
        }

        Ok(())
    }

    /// Record names to reconcile, in configured order. Entries are
    /// trimmed and empty entries dropped.
    pub fn record_names(&self) -> Vec<String> {
        self.record_names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Email used for the legacy Cloudflare key+email authentication.
    /// `API_EMAIL` wins; `EMAIL` is the fallback identity. `None` selects
    /// bearer-token authentication.
    pub fn api_email(&self) -> Option<&str> {
        non_empty(self.api_email.as_deref()).or_else(|| non_empty(self.email.as_deref()))
    }

    pub fn sleep_duration(&self) -> Duration {
        Duration::from_secs(self.sleep_time * 60)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
