use thiserror::Error;

use super::SettingSource;

/// A configured value that failed validation, with where it came from.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
    pub(crate) key: &'static str,
    pub(crate) value: String,
    pub(crate) origin: SettingSource,
    pub(crate) reason: String,
}

impl ConfigError {
    pub(crate) fn invalid(
        key: &'static str,
        value: impl Into<String>,
        origin: SettingSource,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            key,
            value: value.into(),
            origin,
            reason: reason.into(),
        }
    }

    /// A name that matches none of `choices`.
    pub(crate) fn unknown(
        key: &'static str,
        value: impl Into<String>,
        origin: SettingSource,
        choices: &[&str],
    ) -> Self {
        Self::invalid(
            key,
            value,
            origin,
            format!("expected one of {}", choices.join(", ")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_key_origin_and_choices() {
        let err = ConfigError::unknown(
            "ui.theme",
            "neon",
            SettingSource::CliFlag("--theme"),
            &["slate", "light"],
        );
        let message = err.to_string();
        assert!(message.contains("ui.theme"));
        assert!(message.contains("CLI flag `--theme`"));
        assert!(message.contains("expected one of slate, light"));
        assert!(message.contains("(value: neon)"));
    }
}
