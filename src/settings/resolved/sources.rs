use std::fmt;

/// Where an effective setting came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    Default,
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "built-in default"),
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

/// Origin of every setting that was resolved, keyed by `section.key`.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    entries: Vec<(&'static str, SettingSource)>,
}

impl ConfigSources {
    pub(crate) fn record(&mut self, key: &'static str, source: SettingSource) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = source,
            None => self.entries.push((key, source)),
        }
    }

    /// Origin of `key`, falling back to the config file key when unknown.
    pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, source)| source.clone())
            .unwrap_or(SettingSource::ConfigKey(key))
    }
}
