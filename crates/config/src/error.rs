//! Errors raised while loading the config.

use figment::{Profile, Source};
use std::{error::Error, fmt, path::Path};

/// The first line of every [`ExtractConfigError`] message.
pub const FAILED_TO_EXTRACT_CONFIG_MSG: &str = "failed to extract filestamp config:";

/// The config could not be extracted.
///
/// Displays one line per distinct bad value, each naming the setting and where it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfigError {
    error: figment::Error,
}

impl ExtractConfigError {
    /// Wraps the figment error
    pub fn new(error: figment::Error) -> Self {
        Self { error }
    }

    /// Returns every distinct bad value, in the order figment reported them.
    pub fn problems(&self) -> Vec<SettingError> {
        let mut problems = Vec::<SettingError>::with_capacity(self.error.count());
        for error in self.error.clone() {
            let problem = SettingError(error);
            if !problems.contains(&problem) {
                problems.push(problem);
            }
        }
        problems
    }

    /// Returns the keys of the offending settings, e.g. `utc`.
    pub fn settings(&self) -> Vec<String> {
        self.problems().iter().filter_map(SettingError::setting).collect()
    }
}

impl fmt::Display for ExtractConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FAILED_TO_EXTRACT_CONFIG_MSG}")?;
        for problem in self.problems() {
            writeln!(f, "{problem}")?;
        }
        Ok(())
    }
}

impl Error for ExtractConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(&self.error)
    }
}

/// A single bad config value.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingError(figment::Error);

impl SettingError {
    /// Dotted key of the setting, e.g. `shift_days`.
    pub fn setting(&self) -> Option<String> {
        (!self.0.path.is_empty()).then(|| self.0.path.join("."))
    }

    /// The config file holding the value, if it came from one.
    pub fn file(&self) -> Option<&Path> {
        match self.0.metadata.as_ref()?.source.as_ref()? {
            Source::File(path) => Some(path.as_path()),
            _ => None,
        }
    }

    /// The profile the value was read for.
    pub fn profile(&self) -> Option<&Profile> {
        self.0.profile.as_ref()
    }
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.setting() {
            Some(setting) => write!(f, "`{setting}`: {}", self.0.kind)?,
            None => write!(f, "{}", self.0.kind)?,
        }
        if let Some(file) = self.file() {
            write!(f, " in {}", file.display())?;
            if let Some(profile) = self.profile() {
                write!(f, " [profile.{profile}]")?;
            }
        } else if let Some(metadata) = &self.0.metadata {
            write!(f, " from {}", metadata.name)?;
        }
        Ok(())
    }
}
