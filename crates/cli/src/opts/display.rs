use clap::Parser;
use eyre::Result;
use filestamp_common::time::{DisplayInstant, is_valid_format};
use filestamp_config::{Config, DEFAULT_DATE_FORMAT};
use std::time::SystemTime;

/// Options controlling how modification times are printed.
#[derive(Clone, Debug, Default, Parser)]
pub struct DisplayOpts {
    /// Print times in UTC instead of local time.
    #[arg(long, global = true)]
    pub utc: bool,

    /// strftime layout used to print times, e.g. `%Y-%m-%dT%H:%M:%S%.3f`.
    #[arg(long, global = true, value_name = "LAYOUT", value_parser = parse_format)]
    pub format: Option<String>,
}

impl DisplayOpts {
    /// Merges the options on top of the config.
    pub fn instant_format(&self, config: &Config) -> Result<InstantFormat> {
        let layout = self.format.clone().unwrap_or_else(|| config.date_format.clone());
        eyre::ensure!(
            is_valid_format(&layout),
            "invalid `date_format` {layout:?}: not a valid strftime layout"
        );
        Ok(InstantFormat { layout, utc: self.utc || config.utc })
    }
}

fn parse_format(s: &str) -> Result<String, String> {
    if is_valid_format(s) { Ok(s.to_string()) } else { Err(format!("invalid strftime layout `{s}`")) }
}

/// Resolved display settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstantFormat {
    layout: String,
    utc: bool,
}

impl Default for InstantFormat {
    fn default() -> Self {
        Self { layout: DEFAULT_DATE_FORMAT.to_string(), utc: false }
    }
}

impl InstantFormat {
    /// Returns a displayable view of `instant`.
    pub fn display(&self, instant: SystemTime) -> DisplayInstant<'_> {
        DisplayInstant::new(instant).format(&self.layout).utc(self.utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn flags_override_config() {
        let config = Config { date_format: "%Y".to_string(), ..Default::default() };
        let opts = DisplayOpts { utc: true, format: Some("%d.%m.%Y".to_string()) };
        let format = opts.instant_format(&config).unwrap();

        let instant = UNIX_EPOCH + Duration::from_secs(1_704_164_645);
        assert_eq!(format.display(instant).to_string(), "02.01.2024");
    }

    #[test]
    fn config_layout_is_used() {
        let config = Config { date_format: "%Y".to_string(), utc: true, ..Default::default() };
        let format = DisplayOpts::default().instant_format(&config).unwrap();

        let instant = UNIX_EPOCH + Duration::from_secs(1_704_164_645);
        assert_eq!(format.display(instant).to_string(), "2024");
    }

    #[test]
    fn default_matches_config_default() {
        let format = DisplayOpts::default().instant_format(&Config::default()).unwrap();
        assert_eq!(format, InstantFormat::default());
    }

    #[test]
    fn rejects_bad_config_layout() {
        let config = Config { date_format: "%Q".to_string(), ..Default::default() };
        let err = DisplayOpts::default().instant_format(&config).unwrap_err();
        assert!(err.to_string().contains("%Q"), "{err}");
    }
}
