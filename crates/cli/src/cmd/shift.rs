use crate::opts::InstantFormat;
use chrono::TimeDelta;
use clap::Parser;
use eyre::{OptionExt, Result};
use filestamp_common::fs;
use std::path::PathBuf;

/// CLI arguments for `filestamp shift`.
#[derive(Clone, Debug, Parser)]
pub struct ShiftArgs {
    /// The file to update. It must already exist.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub path: PathBuf,

    /// Number of days to move the modification time by. Negative values move it into the past.
    ///
    /// Defaults to minus the configured `shift_days`.
    #[arg(long, value_name = "DAYS", allow_hyphen_values = true)]
    pub days: Option<i64>,
}

impl ShiftArgs {
    pub fn run(self, default_days: i64, format: &InstantFormat) -> Result<()> {
        let days = match self.days {
            Some(days) => days,
            None => default_days
                .checked_neg()
                .ok_or_eyre(format!("`shift_days` {default_days} is out of range"))?,
        };
        let delta = TimeDelta::try_days(days).ok_or_eyre(format!("{days} days is out of range"))?;

        let current = fs::modification_time(&self.path)?;
        info!(path = %self.path.display(), modified = %format.display(current), "current modification time");

        let shifted = fs::shift_modification_time(&self.path, delta)?;
        info!(path = %self.path.display(), modified = %format.display(shifted), days, "shifted modification time");
        Ok(())
    }
}
