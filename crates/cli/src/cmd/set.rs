use crate::opts::InstantFormat;
use clap::{ArgGroup, Parser};
use eyre::{OptionExt, Result};
use filestamp_common::{fs, time};
use std::{path::PathBuf, time::SystemTime};

/// CLI arguments for `filestamp set`.
#[derive(Clone, Debug, Parser)]
#[command(group(ArgGroup::new("when").required(true).args(["at", "days_ago"])))]
pub struct SetArgs {
    /// The file to update. It must already exist.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub path: PathBuf,

    /// The new modification time: RFC 3339, `@<unix seconds>` or unix milliseconds.
    #[arg(long, value_name = "INSTANT", value_parser = time::parse_instant)]
    pub at: Option<SystemTime>,

    /// Set the modification time to this many days before now.
    #[arg(long, value_name = "DAYS", allow_hyphen_values = true)]
    pub days_ago: Option<i64>,
}

impl SetArgs {
    pub fn run(self, format: &InstantFormat) -> Result<()> {
        let Self { path, at, days_ago } = self;
        let target = match (at, days_ago) {
            (Some(at), _) => at,
            (None, Some(days)) => time::days_ago(days)
                .ok_or_eyre(format!("{days} days ago is out of range"))?,
            (None, None) => eyre::bail!("one of `--at` or `--days-ago` is required"),
        };

        let current = fs::modification_time(&path)?;
        info!(path = %path.display(), modified = %format.display(current), "current modification time");

        fs::set_modification_time(&path, target)?;

        let updated = fs::modification_time(&path)?;
        info!(path = %path.display(), modified = %format.display(updated), "updated modification time");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn sets_explicit_instant() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "abc").unwrap();
        let at = UNIX_EPOCH + Duration::from_secs(1_704_164_645);

        SetArgs { path: path.clone(), at: Some(at), days_ago: None }
            .run(&InstantFormat::default())
            .unwrap();

        assert_eq!(fs::modification_time(&path).unwrap(), at);
        assert_eq!(std::fs::read(&path).unwrap(), b"abc");
    }

    #[test]
    fn sets_days_ago() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "").unwrap();

        SetArgs { path: path.clone(), at: None, days_ago: Some(5) }
            .run(&InstantFormat::default())
            .unwrap();

        let modified = fs::modification_time(&path).unwrap();
        let expected = time::days_ago(5).unwrap();
        let diff = expected.duration_since(modified).unwrap_or_else(|err| err.duration());
        assert!(diff < Duration::from_secs(10), "{diff:?}");
    }

    #[test]
    fn does_not_create_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = SetArgs { path: path.clone(), at: Some(SystemTime::now()), days_ago: None }
            .run(&InstantFormat::default())
            .unwrap_err();

        assert!(err.downcast_ref::<filestamp_common::errors::FsPathError>().unwrap().is_not_found());
        assert!(!path.exists());
    }
}
