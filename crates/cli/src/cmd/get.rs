use crate::opts::InstantFormat;
use clap::Parser;
use eyre::Result;
use filestamp_common::{fs, time};
use std::{path::PathBuf, time::SystemTime};

/// CLI arguments for `filestamp get`.
#[derive(Clone, Debug, Parser)]
pub struct GetArgs {
    /// The file to inspect.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub path: PathBuf,

    /// Print milliseconds since the unix epoch instead of a formatted date.
    #[arg(long)]
    pub millis: bool,
}

impl GetArgs {
    pub fn run(self, format: &InstantFormat) -> Result<()> {
        let modified = fs::modification_time(&self.path)?;
        println!("{}", self.render(modified, format));
        Ok(())
    }

    fn render(&self, modified: SystemTime, format: &InstantFormat) -> String {
        if self.millis {
            time::unix_millis(modified).to_string()
        } else {
            format.display(modified).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn renders_millis() {
        let args = GetArgs { path: "a".into(), millis: true };
        let instant = UNIX_EPOCH + Duration::from_millis(1_704_164_645_123);
        assert_eq!(args.render(instant, &InstantFormat::default()), "1704164645123");

        let before_epoch = UNIX_EPOCH - Duration::from_millis(1_500);
        assert_eq!(args.render(before_epoch, &InstantFormat::default()), "-1500");
    }

    #[test]
    fn renders_instants_beyond_chrono() {
        let far = UNIX_EPOCH + Duration::from_secs(9_000_000_000_000);
        let millis = GetArgs { path: "a".into(), millis: true };
        assert_eq!(millis.render(far, &InstantFormat::default()), "9000000000000000");

        let formatted = GetArgs { path: "a".into(), millis: false };
        assert_eq!(formatted.render(far, &InstantFormat::default()), "@9000000000000");
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = GetArgs { path: dir.path().join("missing"), millis: false };
        let err = args.run(&InstantFormat::default()).unwrap_err();
        assert!(err.to_string().contains("missing"), "{err}");
    }
}
