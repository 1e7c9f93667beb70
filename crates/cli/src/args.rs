use crate::{
    cmd::{get::GetArgs, set::SetArgs, shift::ShiftArgs, touch::TouchArgs},
    opts::{DisplayOpts, ShellOptions},
};
use clap::{Parser, Subcommand};
use eyre::Result;
use filestamp_config::Config;

/// Read, set and touch file modification times.
#[derive(Debug, Parser)]
#[command(name = "filestamp", version, next_display_order = None)]
pub struct Filestamp {
    #[command(flatten)]
    pub shell: ShellOptions,

    #[command(flatten)]
    pub display: DisplayOpts,

    #[command(subcommand)]
    pub cmd: FilestampSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum FilestampSubcommand {
    /// Print the modification time of a file.
    #[command(visible_alias = "g")]
    Get(GetArgs),

    /// Set the modification time of an existing file.
    #[command(visible_alias = "s")]
    Set(SetArgs),

    /// Move the modification time of an existing file by a number of days.
    Shift(ShiftArgs),

    /// Create an empty file if missing, otherwise update its modification time to now.
    #[command(visible_alias = "t")]
    Touch(TouchArgs),
}

impl Filestamp {
    /// Loads the config and runs the selected subcommand.
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;
        debug!(?config, "loaded config");
        let format = self.display.instant_format(&config)?;

        match self.cmd {
            FilestampSubcommand::Get(cmd) => cmd.run(&format),
            FilestampSubcommand::Set(cmd) => cmd.run(&format),
            FilestampSubcommand::Shift(cmd) => cmd.run(config.shift_days, &format),
            FilestampSubcommand::Touch(cmd) => cmd.run(&format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Filestamp::command().debug_assert();
    }

    #[test]
    fn parses_set_days_ago() {
        let args = Filestamp::try_parse_from(["filestamp", "set", "a.txt", "--days-ago", "5"]).unwrap();
        let FilestampSubcommand::Set(set) = args.cmd else { panic!("expected set") };
        assert_eq!(set.days_ago, Some(5));
        assert!(set.at.is_none());
    }

    #[test]
    fn set_requires_exactly_one_target() {
        Filestamp::try_parse_from(["filestamp", "set", "a.txt"]).unwrap_err();
        Filestamp::try_parse_from([
            "filestamp",
            "set",
            "a.txt",
            "--at",
            "@0",
            "--days-ago",
            "1",
        ])
        .unwrap_err();
    }

    #[test]
    fn rejects_bad_instant() {
        Filestamp::try_parse_from(["filestamp", "set", "a.txt", "--at", "tomorrow"]).unwrap_err();
    }

    #[test]
    fn parses_negative_shift() {
        let args = Filestamp::try_parse_from(["filestamp", "shift", "a.txt", "--days", "-3"]).unwrap();
        let FilestampSubcommand::Shift(shift) = args.cmd else { panic!("expected shift") };
        assert_eq!(shift.days, Some(-3));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Filestamp::try_parse_from(["filestamp", "get", "a.txt", "--utc", "-q", "--millis"])
                .unwrap();
        assert!(args.display.utc);
        assert!(args.shell.quiet);
        let FilestampSubcommand::Get(get) = args.cmd else { panic!("expected get") };
        assert!(get.millis);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        Filestamp::try_parse_from(["filestamp", "-v", "-q", "touch", "a.txt"]).unwrap_err();
    }

    #[test]
    fn rejects_bad_format() {
        Filestamp::try_parse_from(["filestamp", "--format", "%Q", "get", "a.txt"]).unwrap_err();
    }
}
