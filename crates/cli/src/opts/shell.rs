use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

/// Global shell options.
#[derive(Clone, Copy, Debug, Default, Parser)]
pub struct ShellOptions {
    /// Use verbose output.
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Do not print log messages.
    #[arg(long, short, global = true, alias = "silent", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl ShellOptions {
    /// Returns the log level used when `RUST_LOG` is not set.
    pub fn level(self) -> LevelFilter {
        match (self.verbose, self.quiet) {
            (true, _) => LevelFilter::DEBUG,
            (false, true) => LevelFilter::ERROR,
            (false, false) => LevelFilter::INFO,
        }
    }
}
