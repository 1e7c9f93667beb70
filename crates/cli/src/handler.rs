use eyre::EyreHandler;
use filestamp_common::errors::{dedup_chain, find_fs_error};
use itertools::Itertools;
use std::{error::Error, fmt};

/// Env var that switches error reports to the verbose `color-eyre` format.
pub const DEBUG_ENV: &str = "FILESTAMP_DEBUG";

/// Renders `filestamp` errors for the terminal.
///
/// The chain is printed on one line without repeated messages. When a file operation failed, the
/// report also names the file and how it failed.
pub struct Handler {
    verbose: Option<Box<dyn EyreHandler>>,
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", dedup_chain(error).into_iter().format("; "))
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(verbose) = &self.verbose {
            return verbose.debug(error, f);
        }
        if f.alternate() {
            return fmt::Debug::fmt(error, f);
        }

        self.display(error, f)?;
        if let Some(fs_error) = find_fs_error(error) {
            write!(f, "\n\n  file: {}\n  kind: {}", fs_error.as_ref().display(), fs_error.kind())?;
        }
        Ok(())
    }

    fn track_caller(&mut self, location: &'static std::panic::Location<'static>) {
        if let Some(verbose) = &mut self.verbose {
            verbose.track_caller(location);
        }
    }
}

/// Installs the global [`eyre`] hook and the `color-eyre` panic hook.
///
/// Errors use the terse [`Handler`] report unless [`DEBUG_ENV`] is set.
pub fn install() {
    let (panic_hook, verbose_hook) = color_eyre::config::HookBuilder::default()
        .panic_section("This is a bug in filestamp. Please report it.")
        .into_hooks();
    panic_hook.install();

    let verbose_hook = verbose_hook.into_eyre_hook();
    let verbose = std::env::var_os(DEBUG_ENV).is_some();
    if let Err(err) = eyre::set_hook(Box::new(move |error| {
        Box::new(Handler { verbose: verbose.then(|| verbose_hook(error)) })
    })) {
        debug!(%err, "eyre hook already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filestamp_common::errors::FsPathError;
    use std::io;

    struct Report(eyre::Report);

    impl fmt::Display for Report {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Handler { verbose: None }.display(&*self.0, f)
        }
    }

    impl fmt::Debug for Report {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Handler { verbose: None }.debug(&*self.0, f)
        }
    }

    fn denied() -> eyre::Report {
        let err = FsPathError::set_modified(
            io::Error::new(io::ErrorKind::PermissionDenied, "Operation not permitted"),
            "/etc/hosts",
        );
        eyre::Report::from(err).wrap_err("set failed")
    }

    #[test]
    fn displays_deduplicated_chain() {
        assert_eq!(
            Report(denied()).to_string(),
            "set failed; failed to set modification time of \"/etc/hosts\": Operation not permitted"
        );
    }

    #[test]
    fn debug_names_file_and_kind() {
        assert_eq!(
            format!("{:?}", Report(denied())),
            "set failed; failed to set modification time of \"/etc/hosts\": Operation not \
             permitted\n\n  file: /etc/hosts\n  kind: permission denied"
        );
    }

    #[test]
    fn debug_without_file_is_one_line() {
        let report = eyre::eyre!("inner").wrap_err("outer");
        assert_eq!(format!("{:?}", Report(report)), "outer; inner");
    }
}
