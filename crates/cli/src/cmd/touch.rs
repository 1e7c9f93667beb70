use crate::opts::InstantFormat;
use clap::Parser;
use eyre::Result;
use filestamp_common::fs;
use std::path::PathBuf;

/// CLI arguments for `filestamp touch`.
#[derive(Clone, Debug, Parser)]
pub struct TouchArgs {
    /// The file to create or update.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub path: PathBuf,
}

impl TouchArgs {
    pub fn run(self, format: &InstantFormat) -> Result<()> {
        let existed = self.path.exists();
        fs::touch(&self.path)?;

        let modified = fs::modification_time(&self.path)?;
        info!(path = %self.path.display(), modified = %format.display(modified), created = !existed, "touched");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_and_keeps_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.txt");

        TouchArgs { path: path.clone() }.run(&InstantFormat::default()).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);

        std::fs::write(&path, "keep").unwrap();
        TouchArgs { path: path.clone() }.run(&InstantFormat::default()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep");
    }
}
