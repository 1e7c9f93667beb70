//! Provider for the profile tables of the config file.

use figment::{
    Error, Metadata, Profile, Provider,
    error::Kind,
    providers::{Env, Format, Toml},
    value::{Dict, Map, Value},
};
use std::path::PathBuf;

/// Env var naming a config file to read instead of `filestamp.toml`.
pub(crate) const CONFIG_ENV: &str = "FILESTAMP_CONFIG";

/// Reads the `[profile.<name>]` table of the config file as the data of profile `<name>`.
///
/// A missing `filestamp.toml` yields no data, but a missing file named by [`CONFIG_ENV`] is an
/// error.
pub(crate) struct ProfileTable {
    profile: Profile,
    explicit: Option<PathBuf>,
    path: PathBuf,
}

impl ProfileTable {
    pub(crate) fn new(profile: Profile, default_file: &str) -> Self {
        let explicit = Env::var(CONFIG_ENV).map(PathBuf::from);
        let path = explicit.clone().unwrap_or_else(|| default_file.into());
        Self { profile, explicit, path }
    }

    fn toml(&self) -> figment::providers::Data<Toml> {
        Toml::file(&self.path).nested()
    }
}

impl Provider for ProfileTable {
    fn metadata(&self) -> Metadata {
        self.toml().metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        use serde::de::Error as _;

        if let Some(path) = &self.explicit
            && !path.exists()
        {
            return Err(Error::custom(format!(
                "config file `{}` set in `{CONFIG_ENV}` does not exist",
                path.display()
            )));
        }

        let Some(profiles) = self.toml().data()?.remove(&Profile::new("profile")) else {
            return Ok(Map::new());
        };
        let Some((name, table)) = profiles.into_iter().find(|(name, _)| Profile::new(name) == self.profile)
        else {
            return Ok(Map::new());
        };
        match table {
            Value::Dict(_, dict) => Ok(self.profile.collect(dict)),
            other => {
                let mut err = Error::from(Kind::InvalidType(other.to_actual(), "table".into()));
                err.path = vec!["profile".into(), name];
                err.metadata = Some(self.metadata());
                err.profile = Some(self.profile.clone());
                Err(err)
            }
        }
    }
}
