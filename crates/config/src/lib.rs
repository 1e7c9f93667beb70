//! # filestamp-config
//!
//! filestamp configuration.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use figment::{
    Error, Figment, Metadata, Profile, Provider,
    providers::{Env, Serialized},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};

pub use filestamp_common::time::DEFAULT_DATE_FORMAT;

pub mod error;
pub use error::ExtractConfigError;

mod providers;
use providers::ProfileTable;

/// filestamp configuration
///
/// Values are layered, later sources win:
///
/// 1. [`Config::default`]
/// 2. `[profile.default]` and `[profile.<FILESTAMP_PROFILE>]` of `filestamp.toml` in the working
///    directory, or of the file named by `FILESTAMP_CONFIG`
/// 3. `FILESTAMP_*` environment variables, e.g. `FILESTAMP_UTC=true`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The selected profile. **(default)**: _default_ `default`
    ///
    /// **Note:** This field is never serialized nor deserialized. When a `Config` is extracted,
    /// this field is set to the extracting Figment's selected `Profile`.
    #[serde(skip)]
    pub profile: Profile,
    /// strftime layout used when displaying modification times.
    pub date_format: String,
    /// Display modification times in UTC instead of local time.
    pub utc: bool,
    /// Number of days `filestamp shift` moves a file back by when `--days` is not given.
    pub shift_days: i64,
}

impl Config {
    /// The default profile: "default"
    pub const DEFAULT_PROFILE: Profile = Profile::const_new("default");

    /// File name of config toml file
    pub const FILE_NAME: &'static str = "filestamp.toml";

    /// Env vars read by other parts of the tool that must not end up as config keys.
    const IGNORED_ENV: [&'static str; 3] = ["PROFILE", "CONFIG", "DEBUG"];

    /// Returns the current `Config`.
    ///
    /// See [`figment`](Self::figment) for more details.
    pub fn load() -> Result<Self, ExtractConfigError> {
        Self::try_from(Self::figment())
    }

    /// Attempts to extract a `Config` from `provider`, returning the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use figment::providers::{Format, Toml};
    /// use filestamp_config::Config;
    ///
    /// // Use filestamp's default `Figment`, but allow values from `other.toml`
    /// // to supersede its values.
    /// let figment = Config::figment().merge(Toml::file("other.toml").nested());
    ///
    /// let config = Config::try_from(figment);
    /// ```
    pub fn try_from<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        trace!("load config with provider: {:?}", provider.metadata());
        let figment = Figment::from(provider);
        let mut config = figment.extract::<Self>().map_err(ExtractConfigError::new)?;
        config.profile = figment.profile().clone();
        Ok(config)
    }

    /// Returns the default figment: defaults, then `filestamp.toml`, then `FILESTAMP_*` env vars.
    pub fn figment() -> Figment {
        Self::default().into()
    }

    /// Returns the selected profile.
    ///
    /// If the `FILESTAMP_PROFILE` env variable is not set, this returns the `DEFAULT_PROFILE`.
    pub fn selected_profile() -> Profile {
        Profile::from_env_or("FILESTAMP_PROFILE", Self::DEFAULT_PROFILE)
    }

    fn to_figment(&self) -> Figment {
        let profile = Self::selected_profile();
        let mut figment =
            Figment::from(self).merge(ProfileTable::new(Self::DEFAULT_PROFILE, Self::FILE_NAME));
        if profile != Self::DEFAULT_PROFILE {
            figment = figment.merge(ProfileTable::new(profile.clone(), Self::FILE_NAME));
        }

        figment
            .merge(Env::prefixed("FILESTAMP_").ignore(&Self::IGNORED_ENV).global())
            .select(profile)
    }
}

impl Provider for Config {
    fn metadata(&self) -> Metadata {
        Metadata::named("filestamp config")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        Serialized::defaults(self).data()
    }
}

impl From<Config> for Figment {
    fn from(c: Config) -> Self {
        c.to_figment()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Self::DEFAULT_PROFILE,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            utc: false,
            shift_days: 5,
        }
    }
}
