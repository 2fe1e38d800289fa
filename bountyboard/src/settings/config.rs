use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[allow(unused)]
#[readonly::make]
pub struct AccessSettings {
    pub role_groups_file: String,
}

impl Default for AccessSettings {
    fn default() -> Self {
        AccessSettings {
            role_groups_file: "config/access/roles.yaml".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[allow(unused)]
#[readonly::make]
pub struct Settings {
    pub debug: bool,
    #[serde(default)]
    pub access: AccessSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            debug: false,
            access: AccessSettings::default(),
        }
    }
}

impl Settings {
    pub fn get_environment() -> Environment {
        Environment::default()
            .prefix("BOUNTYBOARD")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("BOUNTYBOARD_RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("debug", false)?
            .set_default("access.role_groups_file", "config/access/roles.yaml")?
            // Start off by merging in the "default" configuration file
            .add_source(File::with_name("config/default").required(false))
            // Add the per-run-mode and local overrides.
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Self::get_environment());

        let s = builder.build()?;
        s.try_deserialize()
    }
}
