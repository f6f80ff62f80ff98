use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::git::Source;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) repository: String,
    pub(crate) scratch: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let tilde = home::home_dir().unwrap();
        Self {
            repository: String::from("boo-boom/wechat-file-template"),
            scratch: tilde.join(".mpgen").join("scratch"),
        }
    }
}

impl Config {
    pub(crate) fn init() -> Result<Self> {
        let path = home::home_dir()
            .expect("failed to locate user home directory")
            .join(".mpgen.toml");

        let config = if !path.exists() {
            let config = Self::default();
            let contents = toml::to_string_pretty(&config)?;
            fs::write(path, contents)?;
            config
        } else {
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents)?
        };

        Ok(config)
    }

    pub(crate) fn source(&self) -> Result<Source> {
        Source::from_str(&self.repository)
    }
}
