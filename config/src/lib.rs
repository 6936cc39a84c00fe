//! Configuration for orgkit.
//!
//! Everything is optional. The file lives at `~/.orgkit/config.toml`:
//!
//! ```toml
//! [github]
//! base_url = "https://github.example.com/api/v3"
//! user_agent = "my-tool/1.0"
//! timeout_secs = 20
//!
//! [tasks]
//! count = 5
//! max_delay = 10
//! ```
//!
//! `ORGKIT_GITHUB_BASE_URL` overrides `github.base_url`.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use orgkit_utils::HttpSettings;
use serde::Deserialize;
use thiserror::Error;

pub const BASE_URL_ENV: &str = "ORGKIT_GITHUB_BASE_URL";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrgkitConfig {
    pub github: Option<GithubConfig>,
    pub tasks: Option<TasksConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GithubConfig {
    /// API root; `/orgs/{name}` is appended to it.
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    /// Whole-request timeout. Unset means no limit beyond the connect timeout.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TasksConfig {
    pub count: Option<u32>,
    /// Seconds.
    pub max_delay: Option<u32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl OrgkitConfig {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Base URL from the environment, then the file. `None` means use the default.
    #[must_use]
    pub fn base_url(&self) -> Option<String> {
        base_url_from_env().or_else(|| {
            self.github
                .as_ref()
                .and_then(|github| github.base_url.clone())
        })
    }

    #[must_use]
    pub fn http_settings(&self) -> HttpSettings {
        let mut settings = HttpSettings::default();
        if let Some(github) = &self.github {
            if let Some(agent) = &github.user_agent {
                settings.user_agent.clone_from(agent);
            }
            settings.timeout = github.timeout_secs.map(Duration::from_secs);
        }
        settings
    }

    #[must_use]
    pub fn task_count(&self) -> Option<u32> {
        self.tasks.as_ref().and_then(|tasks| tasks.count)
    }

    #[must_use]
    pub fn max_delay(&self) -> Option<u32> {
        self.tasks.as_ref().and_then(|tasks| tasks.max_delay)
    }
}

fn base_url_from_env() -> Option<String> {
    env::var(BASE_URL_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".orgkit").join("config.toml"))
}
