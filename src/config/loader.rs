//! Provider configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{Configuration, Configurations};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Provider names are used as the qualifier suffix and cannot contain `@`.
    #[error("Invalid provider name {0:?}")]
    InvalidProviderName(String),

    #[error("Provider {0:?} is defined more than once")]
    DuplicateProvider(String),
}

/// Load a single provider's dynamic configuration from a TOML file.
pub fn load_provider_config(path: &Path) -> Result<Configuration, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every `(provider, path)` pair into one provider map.
pub fn load_provider_configs<I, S, P>(providers: I) -> Result<Configurations, ConfigError>
where
    I: IntoIterator<Item = (S, P)>,
    S: Into<String>,
    P: AsRef<Path>,
{
    let mut configurations = Configurations::new();

    for (provider, path) in providers {
        let provider: String = provider.into();
        validate_provider_name(&provider)?;
        if configurations.contains_key(&provider) {
            return Err(ConfigError::DuplicateProvider(provider));
        }

        let configuration = load_provider_config(path.as_ref())?;
        tracing::debug!(
            provider = %provider,
            path = ?path.as_ref(),
            "Loaded provider configuration"
        );
        configurations.insert(provider, configuration);
    }

    Ok(configurations)
}

/// Load each `*.toml` file of `dir` as one provider named after the file stem.
pub fn load_directory(dir: &Path) -> Result<Configurations, ConfigError> {
    let io_err = |source: std::io::Error| ConfigError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut providers = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        providers.push((stem.to_string(), path.clone()));
    }

    load_provider_configs(providers)
}

fn validate_provider_name(provider: &str) -> Result<(), ConfigError> {
    if provider.is_empty() || provider.contains('@') {
        return Err(ConfigError::InvalidProviderName(provider.to_string()));
    }
    Ok(())
}
