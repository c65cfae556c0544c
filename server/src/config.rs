use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};

const CONFIG_FILE: &str = "config.toml";

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub http: Http,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Http {
    pub listen: SocketAddr,
}

impl Default for Http {
    fn default() -> Self {
        Http {
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 3000)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("error in config file {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

fn try_config(path: &Path) -> Result<Option<Config>, ConfigError> {
    let config_toml = match std::fs::read_to_string(path) {
        Ok(contents) => {
            log::info!("Using config at {}", path.display());
            contents
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Looking for config at {}: {e:?}", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::Read { path: path.to_owned(), source });
        }
    };

    toml::from_str(&config_toml)
        .map(Some)
        .map_err(|source| ConfigError::Parse { path: path.to_owned(), source })
}

fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if let Some(config) = try_config(path)? {
        return Ok(config);
    }

    log::info!("No config at {}, using defaults", path.display());
    Ok(Config::default())
}

/// Reads `config.toml` from the working directory, falling back to
/// defaults when there is none.
pub fn load() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config.http.listen, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn reads_listen_address() {
        let file = config_file("[http]\nlisten = \"127.0.0.1:8080\"\n");
        let config = load_from(file.path()).unwrap();

        assert_eq!(config.http.listen, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = config_file("");
        assert_eq!(load_from(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = config_file("[http]\nlisten = \"not an address\"\n");
        let err = load_from(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
    }
}
