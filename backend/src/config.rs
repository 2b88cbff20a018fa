use std::path::PathBuf;

use url::Url;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";

/// Runtime settings for the page host, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    /// Origin of the service that owns `/api/*` and the hosted auth pages.
    /// Unset means those paths are not served here.
    pub upstream_url: Option<String>,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup so tests don't have to touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };
        let static_dir = match lookup("STATIC_DIR") {
            Some(dir) if dir.trim().is_empty() => return Err(ConfigError::EmptyStaticDir),
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(DEFAULT_STATIC_DIR),
        };
        let upstream_url = match lookup("UPSTREAM_URL") {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(parse_upstream(&raw)?),
            None => None,
        };
        Ok(Self {
            port,
            static_dir,
            upstream_url,
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

fn parse_upstream(raw: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidUpstream(raw.to_string());
    let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = HostConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("../frontend/dist"));
        assert_eq!(config.upstream_url, None);
        assert_eq!(config.index_file(), PathBuf::from("../frontend/dist/index.html"));
    }

    #[test]
    fn reads_port_and_dir() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("PORT", "3100"),
            ("STATIC_DIR", "/srv/lockin"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3100);
        assert_eq!(config.static_dir, PathBuf::from("/srv/lockin"));
    }

    #[test]
    fn upstream_is_normalized_without_trailing_slash() {
        let config =
            HostConfig::from_lookup(lookup_from(&[("UPSTREAM_URL", "http://localhost:3001/")])).unwrap();
        assert_eq!(config.upstream_url.as_deref(), Some("http://localhost:3001"));

        let config = HostConfig::from_lookup(lookup_from(&[("UPSTREAM_URL", " ")])).unwrap();
        assert_eq!(config.upstream_url, None);
    }

    #[test]
    fn rejects_non_http_upstream() {
        for raw in ["localhost:3001", "ftp://files.example", "not a url"] {
            let err = HostConfig::from_lookup(lookup_from(&[("UPSTREAM_URL", raw)])).unwrap_err();
            assert_eq!(err, ConfigError::InvalidUpstream(raw.to_string()));
        }
    }

    #[test]
    fn rejects_bad_port() {
        let err = HostConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("http".to_string()));
        let err = HostConfig::from_lookup(lookup_from(&[("PORT", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("0".to_string()));
    }

    #[test]
    fn rejects_blank_static_dir() {
        let err = HostConfig::from_lookup(lookup_from(&[("STATIC_DIR", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::EmptyStaticDir);
    }
}
