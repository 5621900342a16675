//! Process configuration, layered with figment:
//! serde defaults -> `boltd.toml` -> `BOLTD_*` env vars -> bare `PORT` /
//! `NODE_ENV` for compatibility with the usual container contract.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listen port.
    pub port: u16,
    pub host: String,
    /// Directory holding the SQLite file, created on demand.
    pub data_dir: PathBuf,
    pub db_file: String,
    /// Static asset roots, layered first-hit-wins. At most two are used.
    pub static_roots: Vec<PathBuf>,
    /// Candidate locations for the SPA `index.html`, probed once at startup
    /// in order.
    pub index_candidates: Vec<PathBuf>,
    pub loglevel: String,
    /// Passed through to an external SSR renderer when one is wired in.
    pub node_env: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            data_dir: PathBuf::from("data"),
            db_file: "bolt.db".to_string(),
            static_roots: vec![PathBuf::from("app")],
            index_candidates: vec![
                PathBuf::from("app/index.html"),
                PathBuf::from("dist/index.html"),
                PathBuf::from("index.html"),
            ],
            loglevel: "info".to_string(),
            node_env: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file("boltd.toml"))
            .merge(Env::prefixed("BOLTD_").split("__"))
            .merge(Env::raw().only(&["port", "node_env"]))
            .extract()
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| match Config::load() {
    Ok(cfg) => cfg,
    Err(e) => {
        tracing::warn!(error = %e, "invalid configuration, falling back to defaults");
        Config::default()
    }
});
