use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_STORE_URL: &str = "file://data/petstore";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8001, worker_threads: Some(4) }
    }
}

/// Persistence target. The URL scheme picks the backend:
/// `file://<dir>` for JSON files, `postgres://` / `postgresql://` for SeaORM.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: default_store_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            sqlx_logging: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    File,
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any origin.
    #[serde(default = "default_origins")]
    pub origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self { Self { origins: default_origins() } }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WebConfig {
    /// Built frontend served for non-API paths when present.
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_store_url() -> String { DEFAULT_STORE_URL.to_string() }
fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_origins() -> Vec<String> { vec!["*".to_string()] }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// File config when present (defaults otherwise), then environment overrides, then validation.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_not_found(&e) => AppConfig::default(),
            Err(e) => return Err(e),
        };
        cfg.apply_overrides(|key| std::env::var(key).ok())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Apply `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS`, `STORE_URL`
    /// (or `DATABASE_URL`), `CORS_ORIGINS` and `STATIC_DIR` from `lookup`.
    /// A numeric variable that does not parse is an error.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow!("SERVER_PORT={port:?} is not a valid port: {e}"))?;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS") {
            let threads = w
                .trim()
                .parse::<usize>()
                .map_err(|e| anyhow!("TOKIO_WORKER_THREADS={w:?} is not a thread count: {e}"))?;
            self.server.worker_threads = Some(threads);
        }
        if let Some(url) = lookup("STORE_URL").or_else(|| lookup("DATABASE_URL")) {
            self.store.url = url;
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            self.cors.origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.web.static_dir = Some(dir).filter(|d| !d.trim().is_empty());
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.store.validate()?;
        self.cors.validate()?;
        Ok(())
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl StoreConfig {
    pub fn kind(&self) -> Result<StoreKind> {
        let lower = self.url.trim().to_lowercase();
        if lower.starts_with("file://") {
            Ok(StoreKind::File)
        } else if lower.starts_with("postgresql://") || lower.starts_with("postgres://") {
            Ok(StoreKind::Postgres)
        } else {
            Err(anyhow!("store.url must start with file://, postgres:// or postgresql://"))
        }
    }

    /// Directory of a `file://` store.
    pub fn file_path(&self) -> Option<&str> {
        let url = self.url.trim();
        url.get(..7)
            .filter(|scheme| scheme.eq_ignore_ascii_case("file://"))
            .map(|_| &url[7..])
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("store.url is empty; set it in config.toml or STORE_URL"));
        }
        match self.kind()? {
            StoreKind::File => {
                if self.file_path().map(str::is_empty).unwrap_or(true) {
                    return Err(anyhow!("store.url file:// needs a directory"));
                }
            }
            StoreKind::Postgres => {
                if self.min_connections == 0 {
                    return Err(anyhow!("store.min_connections must be >= 1"));
                }
                if self.max_connections < self.min_connections {
                    return Err(anyhow!("store.max_connections must be >= min_connections"));
                }
                if self.connect_timeout_secs == 0 {
                    return Err(anyhow!("store.connect_timeout_secs must be positive"));
                }
            }
        }
        Ok(())
    }
}

impl CorsConfig {
    pub fn allows_any(&self) -> bool {
        self.origins.iter().any(|o| o == "*")
    }

    fn validate(&self) -> Result<()> {
        if self.origins.is_empty() {
            return Err(anyhow!("cors.origins must list at least one origin (or *)"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let mut cfg = AppConfig::default();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.store.kind().unwrap(), StoreKind::File);
        assert_eq!(cfg.store.file_path(), Some("data/petstore"));
        assert!(cfg.cors.allows_any());
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let mut cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [store]
            url = "file://var/lib/petstore"
            "#,
        )
        .unwrap();
        cfg.apply_overrides(lookup(&[
            ("SERVER_PORT", "8080"),
            ("STORE_URL", "postgres://u:p@localhost/petstore"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ]))
        .unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.store.kind().unwrap(), StoreKind::Postgres);
        assert_eq!(cfg.cors.origins, vec!["http://a.test", "http://b.test"]);
        assert!(!cfg.cors.allows_any());
    }

    #[test]
    fn database_url_is_a_fallback_for_store_url() {
        let mut cfg = AppConfig::default();
        cfg.apply_overrides(lookup(&[("DATABASE_URL", "postgresql://localhost/x")])).unwrap();
        assert_eq!(cfg.store.url, "postgresql://localhost/x");

        let mut cfg = AppConfig::default();
        cfg.apply_overrides(lookup(&[
            ("DATABASE_URL", "postgresql://localhost/x"),
            ("STORE_URL", "file://other"),
        ]))
        .unwrap();
        assert_eq!(cfg.store.url, "file://other");
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.store.url = "mongodb://localhost:27017".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn empty_origin_list_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.apply_overrides(lookup(&[("CORS_ORIGINS", " , ")])).unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn malformed_numeric_overrides_are_errors() {
        let mut cfg = AppConfig::default();
        let err = cfg.apply_overrides(lookup(&[("SERVER_PORT", "80o1")])).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));
        assert_eq!(cfg.server.port, 8001);

        let mut cfg = AppConfig::default();
        assert!(cfg.apply_overrides(lookup(&[("SERVER_PORT", "70000")])).is_err());

        let mut cfg = AppConfig::default();
        let err = cfg.apply_overrides(lookup(&[("TOKIO_WORKER_THREADS", "four")])).unwrap_err();
        assert!(err.to_string().contains("TOKIO_WORKER_THREADS"));

        let mut cfg = AppConfig::default();
        cfg.apply_overrides(lookup(&[("SERVER_PORT", " 9001 "), ("TOKIO_WORKER_THREADS", "2")])).unwrap();
        assert_eq!(cfg.server.port, 9001);
        assert_eq!(cfg.server.worker_threads, Some(2));
    }

    #[test]
    fn zero_worker_threads_falls_back() {
        let mut cfg = AppConfig::default();
        cfg.server.worker_threads = Some(0);
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.worker_threads, Some(4));
    }
}
