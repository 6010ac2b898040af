use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub max_body_size: usize,
    pub update_mode: UpdateMode,
    pub db_max_connections: u32,
    pub log_level: String,
}

/// How an update against an id with no matching row is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Report success and echo the record back.
    #[default]
    Permissive,
    /// Report not found.
    Strict,
}

impl UpdateMode {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(UpdateMode::Permissive),
            "strict" => Ok(UpdateMode::Strict),
            other => Err(format!(
                "Invalid RFPD_UPDATE_MODE '{other}': expected 'permissive' or 'strict'"
            )),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_or("DATABASE_URL", "sqlite://./sqlite.db");

        let host: IpAddr = env_or("RFPD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid RFPD_HOST: {e}"))?;

        let port: u16 = env_or("RFPD_PORT", "8080")
            .parse()
            .map_err(|e| format!("Invalid RFPD_PORT: {e}"))?;

        let allowed_origins =
            parse_allowed_origins(&env_or("RFPD_ALLOWED_ORIGINS", "http://localhost:3000"))?;

        let max_body_size: usize = env_or("RFPD_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid RFPD_MAX_BODY_SIZE: {e}"))?;

        let update_mode = UpdateMode::parse(&env_or("RFPD_UPDATE_MODE", "permissive"))?;

        let db_max_connections: u32 = env_or("RFPD_DB_MAX_CONNECTIONS", "5")
            .parse()
            .map_err(|e| format!("Invalid RFPD_DB_MAX_CONNECTIONS: {e}"))?;
        if db_max_connections == 0 {
            return Err("Invalid RFPD_DB_MAX_CONNECTIONS: must be at least 1".to_string());
        }

        let log_level = env_or("RFPD_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            allowed_origins,
            max_body_size,
            update_mode,
            db_max_connections,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: "sqlite://./sqlite.db".to_string(),
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            max_body_size: 1_048_576,
            update_mode: UpdateMode::Permissive,
            db_max_connections: 5,
            log_level: "info".to_string(),
        }
    }
}

/// Split a comma list of origins. A wildcard cannot be combined with
/// credentialed requests, so `*` is refused.
pub fn parse_allowed_origins(raw: &str) -> Result<Vec<String>, String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s == "*" {
                Err("Invalid RFPD_ALLOWED_ORIGINS: '*' cannot be used with credentials".to_string())
            } else {
                Ok(s.to_string())
            }
        })
        .collect()
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
