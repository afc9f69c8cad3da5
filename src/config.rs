use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageBackend,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub max_body_size: usize,
    pub default_page_size: i64,
    pub max_page_size: i64,
    pub db_max_connections: u32,
    /// Empty means any origin.
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Postgres { database_url: String },
    Memory,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let storage = match env_or("INTAKE_STORAGE", "postgres").as_str() {
            "postgres" => StorageBackend::Postgres {
                database_url: env_required("DATABASE_URL")?,
            },
            "memory" => StorageBackend::Memory,
            other => return Err(format!("Invalid INTAKE_STORAGE: {other}")),
        };

        let host: IpAddr = env_or("INTAKE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_HOST: {e}"))?;

        let port: u16 = env_or("INTAKE_PORT", "8080")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_PORT: {e}"))?;

        let log_level = env_or("INTAKE_LOG_LEVEL", "info");

        let max_body_size: usize = env_or("INTAKE_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_MAX_BODY_SIZE: {e}"))?;

        let default_page_size: i64 = env_or("INTAKE_DEFAULT_PAGE_SIZE", "50")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_DEFAULT_PAGE_SIZE: {e}"))?;

        let max_page_size: i64 = env_or("INTAKE_MAX_PAGE_SIZE", "200")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_MAX_PAGE_SIZE: {e}"))?;

        if default_page_size < 1 || max_page_size < default_page_size {
            return Err(format!(
                "Invalid page sizes: default {default_page_size}, max {max_page_size}"
            ));
        }

        let db_max_connections: u32 = env_or("INTAKE_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid INTAKE_DB_MAX_CONNECTIONS: {e}"))?;

        let cors_origins: Vec<String> = env_or("INTAKE_CORS_ORIGINS", "")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Config {
            storage,
            host,
            port,
            log_level,
            max_body_size,
            default_page_size,
            max_page_size,
            db_max_connections,
            cors_origins,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
