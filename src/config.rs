use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // Database
    pub database_url: String,
    pub database_max_connections: u32,

    // CORS
    pub cors_allow_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        // Database
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://taskboard.db".to_string());
        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            Err(_) => 5,
        };

        // CORS
        let cors_allow_origins = parse_origins(
            &env::var("CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".to_string()),
        );

        Ok(Settings {
            env,
            server_addr,
            database_url,
            database_max_connections,
            cors_allow_origins,
        })
    }

    /// Settings backed by a private in-memory database
    pub fn in_memory() -> Self {
        Settings {
            env: Environment::Dev,
            server_addr: "127.0.0.1:0".to_string(),
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            cors_allow_origins: vec!["http://localhost:3000".to_string()],
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
