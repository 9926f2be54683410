use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{bail, Context};
use rand::{rngs::OsRng, RngCore};

use crate::auth::decode_secret_key;

const DEFAULT_JWT_TTL_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" | "test" => Ok(Environment::Development),
            other => bail!("Unknown EI_ENV value '{other}'"),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub environment: Environment,
    pub jwt_secret: Vec<u8>,
    pub jwt_ttl: Duration,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = env_or("EI_LISTEN_ADDR", "0.0.0.0:3000")
            .parse()
            .context("Invalid EI_LISTEN_ADDR")?;
        let db_path = env_or("EI_DB_PATH", "./db/app.db");
        let cors_allow = env_or("EI_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("EI_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid EI_REQUEST_TIMEOUT_MS")?;
        let environment: Environment = env_or("EI_ENV", "development").parse()?;
        let jwt_ttl_secs: u64 = env_or("EI_JWT_TTL_SECS", &DEFAULT_JWT_TTL_SECS.to_string())
            .parse()
            .context("Invalid EI_JWT_TTL_SECS")?;

        let jwt_secret = match std::env::var("EI_JWT_SECRET") {
            Ok(raw) => decode_secret_key(&raw).context("Invalid EI_JWT_SECRET")?,
            Err(_) if environment.is_production() => {
                bail!("EI_JWT_SECRET must be set when EI_ENV=production")
            }
            Err(_) => {
                tracing::warn!("EI_JWT_SECRET not set; using a random key, tokens will not survive a restart");
                random_secret()
            }
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            environment,
            jwt_secret,
            jwt_ttl: Duration::from_secs(jwt_ttl_secs),
        })
    }
}

pub fn random_secret() -> Vec<u8> {
    let mut bytes = vec![0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    bytes
}
