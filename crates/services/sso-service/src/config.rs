//! SSO service configuration.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use common::{ConfigError, DatabaseConfig, Environment, GrpcServerConfig};
use domain::HashCost;

/// Settings needed by the `migrate` commands: no token or hashing
/// variables are read.
#[derive(Debug, Clone)]
pub struct MigrateConfig {
    pub env: Environment,
    pub database: DatabaseConfig,
}

impl MigrateConfig {
    /// Load from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = parse_or(&lookup, "SSO_ENV", Environment::default())?;

        let db_defaults = DatabaseConfig::default();
        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").unwrap_or(db_defaults.url),
            max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                db_defaults.max_connections,
            )?,
            min_connections: parse_or(
                &lookup,
                "DATABASE_MIN_CONNECTIONS",
                db_defaults.min_connections,
            )?,
            connect_timeout_secs: parse_or(
                &lookup,
                "DATABASE_CONNECT_TIMEOUT_SECS",
                db_defaults.connect_timeout_secs,
            )?,
        };

        Ok(Self { env, database })
    }
}

/// SSO service configuration.
#[derive(Debug, Clone)]
pub struct SsoConfig {
    pub env: Environment,
    pub database: DatabaseConfig,
    pub grpc: GrpcServerConfig,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    pub hash_cost: HashCost,
}

impl SsoConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let MigrateConfig { env, database } = MigrateConfig::from_lookup(&lookup)?;

        let grpc_defaults = GrpcServerConfig::default();
        let grpc = GrpcServerConfig {
            host: lookup("GRPC_HOST").unwrap_or(grpc_defaults.host),
            port: parse_or(&lookup, "GRPC_PORT", grpc_defaults.port)?,
            timeout_secs: parse_or(&lookup, "GRPC_TIMEOUT_SECS", grpc_defaults.timeout_secs)?,
        };

        let ttl_secs: u64 = parse_required(&lookup, "TOKEN_TTL_SECS")?;
        if ttl_secs == 0 {
            return Err(ConfigError::invalid("TOKEN_TTL_SECS", "must be positive"));
        }

        let cost_defaults = HashCost::default();
        let hash_cost = HashCost {
            memory_kib: parse_or(&lookup, "ARGON2_MEMORY_KIB", cost_defaults.memory_kib)?,
            iterations: parse_or(&lookup, "ARGON2_ITERATIONS", cost_defaults.iterations)?,
            parallelism: parse_or(&lookup, "ARGON2_PARALLELISM", cost_defaults.parallelism)?,
        };

        Ok(Self {
            env,
            database,
            grpc,
            token_ttl: Duration::from_secs(ttl_secs),
            hash_cost,
        })
    }
}

fn parse_required<F, T>(lookup: &F, name: &'static str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(name).ok_or(ConfigError::Missing(name))?;
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::invalid(name, e.to_string()))
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(_) => parse_required(lookup, name),
        None => Ok(default),
    }
}
