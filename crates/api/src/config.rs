use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// HTTP server settings, read once at startup.
///
/// | Env Var                | Default                 |
/// |------------------------|-------------------------|
/// | `HOST`                 | `0.0.0.0`               |
/// | `PORT`                 | `3000`                  |
/// | `CORS_ORIGINS`         | `http://localhost:5173` |
/// | `REQUEST_TIMEOUT_SECS` | `30`                    |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated in the environment.
    pub cors_origins: Vec<String>,
    /// Requests running longer than this get a 408.
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Panics on unparseable values; misconfiguration should stop the
    /// process before it binds.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "3000"),
            cors_origins: parse_origins(&env_or::<String>(
                "CORS_ORIGINS",
                "http://localhost:5173",
            )),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "30"),
        }
    }

    /// Address to bind the listener to.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn env_or<T>(key: &str, default: &str) -> T
where
    T: FromStr,
    T::Err: Display,
{
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .unwrap_or_else(|e| panic!("{key} has invalid value '{raw}': {e}"))
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
