use std::env;

pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_JSON_PAYLOAD_LIMIT: usize = 2 * 1024 * 1024; // 2 MB

/// Server settings read from the environment (and `.env` via dotenv in `main`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub json_payload_limit: usize,
    pub sentry_dsn: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            json_payload_limit: DEFAULT_JSON_PAYLOAD_LIMIT,
            sentry_dsn: None,
        }
    }
}

impl ServerConfig {
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let host = env::var("HOST")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let json_payload_limit = env::var("JSON_PAYLOAD_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_JSON_PAYLOAD_LIMIT);

        let sentry_dsn = env::var("SENTRY_DSN").ok().filter(|s| !s.trim().is_empty());

        ServerConfig {
            host,
            port,
            json_payload_limit,
            sentry_dsn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = ["PORT", "HOST", "JSON_PAYLOAD_LIMIT", "SENTRY_DSN"];

    fn clear() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear();
        assert_eq!(ServerConfig::from_env(), ServerConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_overrides() {
        clear();
        env::set_var("PORT", "9100");
        env::set_var("HOST", "127.0.0.1");
        env::set_var("JSON_PAYLOAD_LIMIT", "1024");
        env::set_var("SENTRY_DSN", "https://key@sentry.example.com/1");

        let config = ServerConfig::from_env();
        assert_eq!(config.port, 9100);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.json_payload_limit, 1024);
        assert_eq!(config.sentry_dsn.as_deref(), Some("https://key@sentry.example.com/1"));
        clear();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_garbage() {
        clear();
        env::set_var("PORT", "not-a-port");
        env::set_var("JSON_PAYLOAD_LIMIT", "-5");
        env::set_var("SENTRY_DSN", "  ");

        let config = ServerConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.json_payload_limit, DEFAULT_JSON_PAYLOAD_LIMIT);
        assert_eq!(config.sentry_dsn, None);
        clear();
    }
}
