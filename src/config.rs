use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Site
    pub site_origin: String,
    pub default_locale: String,
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            site_origin: "https://pycon.sk".to_string(),
            default_locale: "sk".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", value))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port,

            // Site - origin is joined with absolute paths, so drop any trailing slash
            site_origin: std::env::var("SITE_ORIGIN")
                .map(|origin| origin.trim_end_matches('/').to_string())
                .unwrap_or(defaults.site_origin),
            default_locale: std::env::var("DEFAULT_LOCALE").unwrap_or(defaults.default_locale),
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
        })
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
