pub mod advisor;
pub mod catalog;
pub mod domain;
pub mod quote;

pub mod config {
    use anyhow::Context;

    pub const DEFAULT_PORT: u16 = 3000;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub port: u16,
        pub quote_api_key: Option<String>,
        pub quote_api_base_url: Option<String>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let port = match std::env::var("PORT") {
                Ok(v) if !v.trim().is_empty() => v
                    .trim()
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a port number (got {v:?})"))?,
                _ => DEFAULT_PORT,
            };

            Ok(Self {
                port,
                quote_api_key: non_empty_var("QUOTE_API_KEY"),
                quote_api_base_url: non_empty_var("QUOTE_API_BASE_URL"),
                sentry_dsn: non_empty_var("SENTRY_DSN"),
            })
        }

        pub fn require_quote_api_key(&self) -> anyhow::Result<&str> {
            self.quote_api_key
                .as_deref()
                .context("QUOTE_API_KEY is required")
        }
    }

    fn non_empty_var(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.trim().is_empty())
    }
}
