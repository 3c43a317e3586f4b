use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Clone, Debug)]
pub struct Config {
    /// Root of the rental service, without trailing slash
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let base_url = env::var("RENTAL_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::with_base_url(&base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Apply `--base-url <url>` from the command line, if present
    pub fn apply_args(mut self, args: &[String]) -> Self {
        if let Some(pos) = args.iter().position(|arg| arg == "--base-url") {
            if let Some(val) = args.get(pos + 1) {
                self = Self::with_base_url(val);
            }
        }
        self
    }
}
