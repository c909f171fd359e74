use secrecy::SecretString;

pub const DEFAULT_BASE_URL: &str = "https://api.ouraring.com";

#[derive(Clone, Debug)]
pub struct Config {
    /// Personal access token; `None` means the operator must be prompted.
    pub token: Option<SecretString>,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let token = get("OURA_TOKEN").map(|t| SecretString::new(t.into()));
        let base_url = get("OURA_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Self { token, base_url }
    }
}
