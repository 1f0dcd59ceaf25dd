//! Auth service location, resolved at build time.
//!
//! The browser has no process environment, so the only override is the
//! compile-time `AUTH_API_BASE_URL` variable read through `option_env!`.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Where the auth endpoints live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL, dropping trailing slashes.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Build config from `AUTH_API_BASE_URL` as seen by the compiler.
    ///
    /// Falls back to [`DEFAULT_API_BASE_URL`] when unset or blank.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("AUTH_API_BASE_URL"))
    }

    fn from_override(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(base) => Self::new(base),
            None => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    /// Absolute URL for an endpoint path such as `/auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
