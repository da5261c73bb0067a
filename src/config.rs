//! Widget configuration resolved at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Completion endpoint used when the build does not override it.
pub const DEFAULT_ENDPOINT: &str = "https://gptserver.adaptable.app";

/// Where the widget sends completion requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    pub endpoint: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_owned() }
    }
}

impl ChatConfig {
    /// Endpoint chosen at compile time: `CHATBOX_API_URL` when the build
    /// sets it, [`DEFAULT_ENDPOINT`] otherwise. Trailing slashes are
    /// dropped so the value can be used as a bare origin.
    pub fn from_build_env() -> Self {
        let endpoint = option_env!("CHATBOX_API_URL").unwrap_or(DEFAULT_ENDPOINT);
        Self { endpoint: endpoint.trim_end_matches('/').to_owned() }
    }
}
