// ABOUTME: Configuration for the NoteHub API client
// ABOUTME: Reads the bearer token and base URL from the environment

use crate::error::NoteError;

/// Public NoteHub instance used when NOTEHUB_API_URL is not set
pub const DEFAULT_BASE_URL: &str = "https://notehub-public.goit.study/api";

const TOKEN_VAR: &str = "NOTEHUB_TOKEN";
const BASE_URL_VAR: &str = "NOTEHUB_API_URL";

/// Connection settings for [`crate::NotesClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL without a trailing slash
    pub base_url: String,
    /// Bearer token sent on every request
    pub token: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Loads configuration from the process environment. A missing token is
    /// a hard error so the program fails at startup instead of on the first
    /// 401.
    pub fn from_env() -> Result<Self, NoteError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but with an injectable variable
    /// lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, NoteError> {
        let token = lookup(TOKEN_VAR)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                NoteError::Config(format!(
                    "{} is not set; request a token and export it before starting",
                    TOKEN_VAR
                ))
            })?;
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(base_url, token))
    }
}
