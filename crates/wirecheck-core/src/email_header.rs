//! Builds a `CUSTOM-EMAIL` header from a user record served by a mock endpoint.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

use crate::fetch::{self, FetchError};

/// Header carrying the user's email to the upstream app.
pub const EMAIL_HEADER_NAME: &str = "CUSTOM-EMAIL";
/// Environment variable overriding the mock endpoint.
pub const MOCK_USER_URL_ENV: &str = "MOCK_USER_URL";
pub const DEFAULT_MOCK_USER_URL: &str = "https://jsonplaceholder.typicode.com/users/2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Header name to values.
pub type Headers = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Error)]
pub enum EmailHeaderError {
    #[error("fetch email: {0}")]
    Fetch(#[from] FetchError),
    #[error("email missing in response")]
    MissingEmail,
}

#[derive(Debug, Deserialize)]
struct EmailBody {
    #[serde(default)]
    email: String,
}

/// Picks the mock endpoint: `MOCK_USER_URL` if set and non-empty, then the
/// configured URL, then the public JSONPlaceholder user #2.
pub fn resolve_mock_user_url(configured: Option<&str>) -> String {
    let from_env = std::env::var(MOCK_USER_URL_ENV).ok();
    pick_url(from_env.as_deref(), configured)
}

fn pick_url(from_env: Option<&str>, configured: Option<&str>) -> String {
    [from_env, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|u| !u.is_empty())
        .unwrap_or(DEFAULT_MOCK_USER_URL)
        .to_string()
}

/// Fetches the user at `url` and returns `{ "CUSTOM-EMAIL": [email] }`.
pub fn create_email_header(url: &str, timeout: Duration) -> Result<Headers, EmailHeaderError> {
    tracing::info!("building email custom header");
    tracing::debug!(url, "retrieving email from mock endpoint");

    let body: EmailBody = fetch::get_json(url, timeout)?;
    let email = body.email.trim();
    if email.is_empty() {
        return Err(EmailHeaderError::MissingEmail);
    }

    let mut headers = Headers::new();
    headers.insert(EMAIL_HEADER_NAME.to_string(), vec![email.to_string()]);
    Ok(headers)
}
