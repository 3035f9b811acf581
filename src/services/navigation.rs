// Address bar input handling.
// Pure string/URL logic, no engine access, so it can be unit tested in isolation.

use url::Url;

use crate::types::errors::NavigationError;

/// A parsed navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    /// Absolute URL handed to the engine.
    pub url: Url,
    /// Form shown in the address bar and stored as the tab's current URL.
    pub display: String,
}

/// Prepends `http://` to input that has neither a scheme separator nor the
/// `about:` pseudo-scheme. Surrounding whitespace is dropped.
pub fn normalize_input(input: &str) -> String {
    let trimmed = input.trim();
    if !trimmed.contains("://") && !trimmed.starts_with("about:") {
        format!("http://{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Normalizes and parses address bar input.
pub fn resolve_input(input: &str) -> Result<ResolvedUrl, NavigationError> {
    let normalized = normalize_input(input);
    let url = Url::parse(&normalized)
        .map_err(|_| NavigationError::MalformedUrl(input.to_string()))?;
    let display = display_form(&normalized, &url);
    Ok(ResolvedUrl { url, display })
}

/// The parser always serializes an empty path as `/`. Drop that slash when
/// the user did not type one, so `example.com` shows as `http://example.com`.
fn display_form(normalized: &str, url: &Url) -> String {
    let serialized = url.as_str();
    let added_root = url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none()
        && !normalized.ends_with('/');
    if added_root {
        serialized.trim_end_matches('/').to_string()
    } else {
        serialized.to_string()
    }
}
