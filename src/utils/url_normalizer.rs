//! Target URL checks for new short links.
//!
//! A short link may only point at an absolute `http`/`https` URL with a host.
//! Accepted URLs are stored in a normalized form.

use url::Url;

/// Reasons a target URL is refused.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Validates and normalizes a link target.
///
/// # Normalization Rules
///
/// 1. **Protocol**: only HTTP and HTTPS
/// 2. **Host**: required, lowercased
/// 3. **Default ports**: removed (80 for HTTP, 443 for HTTPS)
/// 4. **Fragments**: removed
///
/// Path and query are kept verbatim.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for unparsable input,
/// [`UrlNormalizationError::UnsupportedProtocol`] for other schemes and
/// [`UrlNormalizationError::MissingHost`] when no host is present.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let mut url =
        Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(UrlNormalizationError::MissingHost)?
        .to_ascii_lowercase();
    url.set_host(Some(&host)).map_err(|_| {
        UrlNormalizationError::NormalizationFailed("Failed to set normalized host".to_string())
    })?;

    url.set_fragment(None);

    // The url crate already drops ports that match the scheme default,
    // this covers explicitly re-set ones.
    if matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    ) {
        url.set_port(None).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    Ok(url.to_string())
}
