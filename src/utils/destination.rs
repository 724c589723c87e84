//! Sanity checks for configured destination URLs.
//!
//! Destinations are redirected to verbatim; these checks only feed
//! configuration warnings and never block compilation.

use url::Url;

/// Problems a destination can have.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DestinationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS destinations are supported, got '{0}'")]
    UnsupportedProtocol(String),

    #[error("Destination has no host")]
    MissingHost,

    #[error("Destination contains control characters")]
    ControlCharacter,
}

/// Checks that `destination` is an absolute HTTP(S) URL with a host.
///
/// # Errors
///
/// Returns [`DestinationError::InvalidFormat`] for unparseable or relative URLs.
/// Returns [`DestinationError::UnsupportedProtocol`] for schemes such as
/// `ftp:`, `javascript:` or `file:`.
/// Returns [`DestinationError::MissingHost`] if the URL has no host.
/// Returns [`DestinationError::ControlCharacter`] if the text contains tabs,
/// newlines or other control characters. The URL parser strips some of them,
/// but the raw text is what ends up in the `Location` header.
///
/// # Examples
///
/// ```
/// use short_it::utils::destination::{check_destination, DestinationError};
///
/// assert!(check_destination("https://github.com/example").is_ok());
/// assert_eq!(
///     check_destination("ftp://files.example.com"),
///     Err(DestinationError::UnsupportedProtocol("ftp".to_string()))
/// );
/// ```
pub fn check_destination(destination: &str) -> Result<(), DestinationError> {
    if destination.chars().any(char::is_control) {
        return Err(DestinationError::ControlCharacter);
    }

    let url =
        Url::parse(destination).map_err(|e| DestinationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(DestinationError::UnsupportedProtocol(other.to_string())),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(DestinationError::MissingHost);
    }

    Ok(())
}
