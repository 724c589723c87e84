//! Normalization of request path segments.
//!
//! Every segment is trimmed and ASCII lower-cased before it reaches the link
//! table, on every route. Configured keys are expected to be lower-case
//! already; [`crate::domain::entities::LinkConfig::warnings`] reports those
//! that are not.

/// Returns the canonical form of a project, simple-link or link-type segment.
///
/// # Examples
///
/// ```
/// use short_it::utils::normalize::normalize_segment;
///
/// assert_eq!(normalize_segment(" GitHub "), "github");
/// assert_eq!(normalize_segment("read-the-docs"), "read-the-docs");
/// ```
pub fn normalize_segment(segment: &str) -> String {
    segment.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize_segment("ShortIt"), "shortit");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_segment("\tdocs \n"), "docs");
    }

    #[test]
    fn test_keeps_non_ascii() {
        assert_eq!(normalize_segment("Ünïcode"), "Ünïcode");
    }

    #[test]
    fn test_already_normalized() {
        assert_eq!(normalize_segment("rtd"), "rtd");
    }
}
