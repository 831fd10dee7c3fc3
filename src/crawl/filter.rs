// src/crawl/filter.rs
// =============================================================================
// Allow-list filter for crawl candidates.
//
// Mirrors the Disallow rules of the target site's robots.txt with a plain
// substring match. It is not path-segment aware: "x.aspx.html" is rejected
// as well, and that is the intended behaviour.
// =============================================================================

const DISALLOWED_PATTERNS: [&str; 4] = ["/images", "/asp/demo_db_edit.asp", ".aspx", "/code/"];

/// Returns false if `url` contains any disallowed pattern.
pub fn is_allowed(url: &str) -> bool {
    !DISALLOWED_PATTERNS.iter().any(|pattern| url.contains(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_regular_pages() {
        assert!(is_allowed("https://x.com/about"));
        assert!(is_allowed("https://www.w3schools.com/html/default.asp"));
    }

    #[test]
    fn test_rejects_disallowed_patterns() {
        assert!(!is_allowed("https://x.com/images/a.png"));
        assert!(!is_allowed("https://x.com/foo.aspx"));
        assert!(!is_allowed("https://x.com/code/snippet"));
        assert!(!is_allowed("https://x.com/asp/demo_db_edit.asp?id=1"));
    }

    #[test]
    fn test_substring_match_is_not_segment_aware() {
        assert!(!is_allowed("https://x.com/x.aspx.html"));
        assert!(!is_allowed("https://x.com/imagesgallery"));
    }
}
