/// Derive the breadcrumb trail shown under a search hit.
///
/// The `#fragment` is dropped, then the final path segment (the page slug
/// itself); remaining segments have hyphens replaced with spaces and empty
/// segments are discarded.
pub fn derive_breadcrumbs(path: &str) -> Vec<String> {
    let without_fragment = match path.split_once('#') {
        Some((head, _)) => head,
        None => path,
    };

    let segments: Vec<&str> = without_fragment.split('/').collect();
    let trail = &segments[..segments.len().saturating_sub(1)];

    trail
        .iter()
        .map(|segment| segment.replace('-', " "))
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fragment_and_page_slug() {
        assert_eq!(derive_breadcrumbs("learn/getting-started#install"), ["learn"]);
    }

    #[test]
    fn converts_hyphens_to_spaces() {
        assert_eq!(
            derive_breadcrumbs("api/http-methods/get-request#usage"),
            ["api", "http methods"]
        );
    }

    #[test]
    fn discards_empty_segments() {
        assert_eq!(derive_breadcrumbs("/learn/guides/page"), ["learn", "guides"]);
    }

    #[test]
    fn top_level_page_has_no_trail() {
        assert!(derive_breadcrumbs("about#history").is_empty());
        assert!(derive_breadcrumbs("about").is_empty());
    }
}
