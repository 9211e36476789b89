/// CSS class applied to highlighted spans, matching the site stylesheet.
pub const HIGHLIGHT_CLASS: &str = "font-bold";

/// Maximum rendered length of an excerpt, counted in visible characters.
pub const EXCERPT_BUDGET: usize = 125;

/// Wrap every case-insensitive occurrence of `term` in a highlight span.
pub fn highlight(text: &str, term: &str) -> String {
    render_with_ranges(text, &match_ranges(text, term))
}

/// Highlight and truncate to [`EXCERPT_BUDGET`] visible characters.
///
/// Truncation never lands inside a highlight span: when the cut would
/// split a match, it backs off to the start of that match. A truncated
/// excerpt ends with an ellipsis, which counts against the budget.
pub fn highlight_excerpt(text: &str, term: &str) -> String {
    let ranges = match_ranges(text, term);

    if text.chars().count() <= EXCERPT_BUDGET {
        return render_with_ranges(text, &ranges);
    }

    // Reserve one character for the ellipsis.
    let mut cut = byte_index_of_char(text, EXCERPT_BUDGET - 1);
    if let Some(&(start, _)) = ranges.iter().find(|&&(start, end)| start < cut && cut < end) {
        cut = start;
    }

    let kept: Vec<(usize, usize)> = ranges.into_iter().filter(|&(_, end)| end <= cut).collect();
    let mut out = render_with_ranges(&text[..cut], &kept);
    out.push('…');
    out
}

/// Byte ranges of every case-insensitive occurrence of `term` in `text`.
fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }

    let lower_text = text.to_lowercase();
    let lower_term = term.to_lowercase();

    // Case folding can change byte lengths (e.g. İ), which would make
    // offsets into the lowered text wrong in the original. Skip
    // highlighting rather than corrupt the markup.
    if lower_text.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut cursor = 0;
    while let Some(found) = lower_text[cursor..].find(&lower_term) {
        let start = cursor + found;
        let end = start + lower_term.len();
        ranges.push((start, end));
        cursor = end;
    }
    ranges
}

fn render_with_ranges(text: &str, ranges: &[(usize, usize)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for &(start, end) in ranges {
        out.push_str(&text[cursor..start]);
        out.push_str(&format!(
            r#"<span class="{}">{}</span>"#,
            HIGHLIGHT_CLASS,
            &text[start..end]
        ));
        cursor = end;
    }

    out.push_str(&text[cursor..]);
    out
}

fn byte_index_of_char(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(rendered: &str) -> String {
        rendered
            .replace(&format!(r#"<span class="{}">"#, HIGHLIGHT_CLASS), "")
            .replace("</span>", "")
    }

    #[test]
    fn wraps_case_insensitive_matches() {
        let rendered = highlight("Promise chains and promises", "promise");
        assert_eq!(
            rendered,
            r#"<span class="font-bold">Promise</span> chains and <span class="font-bold">promise</span>s"#
        );
    }

    #[test]
    fn empty_term_leaves_text_untouched() {
        assert_eq!(highlight("Worker Threads", ""), "Worker Threads");
        assert_eq!(highlight("Worker Threads", "   "), "Worker Threads");
    }

    #[test]
    fn no_match_leaves_text_untouched() {
        assert_eq!(highlight("Worker Threads", "cluster"), "Worker Threads");
    }

    #[test]
    fn short_text_is_not_truncated() {
        let rendered = highlight_excerpt("Using fetch", "fetch");
        assert!(!rendered.ends_with('…'));
        assert_eq!(visible(&rendered), "Using fetch");
    }

    #[test]
    fn truncation_respects_budget() {
        let text = "word ".repeat(60);
        let rendered = highlight_excerpt(&text, "word");
        assert!(visible(&rendered).chars().count() <= EXCERPT_BUDGET);
    }

    #[test]
    fn truncation_never_cuts_inside_a_span() {
        // Place a match straddling the cut position so the cut must back
        // off to the start of the match.
        let mut text = "x".repeat(EXCERPT_BUDGET - 3);
        text.push_str("anchor tail");
        let rendered = highlight_excerpt(&text, "anchor");

        assert_eq!(rendered.matches("<span").count(), rendered.matches("</span>").count());
        assert!(!visible(&rendered).contains("anch"));
        assert!(rendered.ends_with('…'));
    }

    #[test]
    fn kept_matches_survive_truncation() {
        let mut text = "The anchor sits early. ".to_string();
        text.push_str(&"y".repeat(200));
        let rendered = highlight_excerpt(&text, "anchor");
        assert!(rendered.contains(r#"<span class="font-bold">anchor</span>"#));
        assert!(rendered.ends_with('…'));
    }
}
