/// Search highlighting for filtered lists
use leptos::prelude::*;

/// Byte ranges of case-insensitive matches of `filter` in `text`.
///
/// Ranges are only produced when every char of `text` lowercases to a single
/// char of the same UTF-8 width, so slicing with them is always on char boundaries.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let filter_lower = filter.trim().to_lowercase();
    if filter_lower.is_empty() || !text.chars().all(keeps_width_when_lowercased) {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

fn keeps_width_when_lowercased(c: char) -> bool {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l.len_utf8() == c.len_utf8(),
        _ => false,
    }
}

/// Highlight matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Pastilhas de freio", "FREIO"), vec![(13, 18)]);
        assert_eq!(match_ranges("Alinhamento", "xyz"), vec![]);
        assert_eq!(match_ranges("Alinhamento", ""), vec![]);
        assert_eq!(match_ranges("aXa", "a"), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_match_ranges_with_accents() {
        assert_eq!(match_ranges("Troca de óleo", "óleo"), vec![(9, 14)]);
    }

    #[test]
    fn test_width_changing_chars_disable_highlighting() {
        // "İ" grows and "ẞ" shrinks by one byte when lowercased
        assert_eq!(match_ranges("İxẞ", "x"), vec![]);
        assert_eq!(match_ranges("İẞ freio", "freio"), vec![]);
        let _ = highlight_matches("İxẞ", "x");
    }
}
