use snipvault_core::models::snippet::Snippet;

/// The visible subset of `snippets`, in their original order.
///
/// An empty `language_filter` matches every language; otherwise the tag must
/// match exactly. An empty `search_term` matches everything; otherwise it must
/// appear, case-insensitively, in the title, description, a tag, or the code.
pub fn filter<'a>(
    snippets: &'a [Snippet],
    search_term: &str,
    language_filter: &str,
) -> Vec<&'a Snippet> {
    let needle = search_term.to_lowercase();
    snippets
        .iter()
        .filter(|s| language_filter.is_empty() || s.language == language_filter)
        .filter(|s| needle.is_empty() || matches_search(s, &needle))
        .collect()
}

fn matches_search(snippet: &Snippet, needle: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    contains(&snippet.title)
        || contains(&snippet.description)
        || snippet.tags.iter().any(|t| contains(t))
        || contains(&snippet.code)
}
