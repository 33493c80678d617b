//! Literal placeholder substitution

/// Replace every literal occurrence of each token, in mapping order
///
/// Tokens are plain substrings: no escaping and no pattern interpretation.
/// Later mapping entries also apply to text introduced by earlier
/// replacements, so the declared order keeps the result deterministic.
#[must_use]
pub fn apply(content: &str, mapping: &[(String, String)]) -> String {
    let mut result = content.to_string();

    for (token, value) in mapping {
        result = result.replace(token.as_str(), value);
    }

    result
}

/// Heuristic binary check: a null byte anywhere in the first 8 KiB
#[must_use]
pub fn is_binary(content: &[u8]) -> bool {
    let check_len = content.len().min(8192);
    content[..check_len].contains(&0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(token, value)| ((*token).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn test_replaces_all_occurrences() {
        let m = mapping(&[("%namespace%", "Billing")]);
        let out = apply("use %namespace%; new %namespace%()", &m);
        assert_eq!(out, "use Billing; new Billing()");
    }

    #[test]
    fn test_applies_entries_in_order() {
        // The first value introduces the second token; the later pass must
        // still resolve it.
        let m = mapping(&[("%a%", "prefix-%b%"), ("%b%", "suffix")]);
        let out = apply("start %a% end", &m);
        assert_eq!(out, "start prefix-suffix end");
    }

    #[test]
    fn test_no_tokens_left_for_distinct_mapping() {
        let m = mapping(&[("%one%", "1"), ("%two%", "2"), ("%three%", "3")]);
        let out = apply("%one% %two% %three% %two%", &m);

        assert_eq!(out, "1 2 3 2");
        for (token, _) in &m {
            assert!(!out.contains(token.as_str()));
        }
    }

    #[test]
    fn test_idempotent_once_tokens_are_gone() {
        let m = mapping(&[("%namespace%", "Billing"), ("%repo_url%", "https://example.com")]);
        let first = apply("ns=%namespace% url=%repo_url%", &m);
        let second = apply(&first, &m);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tokens_are_not_patterns() {
        // Regex metacharacters in a token must match literally.
        let m = mapping(&[("%na.me%", "value")]);
        assert_eq!(apply("%na.me% %naXme%", &m), "value %naXme%");
    }

    #[test]
    fn test_untouched_without_matches() {
        let m = mapping(&[("%namespace%", "Billing")]);
        assert_eq!(apply("plain content", &m), "plain content");
    }

    #[test]
    fn test_is_binary() {
        assert!(!is_binary(b"Hello, world!"));
        assert!(!is_binary(b""));
        assert!(is_binary(b"Hello\x00world"));
    }
}
