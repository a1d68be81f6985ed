// ABOUTME: Small HTML text helpers shared by the rewrite pass and settings handling.
// ABOUTME: Decodes the special-character entity set and strips markup tags.

/// Entities a rich-text editor leaves around pasted URLs.
const ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
];

/// Decodes the special-character entities back into literal characters so
/// editor-encoded URLs match the raw pattern.
pub fn decode_entities(s: &str) -> String {
    let mut result = s.to_string();
    for (entity, replacement) in ENTITIES {
        result = result.replace(entity, replacement);
    }
    result
}

/// Strips angle-bracketed tags from a string, returning the remaining text.
pub fn strip_tags(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_special_characters() {
        assert_eq!(decode_entities("&amp;"), "&");
        assert_eq!(decode_entities("&lt;b&gt;"), "<b>");
        assert_eq!(decode_entities("&quot;quoted&quot;"), "\"quoted\"");
    }

    #[test]
    fn decodes_encoded_query_separator() {
        assert_eq!(
            decode_entities("video/abc?size=720&amp;start=30"),
            "video/abc?size=720&start=30"
        );
    }

    #[test]
    fn leaves_other_entities_alone() {
        assert_eq!(decode_entities("&nbsp;&hellip;"), "&nbsp;&hellip;");
    }

    #[test]
    fn strips_tags() {
        assert_eq!(strip_tags("<b>pod</b>.example.org"), "pod.example.org");
        assert_eq!(strip_tags("plain"), "plain");
        assert_eq!(strip_tags(""), "");
    }
}
