//! Reply parsing: the model is asked for a bare JSON array of strings, but
//! in practice replies sometimes arrive wrapped in a markdown code fence.

use super::SuggestError;

const EXCERPT_LEN: usize = 100;

/// Strip one surrounding markdown code fence, including an optional language
/// tag after the opening backticks. Anything that is not a full fence wrap
/// is returned untouched (minus outer whitespace).
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // The first line may be a language tag such as `json`
    let inner = match inner.find('\n') {
        Some(pos) if inner[..pos].chars().all(|c| c.is_ascii_alphanumeric()) => &inner[pos + 1..],
        _ => inner,
    };
    inner.trim()
}

/// Parse the model reply into a tag list. The reply must be a JSON array in
/// which every element is a string; anything else is `Malformed`.
pub fn parse_tag_array(raw: &str) -> Result<Vec<String>, SuggestError> {
    let json = strip_code_fence(raw);

    let value: serde_json::Value = serde_json::from_str(json).map_err(|_| malformed(raw))?;
    let items = value.as_array().ok_or_else(|| malformed(raw))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| malformed(raw))
        })
        .collect()
}

fn malformed(raw: &str) -> SuggestError {
    SuggestError::Malformed {
        excerpt: raw.chars().take(EXCERPT_LEN).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_parses() {
        assert_eq!(
            parse_tag_array(r#"["a","b","c"]"#).unwrap(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn fenced_array_with_language_tag_parses() {
        let raw = "```json\n[\"a\",\"b\",\"c\"]\n```";
        assert_eq!(parse_tag_array(raw).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn fenced_array_without_language_tag_parses() {
        let raw = "```\n[\"eco\", \"reusable\"]\n```";
        assert_eq!(parse_tag_array(raw).unwrap(), vec!["eco", "reusable"]);
    }

    #[test]
    fn fence_on_one_line_parses() {
        assert_eq!(parse_tag_array("```[\"x\"]```").unwrap(), vec!["x"]);
    }

    #[test]
    fn unterminated_fence_is_left_alone() {
        // No closing fence: content is not unwrapped, so it fails as JSON
        let err = parse_tag_array("```json\n[\"a\"]").unwrap_err();
        assert!(matches!(err, SuggestError::Malformed { .. }));
    }

    #[test]
    fn non_array_json_is_malformed() {
        let err = parse_tag_array(r#"{"tags": ["a"]}"#).unwrap_err();
        assert!(matches!(err, SuggestError::Malformed { .. }));
    }

    #[test]
    fn array_with_non_string_element_is_malformed() {
        let err = parse_tag_array(r#"["a", 2, "c"]"#).unwrap_err();
        assert!(matches!(err, SuggestError::Malformed { .. }));
    }

    #[test]
    fn free_text_is_malformed_with_truncated_excerpt() {
        let raw = "Sure! Here are some tags: ".repeat(20);
        match parse_tag_array(&raw).unwrap_err() {
            SuggestError::Malformed { excerpt } => {
                assert_eq!(excerpt.chars().count(), 100);
                assert!(raw.starts_with(&excerpt));
            }
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_tag_array("[]").unwrap().is_empty());
    }
}
