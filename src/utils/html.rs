//! Helpers for putting profile data into HTML safely.

/// Serialize JSON for embedding inside a `<script>` element.
///
/// `<` can only occur inside JSON strings, so every one is written as
/// `\u003c` and the data can never close the script element.
pub fn script_json(value: &serde_json::Value) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace('<', "\\u003c")
}

/// A `[label](url)` link found in a profile field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownLink {
    pub label: String,
    pub url: String,
}

/// Parse a whole-field markdown link. Targets rejected by [`safe_link`] make
/// the field plain text.
pub fn parse_markdown_link(text: &str) -> Option<MarkdownLink> {
    let text = text.trim();
    let rest = text.strip_prefix('[')?;
    let (label, rest) = rest.split_once("](")?;
    let target = rest.strip_suffix(')')?;

    Some(MarkdownLink {
        label: label.to_string(),
        url: safe_link(target)?,
    })
}

/// Normalize a link target for use in `href`. Only http, https and mailto
/// URLs are accepted.
pub fn safe_link(target: &str) -> Option<String> {
    let url = url::Url::parse(target.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https" | "mailto") {
        return None;
    }
    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_json_escapes_closing_tag() {
        let value = serde_json::json!({"nm": "</script><script>alert(1)</script>"});
        let out = script_json(&value);
        assert!(!out.contains("</script>"));
        let back: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_parse_markdown_link() {
        assert_eq!(
            parse_markdown_link("[GitHub](https://github.com/jane)"),
            Some(MarkdownLink {
                label: "GitHub".to_string(),
                url: "https://github.com/jane".to_string(),
            })
        );
        assert_eq!(
            parse_markdown_link(" [Mail](mailto:jane@example.com) ").map(|l| l.label),
            Some("Mail".to_string())
        );
    }

    #[test]
    fn test_safe_link() {
        assert_eq!(
            safe_link(" https://turismapp.ccbp.tech "),
            Some("https://turismapp.ccbp.tech/".to_string())
        );
        assert_eq!(safe_link("javascript:alert(1)"), None);
        assert_eq!(safe_link("data:text/html,hi"), None);
        assert_eq!(safe_link("turismapp.ccbp.tech"), None);
    }

    #[test]
    fn test_parse_markdown_link_rejects_non_links() {
        assert_eq!(parse_markdown_link("github.com/jane"), None);
        assert_eq!(parse_markdown_link("[x](javascript:alert(1))"), None);
        assert_eq!(parse_markdown_link("[x](not a url)"), None);
        assert_eq!(parse_markdown_link(""), None);
    }
}
