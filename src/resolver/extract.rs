//! Channel-id extraction strategies.
//!
//! Each strategy is a pure `fn(&str) -> Option<String>` over the fetched
//! page. [`STRATEGIES`] lists them in priority order; the resolver evaluates
//! them until one returns a value. Extraction is tolerant string scanning
//! within known tag blocks, not full HTML parsing.

use html_escape::decode_html_entities;

/// Strategies in priority order, paired with the name used in diagnostics.
pub const STRATEGIES: &[(&str, fn(&str) -> Option<String>)] = &[
    ("meta tag", meta_tag),
    ("canonical URL", canonical_link),
    ("JSON-LD", json_ld),
    ("page text", page_text),
];

/// `<meta property="channelId" ...>` or `<meta itemprop="channelId" ...>`,
/// taking the `content` attribute.
pub fn meta_tag(html: &str) -> Option<String> {
    for tag in tags(html, "<meta") {
        let marks_channel = attr(tag, "property").as_deref() == Some("channelId")
            || attr(tag, "itemprop").as_deref() == Some("channelId");
        if !marks_channel {
            continue;
        }
        if let Some(content) = attr(tag, "content") {
            if !content.is_empty() {
                return Some(content);
            }
        }
    }

    None
}

/// `<link rel="canonical" href=".../channel/<id>...">`.
pub fn canonical_link(html: &str) -> Option<String> {
    for tag in tags(html, "<link") {
        if attr(tag, "rel").as_deref() != Some("canonical") {
            continue;
        }
        if let Some(href) = attr(tag, "href") {
            if let Some(id) = channel_segment(&href) {
                return Some(id);
            }
        }
    }

    None
}

/// `"channelId":"<id>"` inside the first `application/ld+json` script block.
///
/// Pattern match only; structured-data blocks are never parsed as JSON.
pub fn json_ld(html: &str) -> Option<String> {
    let mut rest = html;
    while let Some(pos) = rest.find("<script") {
        let after = &rest[pos..];
        let tag_end = after.find('>')?;
        let (tag, tail) = after.split_at(tag_end + 1);
        let body_end = tail.find("</script>").unwrap_or(tail.len());

        if attr(tag, "type").as_deref() == Some("application/ld+json") {
            // Only the first structured-data block is considered; a miss here
            // falls through to the raw page-text scan.
            return scan_channel_id(&tail[..body_end]);
        }

        rest = &tail[body_end..];
    }

    None
}

/// `"channelId":"<id>"` anywhere in the raw page text.
pub fn page_text(html: &str) -> Option<String> {
    scan_channel_id(html)
}

/// Last-resort extraction from the URL path itself.
pub fn channel_id_from_url(url: &str) -> Option<String> {
    channel_segment(url)
}

/// The path segment after the last `/channel/`, up to the next `/`.
fn channel_segment(url: &str) -> Option<String> {
    let (_, tail) = url.rsplit_once("/channel/")?;
    let id = tail.split('/').next()?;
    if id.is_empty() {
        return None;
    }

    Some(id.to_string())
}

/// First non-empty `"channelId":"<value>"` occurrence.
fn scan_channel_id(text: &str) -> Option<String> {
    const NEEDLE: &str = "\"channelId\":\"";

    let mut rest = text;
    while let Some(pos) = rest.find(NEEDLE) {
        let tail = &rest[pos + NEEDLE.len()..];
        let end = tail.find('"')?;
        if end > 0 {
            return Some(tail[..end].to_string());
        }
        rest = tail;
    }

    None
}

/// Contents of each `open`-prefixed tag up to its closing `>`.
fn tags<'a>(html: &'a str, open: &str) -> Vec<&'a str> {
    let mut found = Vec::new();
    let mut rest = html;
    while let Some(pos) = rest.find(open) {
        let after = &rest[pos + open.len()..];
        match after.find('>') {
            Some(end) => {
                found.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }

    found
}

/// Extract an attribute value from a tag slice, decoding HTML entities.
fn attr(tag: &str, name: &str) -> Option<String> {
    let pattern = format!("{name}=\"");
    let start = tag.find(&pattern)? + pattern.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;

    Some(decode_html_entities(&rest[..end]).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_tag_property() {
        let html = r#"<html><head><meta property="channelId" content="UC123"></head></html>"#;
        assert_eq!(meta_tag(html), Some("UC123".into()));
    }

    #[test]
    fn test_meta_tag_itemprop_and_attribute_order() {
        let html = r#"<meta content="UCabc" itemprop="channelId">"#;
        assert_eq!(meta_tag(html), Some("UCabc".into()));
    }

    #[test]
    fn test_meta_tag_ignores_unrelated_and_empty() {
        let html = r#"<meta property="og:title" content="x"><meta itemprop="channelId" content="">"#;
        assert_eq!(meta_tag(html), None);
    }

    #[test]
    fn test_canonical_link() {
        let html = r#"<link rel="canonical" href="https://www.youtube.com/channel/UC42/featured">"#;
        assert_eq!(canonical_link(html), Some("UC42".into()));
    }

    #[test]
    fn test_canonical_link_without_channel_path() {
        let html = r#"<link rel="canonical" href="https://www.youtube.com/@handle">"#;
        assert_eq!(canonical_link(html), None);
    }

    #[test]
    fn test_canonical_link_skips_other_rels() {
        let html = concat!(
            r#"<link rel="alternate" href="https://www.youtube.com/channel/UCwrong">"#,
            r#"<link rel="canonical" href="https://www.youtube.com/channel/UCright">"#,
        );
        assert_eq!(canonical_link(html), Some("UCright".into()));
    }

    #[test]
    fn test_json_ld() {
        let html = concat!(
            r#"<script src="app.js"></script>"#,
            r#"<script type="application/ld+json">{"@type":"Channel","channelId":"UCld"}</script>"#,
        );
        assert_eq!(json_ld(html), Some("UCld".into()));
    }

    #[test]
    fn test_json_ld_only_first_block() {
        // A miss in the first structured-data block is final for this
        // strategy; the raw-text scan still sees later blocks.
        let html = concat!(
            r#"<script type="application/ld+json">{"@type":"VideoObject"}</script>"#,
            r#"<script type="application/ld+json">{"channelId":"UClater"}</script>"#,
        );
        assert_eq!(json_ld(html), None);
        assert_eq!(page_text(html), Some("UClater".into()));
    }

    #[test]
    fn test_page_text() {
        let html = r#"var ytInitialData = {"header":{"channelId":"UC999"}};"#;
        assert_eq!(page_text(html), Some("UC999".into()));
    }

    #[test]
    fn test_page_text_skips_empty_value() {
        let html = r#"{"channelId":"","channelId":"UCfull"}"#;
        assert_eq!(page_text(html), Some("UCfull".into()));
    }

    #[test]
    fn test_channel_id_from_url() {
        assert_eq!(
            channel_id_from_url("https://www.youtube.com/channel/UC555/videos"),
            Some("UC555".into())
        );
        assert_eq!(
            channel_id_from_url("https://www.youtube.com/channel/UC555"),
            Some("UC555".into())
        );
        assert_eq!(channel_id_from_url("https://www.youtube.com/@handle"), None);
        assert_eq!(channel_id_from_url("https://www.youtube.com/channel/"), None);
    }

    #[test]
    fn test_attr_decodes_entities() {
        let tag = r#"link rel="canonical" href="https://example.com/?a=1&amp;b=2""#;
        assert_eq!(
            attr(tag, "href"),
            Some("https://example.com/?a=1&b=2".into())
        );
    }

    #[test]
    fn test_strategy_order() {
        let names: Vec<&str> = STRATEGIES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["meta tag", "canonical URL", "JSON-LD", "page text"]
        );
    }
}
