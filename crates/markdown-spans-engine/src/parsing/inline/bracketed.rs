use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use super::{
    kinds::{Image, Link},
    types::{SpanKind, TextSpan},
};

/// One `[label](destination)` occurrence found in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Reference<'t> {
    /// Byte range of the whole construct, including `!` for images.
    range: Range<usize>,
    label: &'t str,
    destination: &'t str,
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(Image::PATTERN).expect("Invalid image regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(Link::PATTERN).expect("Invalid link regex"))
}

fn image_refs(text: &str) -> Vec<Reference<'_>> {
    image_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            Some(Reference {
                range: caps.get(0)?.range(),
                label: caps.get(1)?.as_str(),
                destination: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

fn link_refs(text: &str) -> Vec<Reference<'_>> {
    link_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            // A leading bang makes it an image: the match still consumes it,
            // so the `[` after it can never start a link.
            if caps.get(1)?.as_str() == Link::BANG {
                return None;
            }
            Some(Reference {
                range: caps.get(0)?.range(),
                label: caps.get(2)?.as_str(),
                destination: caps.get(3)?.as_str(),
            })
        })
        .collect()
}

/// Returns `(alt, src)` for every `![alt](src)` in `text`, in order.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    image_refs(text)
        .into_iter()
        .map(|r| (r.label.to_string(), r.destination.to_string()))
        .collect()
}

/// Returns `(text, href)` for every `[text](href)` in `text` that is not an
/// image, in order.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    link_refs(text)
        .into_iter()
        .map(|r| (r.label.to_string(), r.destination.to_string()))
        .collect()
}

/// Splits image references out of every plain span.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_bracketed(spans, SpanKind::Image, image_refs)
}

/// Splits link references out of every plain span. Images are left alone,
/// so run [`split_images`] first.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_bracketed(spans, SpanKind::Link, link_refs)
}

fn split_bracketed(
    spans: Vec<TextSpan>,
    kind: SpanKind,
    refs: fn(&str) -> Vec<Reference<'_>>,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() || span.text.is_empty() {
            out.push(span);
            continue;
        }

        let piece = |text: &str| TextSpan {
            text: text.to_string(),
            kind: SpanKind::Plain,
            url: span.url.clone(),
        };

        let mut last = 0;
        for r in refs(&span.text) {
            if r.range.start > last {
                out.push(piece(&span.text[last..r.range.start]));
            }
            out.push(TextSpan::with_url(r.label, kind, r.destination));
            last = r.range.end;
        }
        if last < span.text.len() {
            out.push(piece(&span.text[last..]));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn extract_markdown_images() {
        let matches = extract_images(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)",
        );
        assert_eq!(
            matches,
            vec![(
                "image".to_string(),
                "https://i.imgur.com/zjjcJKZ.png".to_string()
            )]
        );
    }

    #[test]
    fn extract_markdown_links() {
        let matches = extract_links(
            "This is text with a link [to boot dev](https://www.boot.dev) and [to youtube](https://www.youtube.com/@bootdotdev)",
        );
        assert_eq!(
            matches,
            vec![
                ("to boot dev".to_string(), "https://www.boot.dev".to_string()),
                (
                    "to youtube".to_string(),
                    "https://www.youtube.com/@bootdotdev".to_string()
                ),
            ]
        );
    }

    #[rstest]
    #[case("![a](u)", vec![("a", "u")], vec![])]
    #[case("[a](u)", vec![], vec![("a", "u")])]
    #[case("![i](x) and [l](y)", vec![("i", "x")], vec![("l", "y")])]
    #[case("!![a](u)", vec![("a", "u")], vec![])]
    #[case("[](empty)", vec![], vec![("", "empty")])]
    #[case("no refs [here] (at all)", vec![], vec![])]
    fn images_and_links_are_exclusive(
        #[case] text: &str,
        #[case] images: Vec<(&str, &str)>,
        #[case] links: Vec<(&str, &str)>,
    ) {
        let owned = |v: Vec<(&str, &str)>| {
            v.into_iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect::<Vec<_>>()
        };
        assert_eq!(extract_images(text), owned(images));
        assert_eq!(extract_links(text), owned(links));
    }

    #[test]
    fn nested_brackets_are_not_supported() {
        assert_eq!(extract_links("[a [b] c](u)"), Vec::<(String, String)>::new());
        assert_eq!(
            extract_links("[wiki](https://en.wikipedia.org/wiki/Rust_(language))"),
            Vec::<(String, String)>::new()
        );
    }

    #[test]
    fn split_images_between_text() {
        let out = split_images(vec![TextSpan::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )]);
        assert_eq!(
            out,
            vec![
                TextSpan::plain("This is text with an "),
                TextSpan::with_url("image", SpanKind::Image, "https://i.imgur.com/zjjcJKZ.png"),
                TextSpan::plain(" and another "),
                TextSpan::with_url(
                    "second image",
                    SpanKind::Image,
                    "https://i.imgur.com/3elNhQu.png"
                ),
            ]
        );
    }

    #[test]
    fn split_adjacent_images() {
        let out = split_images(vec![TextSpan::plain("![a](1)![b](2)")]);
        assert_eq!(
            out,
            vec![
                TextSpan::with_url("a", SpanKind::Image, "1"),
                TextSpan::with_url("b", SpanKind::Image, "2"),
            ]
        );
    }

    #[test]
    fn split_links_leaves_images_as_text() {
        let out = split_links(vec![TextSpan::plain("see [docs](d) not ![pic](p)")]);
        assert_eq!(
            out,
            vec![
                TextSpan::plain("see "),
                TextSpan::with_url("docs", SpanKind::Link, "d"),
                TextSpan::plain(" not ![pic](p)"),
            ]
        );
    }

    #[test]
    fn split_images_without_images_is_identity() {
        let input = vec![
            TextSpan::plain("just [a link](u) here"),
            TextSpan::new("code ![x](y)", SpanKind::Code),
            TextSpan::plain(""),
        ];
        assert_eq!(split_images(input.clone()), input);
    }

    #[test]
    fn split_images_keeps_unmatched_text_in_order() {
        let text = "a ![x](1) b [c](2) ![y](3)";
        let out = split_images(vec![TextSpan::plain(text)]);
        let rejoined: String = out
            .iter()
            .filter(|s| s.url.is_none())
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(rejoined, "a  b [c](2) ");
    }

    #[test]
    fn unclosed_reference_is_plain_text() {
        let out = split_links(vec![TextSpan::plain("broken [link](nowhere")]);
        assert_eq!(out, vec![TextSpan::plain("broken [link](nowhere")]);
    }
}
