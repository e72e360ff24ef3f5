use crate::parsing::inline::{SpanKind, TextSpan};

use super::{Attributes, HtmlNode};

/// Maps one span to the leaf node that renders it.
///
/// | kind   | tag    | value | attributes             |
/// |--------|--------|-------|------------------------|
/// | plain  | -      | text  | -                      |
/// | bold   | `b`    | text  | -                      |
/// | italic | `i`    | text  | -                      |
/// | code   | `code` | text  | -                      |
/// | link   | `a`    | text  | `href`                 |
/// | image  | `img`  | `""`  | `src`, `alt`           |
///
/// Links and images without a URL get no attributes.
pub fn span_to_node(span: &TextSpan) -> HtmlNode {
    let text = span.text.clone();
    match span.kind {
        SpanKind::Plain => HtmlNode::text(text),
        SpanKind::Bold => HtmlNode::leaf("b", text),
        SpanKind::Italic => HtmlNode::leaf("i", text),
        SpanKind::Code => HtmlNode::leaf("code", text),
        SpanKind::Link => {
            let node = HtmlNode::leaf("a", text);
            match &span.url {
                Some(url) => node.with_attributes(Attributes::new().with("href", url)),
                None => node,
            }
        }
        SpanKind::Image => {
            let node = HtmlNode::leaf("img", "");
            match &span.url {
                Some(url) => node.with_attributes(
                    Attributes::new().with("src", url).with("alt", text),
                ),
                None => node,
            }
        }
    }
}

impl From<&TextSpan> for HtmlNode {
    fn from(span: &TextSpan) -> Self {
        span_to_node(span)
    }
}
