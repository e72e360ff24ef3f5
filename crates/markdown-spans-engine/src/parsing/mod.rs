pub mod inline;

use crate::{
    Error,
    html::{HtmlNode, span_to_node},
};

use inline::{InlineError, parse_inline};

/// Parses `text` and maps every span to its leaf node.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, InlineError> {
    Ok(parse_inline(text)?.iter().map(span_to_node).collect())
}

/// Wraps the inline nodes of `text` in a parent node with `tag`, e.g. `p`.
pub fn paragraph(text: &str, tag: &str) -> Result<HtmlNode, InlineError> {
    Ok(HtmlNode::parent(tag, text_to_children(text)?))
}

/// Renders `text` as inline HTML with no wrapping element.
pub fn inline_to_html(text: &str) -> Result<String, Error> {
    let mut out = String::new();
    for node in text_to_children(text)? {
        out.push_str(&node.render()?);
    }
    Ok(out)
}

/// Renders `text` as one block: wrapped in `tag`, or inline when `tag` is
/// empty.
pub fn block_to_html(text: &str, tag: &str) -> Result<String, Error> {
    if tag.is_empty() {
        return inline_to_html(text);
    }
    Ok(paragraph(text, tag)?.render()?)
}
