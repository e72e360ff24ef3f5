//! # markdown-spans-engine
//!
//! Turns inline markdown into typed text spans and renders them as HTML.
//!
//! ```
//! use markdown_spans_engine::{SpanKind, TextSpan, parse_inline, parsing::block_to_html};
//!
//! let spans = parse_inline("a `b` c").unwrap();
//! assert_eq!(spans[1], TextSpan::new("b", SpanKind::Code));
//!
//! let html = block_to_html("**bold** and [a link](https://www.boot.dev)", "p").unwrap();
//! assert_eq!(html, r#"<p><b>bold</b> and <a href="https://www.boot.dev">a link</a></p>"#);
//! ```

pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlNode, RenderError, span_to_node};
pub use parsing::inline::{
    InlineError, KindError, SpanKind, TextSpan, extract_images, extract_links, parse_inline,
    split_delimited, split_images, split_links,
};
pub use parsing::{block_to_html, inline_to_html, paragraph, text_to_children};

/// Any failure from parsing through to rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Kind(#[from] KindError),
}

/// Builds a single span from untyped parts and renders it.
///
/// # Errors
/// [`KindError`] when `kind` is absent or unknown.
pub fn render_span(text: &str, kind: Option<&str>, url: Option<&str>) -> Result<String, Error> {
    let span = TextSpan {
        text: text.to_string(),
        kind: SpanKind::parse(kind)?,
        url: url.map(str::to_string),
    };
    Ok(span_to_node(&span).render()?)
}
