use super::{
    bracketed::{split_images, split_links},
    delimited::split_delimited,
    error::InlineError,
    kinds::{CodeSpan, Emphasis, Strong},
    types::{SpanKind, TextSpan},
};

/// One transformation of the span sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Split on a literal delimiter pair into spans of `kind`.
    Delimited {
        delimiter: &'static str,
        kind: SpanKind,
    },
    Images,
    Links,
}

/// The stages [`parse_inline`] runs, in order.
///
/// The order carries meaning:
/// - code first, so backtick content is never seen by any later stage
/// - images before links, so `![a](b)` never becomes `!` + a link
/// - bold before italic, so `**` is consumed whole before single `*`s are
///   looked for among the leftovers
pub const PIPELINE: [Stage; 5] = [
    Stage::Delimited {
        delimiter: CodeSpan::TICK,
        kind: SpanKind::Code,
    },
    Stage::Images,
    Stage::Links,
    Stage::Delimited {
        delimiter: Strong::DELIM,
        kind: SpanKind::Bold,
    },
    Stage::Delimited {
        delimiter: Emphasis::DELIM,
        kind: SpanKind::Italic,
    },
];

impl Stage {
    /// Runs this stage over `spans`, producing the next sequence.
    ///
    /// # Errors
    /// Only delimited stages can fail, with
    /// [`InlineError::UnmatchedDelimiter`].
    pub fn apply(self, spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, InlineError> {
        match self {
            Stage::Delimited { delimiter, kind } => split_delimited(spans, delimiter, kind),
            Stage::Images => Ok(split_images(spans)),
            Stage::Links => Ok(split_links(spans)),
        }
    }
}

/// Parses inline markdown into an ordered sequence of [`TextSpan`]s.
///
/// Starts from one plain span holding all of `text` and folds it through
/// [`PIPELINE`]. Styling does not nest: in `**a *b* c**` the inner
/// asterisks stay part of the bold text.
///
/// # Errors
/// [`InlineError::UnmatchedDelimiter`] for a backtick, `**` or `*` without a
/// partner. Unclosed links and images are just text.
pub fn parse_inline(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    log::debug!("parsing inline text ({} bytes)", text.len());

    let spans = PIPELINE
        .iter()
        .try_fold(vec![TextSpan::plain(text)], |spans, stage| {
            let next = stage.apply(spans)?;
            log::trace!("{stage:?} -> {} spans", next.len());
            Ok::<_, InlineError>(next)
        })?;

    log::debug!("parsed {} inline spans", spans.len());
    Ok(spans)
}
