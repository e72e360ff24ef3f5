use super::{
    cursor::Cursor,
    error::InlineError,
    types::{SpanKind, TextSpan},
};

/// Splits every plain span on a delimiter pair, turning delimited content
/// into spans of `kind`.
///
/// Non-plain spans are passed through untouched. Pairs are matched greedily
/// left to right with a literal substring search, so `**a****b**` gives two
/// bold spans and nothing in between. The content of a pair may be empty.
///
/// # Errors
/// [`InlineError::UnmatchedDelimiter`] if an opening delimiter has no
/// closing partner later in the same span.
pub fn split_delimited(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, InlineError> {
    // An empty delimiter matches everywhere and would never advance.
    if delimiter.is_empty() {
        return Ok(spans);
    }

    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        if span.text.is_empty() {
            out.push(span);
            continue;
        }
        split_one(&span, delimiter, kind, &mut out)?;
    }

    Ok(out)
}

fn split_one(
    span: &TextSpan,
    delimiter: &str,
    kind: SpanKind,
    out: &mut Vec<TextSpan>,
) -> Result<(), InlineError> {
    let piece = |text: &str, kind: SpanKind| TextSpan {
        text: text.to_string(),
        kind,
        url: span.url.clone(),
    };

    let mut cur = Cursor::new(&span.text);
    while !cur.eof() {
        let Some(open) = cur.find(delimiter) else {
            out.push(piece(cur.rest(), SpanKind::Plain));
            break;
        };
        if open > cur.i {
            out.push(piece(cur.up_to(open), SpanKind::Plain));
        }

        cur.seek(open);
        cur.bump_n(delimiter.len());
        let Some(close) = cur.find(delimiter) else {
            return Err(InlineError::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        };
        out.push(piece(cur.up_to(close), kind));

        cur.seek(close);
        cur.bump_n(delimiter.len());
    }

    Ok(())
}
