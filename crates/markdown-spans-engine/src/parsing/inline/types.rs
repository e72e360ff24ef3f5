use std::fmt;
use std::str::FromStr;

/// The kind of an inline span.
///
/// The set is closed: every consumer matches exhaustively, so a new kind
/// cannot slip through the HTML mapping unnoticed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text outside any recognized construct.
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` `` - never re-scanned by later stages.
    Code,
    /// `[label](url)`
    Link,
    /// `![alt](url)`
    Image,
}

/// Failure to turn an untyped kind name into a [`SpanKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KindError {
    #[error("span has no kind")]
    MissingKind,
    #[error("invalid span kind: {0:?}")]
    UnsupportedKind(String),
}

impl SpanKind {
    pub const ALL: [SpanKind; 6] = [
        SpanKind::Plain,
        SpanKind::Bold,
        SpanKind::Italic,
        SpanKind::Code,
        SpanKind::Link,
        SpanKind::Image,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }

    /// Parses a kind that may be absent, e.g. an optional CLI argument.
    ///
    /// A missing or blank name is [`KindError::MissingKind`]; anything that
    /// is not a canonical name is [`KindError::UnsupportedKind`].
    pub fn parse(name: Option<&str>) -> Result<Self, KindError> {
        let name = match name.map(str::trim) {
            None | Some("") => return Err(KindError::MissingKind),
            Some(name) => name,
        };
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| KindError::UnsupportedKind(name.to_string()))
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

/// One classified fragment of inline text.
///
/// Spans are plain values. Pipeline stages consume a sequence of spans and
/// build a new one; nothing is edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    /// Destination for links and images. Carried along for other kinds
    /// but never rendered.
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn with_url(text: impl Into<String>, kind: SpanKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "TextSpan({:?}, {}, {:?})", self.text, self.kind, url),
            None => write!(f, "TextSpan({:?}, {}, None)", self.text, self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_compare_structurally() {
        let a = TextSpan::with_url("anchor", SpanKind::Link, "https://www.boot.dev");
        let b = TextSpan::with_url("anchor", SpanKind::Link, "https://www.boot.dev");
        assert_eq!(a, b);
        assert_ne!(a, TextSpan::new("anchor", SpanKind::Link));
        assert_ne!(a, TextSpan::with_url("anchor", SpanKind::Image, "https://www.boot.dev"));
    }

    #[test]
    fn url_defaults_to_none() {
        let span = TextSpan::plain("hello");
        assert!(span.url.is_none());
        assert!(span.is_plain());
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in SpanKind::ALL {
            assert_eq!(kind.as_str().parse::<SpanKind>(), Ok(kind));
        }
    }

    #[test]
    fn absent_kind_is_missing() {
        assert_eq!(SpanKind::parse(None), Err(KindError::MissingKind));
        assert_eq!(SpanKind::parse(Some("  ")), Err(KindError::MissingKind));
    }

    #[test]
    fn unknown_kind_is_unsupported() {
        assert_eq!(
            "underline".parse::<SpanKind>(),
            Err(KindError::UnsupportedKind("underline".to_string()))
        );
        assert_eq!(
            KindError::MissingKind.to_string(),
            "span has no kind",
            "missing and invalid kinds must be told apart"
        );
    }

    #[test]
    fn display_shows_all_fields() {
        let span = TextSpan::with_url("Goodbye", SpanKind::Italic, "u");
        assert_eq!(span.to_string(), r#"TextSpan("Goodbye", italic, "u")"#);
        assert_eq!(
            TextSpan::plain("x").to_string(),
            r#"TextSpan("x", plain, None)"#
        );
    }
}
