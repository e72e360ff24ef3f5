/// Link inline type: `[text](href)`.
///
/// The `regex` crate has no lookbehind, so the pattern also matches an
/// optional leading `BANG`; matches that captured it are images and are
/// skipped by the link scanner.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)";
    pub const BANG: &'static str = "!";
}
