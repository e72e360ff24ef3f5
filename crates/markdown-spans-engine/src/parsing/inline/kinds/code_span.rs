/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": they are extracted first, so nothing inside
/// them is seen by the image, link, bold or italic stages.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
