/// Italic (`*emphasis*`) inline type.
///
/// Shares its character with [`super::Strong`], so it must only run once
/// every `**` pair has been consumed.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static str = "*";
}
