/// Image inline type: `![alt](src)`.
///
/// Neither part may contain its own bracket characters, so nested brackets,
/// parenthesized URLs and titles are not recognized.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";
}
