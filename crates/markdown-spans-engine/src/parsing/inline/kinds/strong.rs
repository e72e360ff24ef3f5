/// Bold (`**strong**`) inline type.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
}
