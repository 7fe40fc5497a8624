/// Bracketed references: `[text](url)` links and `![alt](url)` images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Image,
    Link,
}

impl Reference {
    pub const BANG: u8 = b'!';
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    /// Bytes that open the reference.
    pub const fn opener(self) -> &'static [u8] {
        match self {
            Reference::Image => b"![",
            Reference::Link => b"[",
        }
    }
}
