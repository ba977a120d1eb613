use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// An opaque binary payload: a logo, a legend symbol or a downloaded map
/// image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    content: Vec<u8>,
}

impl ImageRecord {
    pub fn new(content: Vec<u8>) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Embeddable text representation (standard base64 with padding).
    pub fn encode(&self) -> String {
        STANDARD.encode(&self.content)
    }
}
