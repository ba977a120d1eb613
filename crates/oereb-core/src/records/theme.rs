use serde_json::{Value, json};

/// A restriction theme (topic) from the federal theme catalogue.
///
/// Themes are shared: many legend entries may reference the same theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRecord {
    pub code: String,
    pub text: String,
}

impl ThemeRecord {
    pub fn new(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            text: text.into(),
        }
    }

    pub fn to_extract(&self) -> Value {
        json!({
            "code": self.code,
            "text": self.text,
        })
    }
}
