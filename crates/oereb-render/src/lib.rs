#![forbid(unsafe_code)]

//! JSON renderer for PLR cadastre extracts.
//!
//! Produces the federal extract schema: PascalCase keys in the
//! schema-defined order, optional fields omitted (not defaulted) when
//! the source value is absent or empty.

use serde::{Deserialize, Serialize};

pub mod base;
mod json;

pub use json::JsonRenderer;

/// Rendering mode of an extract, selecting output completeness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavour {
    #[default]
    Full,
    Reduced,
    Signed,
    Embeddable,
}

impl Flavour {
    pub fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }
}

impl std::str::FromStr for Flavour {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "reduced" => Ok(Self::Reduced),
            "signed" => Ok(Self::Signed),
            "embeddable" => Ok(Self::Embeddable),
            _ => Err(()),
        }
    }
}

/// Per-request extract rendering parameters, validated by the web layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractParams {
    /// Requested output language. Localized texts are currently rendered
    /// in German only, see [`JsonRenderer::localized_text`].
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub flavour: Flavour,
    /// Whether the parcel limit geometry is included in the output.
    #[serde(default)]
    pub geometry: bool,
}

#[cfg(test)]
mod tests;
