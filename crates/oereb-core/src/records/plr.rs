use std::sync::Arc;

use super::document::DocumentRecord;
use super::image::ImageRecord;
use super::view_service::ViewServiceRecord;

/// One public-law restriction affecting a real estate.
#[derive(Debug, Clone)]
pub struct PlrRecord {
    pub content: String,
    pub topic: String,
    pub legal_state: String,
    /// Affected area in square meters.
    pub area: f64,
    pub symbol: ImageRecord,
    pub subtopic: Option<String>,
    pub additional_topic: Option<String>,
    pub type_code: Option<String>,
    pub type_code_list: Option<String>,
    pub part_in_percent: Option<f64>,
    /// The map service picturing this restriction. Shared with the other
    /// restrictions of the same theme.
    pub view_service: Arc<ViewServiceRecord>,
    pub documents: Vec<DocumentRecord>,
}

impl PlrRecord {
    pub fn new(
        content: impl Into<String>,
        topic: impl Into<String>,
        legal_state: impl Into<String>,
        area: f64,
        symbol: ImageRecord,
        view_service: Arc<ViewServiceRecord>,
    ) -> Self {
        Self {
            content: content.into(),
            topic: topic.into(),
            legal_state: legal_state.into(),
            area,
            symbol,
            subtopic: None,
            additional_topic: None,
            type_code: None,
            type_code_list: None,
            part_in_percent: None,
            view_service,
            documents: Vec::new(),
        }
    }
}
