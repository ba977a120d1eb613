use chrono::NaiveDate;

use super::office::OfficeRecord;

/// A legal document backing a public-law restriction.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRecord {
    pub title: String,
    pub responsible_office: OfficeRecord,
    /// First day this document is in force.
    pub published_from: NaiveDate,
    pub text_at_web: Option<String>,
    /// Documents this one refers to (article and law hierarchy).
    pub references: Vec<DocumentRecord>,
}

impl DocumentRecord {
    pub fn new(
        title: impl Into<String>,
        responsible_office: OfficeRecord,
        published_from: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            responsible_office,
            published_from,
            text_at_web: None,
            references: Vec::new(),
        }
    }

    pub fn is_published(&self, today: NaiveDate) -> bool {
        self.published_from <= today
    }
}

/// Drops documents not yet in force, recursing into references.
pub fn filter_published(documents: Vec<DocumentRecord>, today: NaiveDate) -> Vec<DocumentRecord> {
    documents
        .into_iter()
        .filter(|document| document.is_published(today))
        .map(|mut document| {
            document.references = filter_published(std::mem::take(&mut document.references), today);
            document
        })
        .collect()
}
