use chrono::NaiveDateTime;

use super::image::ImageRecord;
use super::office::OfficeRecord;
use super::real_estate::RealEstateRecord;
use super::theme::ThemeRecord;

/// Title/content pair for the liability disclaimer section of an extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionOfLiabilityRecord {
    pub title: String,
    pub content: String,
}

impl ExclusionOfLiabilityRecord {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Title/content pair for the glossary section of an extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryRecord {
    pub title: String,
    pub content: String,
}

impl GlossaryRecord {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The fully assembled extract for one real estate.
///
/// Built by the extract assembly (readers, theme classification, WMS
/// hydration) and handed to a renderer read-only.
#[derive(Debug, Clone)]
pub struct ExtractRecord {
    pub creation_date: NaiveDateTime,
    pub logo_plr_cadastre: ImageRecord,
    pub federal_logo: ImageRecord,
    pub cantonal_logo: ImageRecord,
    pub municipality_logo: ImageRecord,
    pub extract_identifier: String,
    /// Description of the data basis the extract was created from.
    pub base_data: String,
    pub plr_cadastre_authority: OfficeRecord,
    pub real_estate: RealEstateRecord,
    pub electronic_signature: Option<String>,
    pub qr_code: Option<String>,
    pub general_information: Option<String>,
    pub exclusions_of_liability: Vec<ExclusionOfLiabilityRecord>,
    pub glossaries: Vec<GlossaryRecord>,
    /// Theme classification, filled by the assembly step.
    pub concerned_themes: Vec<ThemeRecord>,
    pub not_concerned_themes: Vec<ThemeRecord>,
    pub themes_without_data: Vec<ThemeRecord>,
}

impl ExtractRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        creation_date: NaiveDateTime,
        logo_plr_cadastre: ImageRecord,
        federal_logo: ImageRecord,
        cantonal_logo: ImageRecord,
        municipality_logo: ImageRecord,
        extract_identifier: impl Into<String>,
        base_data: impl Into<String>,
        plr_cadastre_authority: OfficeRecord,
        real_estate: RealEstateRecord,
    ) -> Self {
        Self {
            creation_date,
            logo_plr_cadastre,
            federal_logo,
            cantonal_logo,
            municipality_logo,
            extract_identifier: extract_identifier.into(),
            base_data: base_data.into(),
            plr_cadastre_authority,
            real_estate,
            electronic_signature: None,
            qr_code: None,
            general_information: None,
            exclusions_of_liability: Vec::new(),
            glossaries: Vec::new(),
            concerned_themes: Vec::new(),
            not_concerned_themes: Vec::new(),
            themes_without_data: Vec::new(),
        }
    }
}
