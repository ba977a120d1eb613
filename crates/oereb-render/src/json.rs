use oereb_core::records::extract::ExtractRecord;
use oereb_core::records::office::OfficeRecord;
use oereb_core::records::plr::PlrRecord;
use oereb_core::records::real_estate::RealEstateRecord;
use oereb_core::{Config, Geometry};
use serde_json::{Map, Value, json};

use crate::ExtractParams;
use crate::base::date_time;

/// Serializes extract records into the federal JSON extract schema.
#[derive(Debug, Clone)]
pub struct JsonRenderer {
    crs: String,
}

impl JsonRenderer {
    pub fn new(config: &Config) -> Self {
        Self { crs: config.crs() }
    }

    /// Renders one extract.
    ///
    /// Pure transformation: the same graph and parameters always produce
    /// the same document.
    pub fn render(&self, extract: &ExtractRecord, params: &ExtractParams) -> Value {
        let mut document = Map::new();
        document.insert(
            "CreationDate".to_string(),
            Value::String(date_time(&extract.creation_date)),
        );
        // Theme classification is not rendered yet.
        document.insert("ConcernedTheme".to_string(), json!([]));
        document.insert("NotConcernedTheme".to_string(), json!([]));
        document.insert("ThemeWithoutData".to_string(), json!([]));
        document.insert(
            "isReduced".to_string(),
            Value::Bool(params.flavour.is_reduced()),
        );
        insert_string(
            &mut document,
            "LogoPLRCadastre",
            &extract.logo_plr_cadastre.encode(),
        );
        insert_string(&mut document, "FederalLogo", &extract.federal_logo.encode());
        insert_string(&mut document, "CantonalLogo", &extract.cantonal_logo.encode());
        insert_string(
            &mut document,
            "MunicipalityLogo",
            &extract.municipality_logo.encode(),
        );
        insert_string(&mut document, "ExtractIdentifier", &extract.extract_identifier);
        insert_string(&mut document, "BaseData", &extract.base_data);
        document.insert(
            "PLRCadastreAuthority".to_string(),
            self.format_office(&extract.plr_cadastre_authority),
        );
        document.insert(
            "RealEstate".to_string(),
            self.format_real_estate(&extract.real_estate, params),
        );

        insert_if_non_empty(
            &mut document,
            "ElectronicSignature",
            extract.electronic_signature.as_deref(),
        );
        insert_if_non_empty(&mut document, "QRCode", extract.qr_code.as_deref());
        insert_if_non_empty(
            &mut document,
            "GeneralInformation",
            extract.general_information.as_deref(),
        );

        if !extract.exclusions_of_liability.is_empty() {
            let entries: Vec<Value> = extract
                .exclusions_of_liability
                .iter()
                .map(|entry| {
                    json!({
                        "Title": self.localized_text(&entry.title),
                        "Content": self.localized_text(&entry.content),
                    })
                })
                .collect();
            document.insert("ExclusionOfLiability".to_string(), Value::Array(entries));
        }
        if !extract.glossaries.is_empty() {
            let entries: Vec<Value> = extract
                .glossaries
                .iter()
                .map(|entry| {
                    json!({
                        "Title": self.localized_text(&entry.title),
                        "Content": self.localized_text(&entry.content),
                    })
                })
                .collect();
            document.insert("Glossary".to_string(), Value::Array(entries));
        }

        Value::Object(document)
    }

    pub fn format_real_estate(
        &self,
        real_estate: &RealEstateRecord,
        params: &ExtractParams,
    ) -> Value {
        let mut formatted = Map::new();
        insert_string(&mut formatted, "Type", &real_estate.kind);
        insert_string(&mut formatted, "Canton", &real_estate.canton);
        insert_string(&mut formatted, "Municipality", &real_estate.municipality);
        formatted.insert("FosNr".to_string(), json!(real_estate.fosnr));
        formatted.insert(
            "LandRegistryArea".to_string(),
            json!(real_estate.land_registry_area),
        );

        if params.geometry {
            if let Some(limit) = &real_estate.limit {
                formatted.insert("Limit".to_string(), self.format_geometry(limit));
            }
        }

        insert_if_non_empty(&mut formatted, "Number", real_estate.number.as_deref());
        insert_if_non_empty(&mut formatted, "IdentDN", real_estate.identdn.as_deref());
        insert_if_non_empty(&mut formatted, "EGRID", real_estate.egrid.as_deref());
        insert_if_non_empty(
            &mut formatted,
            "SubunitOfLandRegister",
            real_estate.subunit_of_land_register.as_deref(),
        );
        insert_if_non_empty(
            &mut formatted,
            "MetadataOfGeographicalBaseData",
            real_estate.metadata_of_geographical_base_data.as_deref(),
        );

        if !real_estate.public_law_restrictions.is_empty() {
            formatted.insert(
                "RestrictionOnLandownership".to_string(),
                self.format_plrs(&real_estate.public_law_restrictions),
            );
        }
        Value::Object(formatted)
    }

    pub fn format_plrs(&self, restrictions: &[PlrRecord]) -> Value {
        Value::Array(
            restrictions
                .iter()
                .map(|restriction| self.format_plr(restriction))
                .collect(),
        )
    }

    pub fn format_plr(&self, restriction: &PlrRecord) -> Value {
        let mut formatted = Map::new();
        formatted.insert(
            "Information".to_string(),
            self.localized_text(&restriction.content),
        );
        insert_string(&mut formatted, "Theme", &restriction.topic);
        insert_string(&mut formatted, "Lawstatus", &restriction.legal_state);
        formatted.insert("Area".to_string(), json!(restriction.area));
        insert_string(&mut formatted, "Symbol", &restriction.symbol.encode());
        insert_if_non_empty(&mut formatted, "SubTheme", restriction.subtopic.as_deref());
        insert_if_non_empty(
            &mut formatted,
            "OtherTheme",
            restriction.additional_topic.as_deref(),
        );
        insert_if_non_empty(&mut formatted, "TypeCode", restriction.type_code.as_deref());
        insert_if_non_empty(
            &mut formatted,
            "TypeCodelist",
            restriction.type_code_list.as_deref(),
        );
        if let Some(part) = restriction.part_in_percent {
            formatted.insert("PartInPercent".to_string(), json!(part));
        }
        Value::Object(formatted)
    }

    pub fn format_office(&self, office: &OfficeRecord) -> Value {
        let mut formatted = Map::new();
        formatted.insert("Name".to_string(), self.localized_text(&office.name));
        insert_if_non_empty(&mut formatted, "OfficeAtWeb", office.office_at_web.as_deref());
        insert_if_non_empty(&mut formatted, "UID", office.uid.as_deref());
        insert_if_non_empty(&mut formatted, "Line1", office.line1.as_deref());
        insert_if_non_empty(&mut formatted, "Line2", office.line2.as_deref());
        insert_if_non_empty(&mut formatted, "Street", office.street.as_deref());
        insert_if_non_empty(&mut formatted, "Number", office.number.as_deref());
        if let Some(postal_code) = office.postal_code {
            formatted.insert("PostalCode".to_string(), json!(postal_code));
        }
        insert_if_non_empty(&mut formatted, "City", office.city.as_deref());
        Value::Object(formatted)
    }

    pub fn format_geometry(&self, geometry: &Geometry) -> Value {
        // Curved geometries would additionally need an ISO SQL/MM WKB
        // encoding; the geometry model carries none.
        json!({
            "coordinates": geometry.coordinates(),
            "crs": self.crs,
        })
    }

    /// Localized representation of a raw text value.
    // TODO: respect the requested language once the records carry
    // multilingual values; until then every text is emitted as German.
    pub fn localized_text(&self, value: &str) -> Value {
        json!([
            {
                "Language": "de",
                "Text": value,
            }
        ])
    }
}

fn insert_string(document: &mut Map<String, Value>, key: &str, value: &str) {
    document.insert(key.to_string(), Value::String(value.to_string()));
}

fn insert_if_non_empty(document: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            document.insert(key.to_string(), Value::String(value.to_string()));
        }
    }
}
