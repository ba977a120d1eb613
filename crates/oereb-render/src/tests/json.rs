use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use oereb_core::geometry::point;
use oereb_core::{
    Config, ExclusionOfLiabilityRecord, ExtractRecord, Geometry, GlossaryRecord, ImageRecord,
    MapSize, OfficeRecord, PlrRecord, PrintConfig, RealEstateRecord, ViewServiceRecord,
};
use serde_json::json;

use crate::{ExtractParams, Flavour, JsonRenderer};

fn renderer() -> JsonRenderer {
    let config = Config::new(PrintConfig::new(MapSize::new(493.0, 280.0), 10.0), 2056);
    JsonRenderer::new(&config)
}

fn creation_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 4, 10)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

fn minimal_extract() -> ExtractRecord {
    ExtractRecord::new(
        creation_date(),
        ImageRecord::new(b"logo1".to_vec()),
        ImageRecord::new(b"logo2".to_vec()),
        ImageRecord::new(b"logo3".to_vec()),
        ImageRecord::new(b"logo4".to_vec()),
        "CH123456789",
        "Data of the cantonal geoportal",
        OfficeRecord::new("PLR cadastre authority"),
        RealEstateRecord::new("RealEstate", "BL", "Liestal", 2829, 11395.0),
    )
}

fn restriction() -> PlrRecord {
    let view_service = Arc::new(ViewServiceRecord::new(
        "https://example.com/wms",
        "https://example.com/legend",
        Vec::new(),
    ));
    let mut restriction = PlrRecord::new(
        "Airport building lines",
        "MotorwaysBuildingLines",
        "inForce",
        348.0,
        ImageRecord::new(b"sym".to_vec()),
        view_service,
    );
    restriction.type_code = Some("5".to_string());
    restriction
}

#[test]
fn a_minimal_extract_renders_every_mandatory_field_and_nothing_else() {
    let document = renderer().render(&minimal_extract(), &ExtractParams::default());
    assert_eq!(
        document,
        json!({
            "CreationDate": "2017-04-10T10:30:00",
            "ConcernedTheme": [],
            "NotConcernedTheme": [],
            "ThemeWithoutData": [],
            "isReduced": false,
            "LogoPLRCadastre": "bG9nbzE=",
            "FederalLogo": "bG9nbzI=",
            "CantonalLogo": "bG9nbzM=",
            "MunicipalityLogo": "bG9nbzQ=",
            "ExtractIdentifier": "CH123456789",
            "BaseData": "Data of the cantonal geoportal",
            "PLRCadastreAuthority": {
                "Name": [{ "Language": "de", "Text": "PLR cadastre authority" }],
            },
            "RealEstate": {
                "Type": "RealEstate",
                "Canton": "BL",
                "Municipality": "Liestal",
                "FosNr": 2829,
                "LandRegistryArea": 11395.0,
            },
        })
    );
}

#[test]
fn the_document_keeps_the_schema_key_order() {
    let document = renderer().render(&minimal_extract(), &ExtractParams::default());
    let keys: Vec<&str> = document
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec![
            "CreationDate",
            "ConcernedTheme",
            "NotConcernedTheme",
            "ThemeWithoutData",
            "isReduced",
            "LogoPLRCadastre",
            "FederalLogo",
            "CantonalLogo",
            "MunicipalityLogo",
            "ExtractIdentifier",
            "BaseData",
            "PLRCadastreAuthority",
            "RealEstate",
        ]
    );
}

#[test]
fn rendering_is_idempotent() {
    let extract = minimal_extract();
    let renderer = renderer();
    let params = ExtractParams::default();
    assert_eq!(
        renderer.render(&extract, &params),
        renderer.render(&extract, &params)
    );
}

#[test]
fn the_reduced_flavour_sets_is_reduced() {
    let params = ExtractParams {
        flavour: Flavour::Reduced,
        ..Default::default()
    };
    let document = renderer().render(&minimal_extract(), &params);
    assert_eq!(document["isReduced"], json!(true));
}

#[test]
fn other_flavours_do_not_set_is_reduced() {
    for flavour in [Flavour::Full, Flavour::Signed, Flavour::Embeddable] {
        let params = ExtractParams {
            flavour,
            ..Default::default()
        };
        let document = renderer().render(&minimal_extract(), &params);
        assert_eq!(document["isReduced"], json!(false), "flavour {flavour:?}");
    }
}

#[test]
fn flavours_parse_from_their_url_path_forms() {
    assert_eq!("reduced".parse::<Flavour>(), Ok(Flavour::Reduced));
    assert_eq!(" FULL ".parse::<Flavour>(), Ok(Flavour::Full));
    assert!("unknown".parse::<Flavour>().is_err());
}

#[test]
fn an_office_with_only_a_name_renders_a_single_key() {
    let office = OfficeRecord::new("Bundesamt für Verkehr");
    assert_eq!(
        renderer().format_office(&office),
        json!({
            "Name": [{ "Language": "de", "Text": "Bundesamt für Verkehr" }],
        })
    );
}

#[test]
fn office_fields_are_emitted_when_present() {
    let mut office = OfficeRecord::new("Amt für Umwelt");
    office.uid = Some("CH-123.456.789".to_string());
    office.office_at_web = Some("https://example.com/office".to_string());
    office.street = Some("Hauptstrasse".to_string());
    office.number = Some("5".to_string());
    office.postal_code = Some(4410);
    office.city = Some("Liestal".to_string());

    let formatted = renderer().format_office(&office);

    assert_eq!(formatted["OfficeAtWeb"], "https://example.com/office");
    assert_eq!(formatted["UID"], "CH-123.456.789");
    assert_eq!(formatted["Street"], "Hauptstrasse");
    assert_eq!(formatted["Number"], "5");
    assert_eq!(formatted["PostalCode"], 4410);
    assert_eq!(formatted["City"], "Liestal");
    assert!(formatted.get("Line1").is_none());
    assert!(formatted.get("Line2").is_none());
}

#[test]
fn optional_extract_sections_appear_only_when_present() {
    let bare = renderer().render(&minimal_extract(), &ExtractParams::default());
    assert!(bare.get("ElectronicSignature").is_none());
    assert!(bare.get("QRCode").is_none());
    assert!(bare.get("GeneralInformation").is_none());
    assert!(bare.get("ExclusionOfLiability").is_none());
    assert!(bare.get("Glossary").is_none());

    let mut extract = minimal_extract();
    extract.electronic_signature = Some("signature".to_string());
    extract.qr_code = Some("qr".to_string());
    extract.general_information = Some("Generic legal hints.".to_string());
    extract
        .exclusions_of_liability
        .push(ExclusionOfLiabilityRecord::new("Liability", "No warranty."));
    extract
        .glossaries
        .push(GlossaryRecord::new("WMS", "Web Map Service"));

    let document = renderer().render(&extract, &ExtractParams::default());

    assert_eq!(document["ElectronicSignature"], "signature");
    assert_eq!(document["QRCode"], "qr");
    assert_eq!(document["GeneralInformation"], "Generic legal hints.");
    assert_eq!(
        document["ExclusionOfLiability"],
        json!([{
            "Title": [{ "Language": "de", "Text": "Liability" }],
            "Content": [{ "Language": "de", "Text": "No warranty." }],
        }])
    );
    assert_eq!(
        document["Glossary"],
        json!([{
            "Title": [{ "Language": "de", "Text": "WMS" }],
            "Content": [{ "Language": "de", "Text": "Web Map Service" }],
        }])
    );
}

#[test]
fn real_estate_optionals_follow_the_omission_rule() {
    let mut extract = minimal_extract();
    extract.real_estate.egrid = Some("CH987654321".to_string());
    extract.real_estate.number = Some("70".to_string());
    extract.real_estate.identdn = Some("BL0200002829".to_string());

    let document = renderer().render(&extract, &ExtractParams::default());
    let real_estate = &document["RealEstate"];

    assert_eq!(real_estate["EGRID"], "CH987654321");
    assert_eq!(real_estate["Number"], "70");
    assert_eq!(real_estate["IdentDN"], "BL0200002829");
    assert!(real_estate.get("SubunitOfLandRegister").is_none());
    assert!(real_estate.get("MetadataOfGeographicalBaseData").is_none());
    assert!(real_estate.get("RestrictionOnLandownership").is_none());
}

#[test]
fn the_limit_geometry_is_rendered_only_on_request() {
    let mut extract = minimal_extract();
    extract.real_estate.limit = Some(Geometry::Polygon(vec![vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 0.0),
    ]]));

    let without = renderer().render(&extract, &ExtractParams::default());
    assert!(without["RealEstate"].get("Limit").is_none());

    let params = ExtractParams {
        geometry: true,
        ..Default::default()
    };
    let with = renderer().render(&extract, &params);
    assert_eq!(
        with["RealEstate"]["Limit"],
        json!({
            "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 0.0]]],
            "crs": "EPSG:2056",
        })
    );
}

#[test]
fn restrictions_render_with_their_conditional_fields() {
    let mut extract = minimal_extract();
    extract.real_estate.public_law_restrictions.push(restriction());

    let document = renderer().render(&extract, &ExtractParams::default());

    assert_eq!(
        document["RealEstate"]["RestrictionOnLandownership"],
        json!([{
            "Information": [{ "Language": "de", "Text": "Airport building lines" }],
            "Theme": "MotorwaysBuildingLines",
            "Lawstatus": "inForce",
            "Area": 348.0,
            "Symbol": "c3lt",
            "TypeCode": "5",
        }])
    );
}

#[test]
fn a_restriction_with_every_optional_field_renders_them_all() {
    let mut restriction = restriction();
    restriction.subtopic = Some("Projected".to_string());
    restriction.additional_topic = Some("Noise".to_string());
    restriction.type_code_list = Some("https://example.com/typecodes".to_string());
    restriction.part_in_percent = Some(42.5);

    let formatted = renderer().format_plr(&restriction);

    assert_eq!(formatted["SubTheme"], "Projected");
    assert_eq!(formatted["OtherTheme"], "Noise");
    assert_eq!(formatted["TypeCodelist"], "https://example.com/typecodes");
    assert_eq!(formatted["PartInPercent"], 42.5);
}

#[test]
fn localized_text_is_hardcoded_to_german() {
    let params = ExtractParams {
        language: Some("fr".to_string()),
        ..Default::default()
    };
    let document = renderer().render(&minimal_extract(), &params);
    assert_eq!(
        document["PLRCadastreAuthority"]["Name"],
        json!([{ "Language": "de", "Text": "PLR cadastre authority" }])
    );
}
