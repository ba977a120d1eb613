use crate::geometry::Geometry;

use super::plr::PlrRecord;

/// The parcel an extract is issued for.
#[derive(Debug, Clone)]
pub struct RealEstateRecord {
    /// Kind of estate (land plot, distinct and permanent right, ...).
    pub kind: String,
    pub canton: String,
    pub municipality: String,
    /// Federal statistics office number of the municipality.
    pub fosnr: u32,
    /// Parcel area according to the land registry, in square meters.
    pub land_registry_area: f64,
    /// Parcel boundary in the configured spatial reference system. Must
    /// be present before a WMS map can be requested for this estate.
    pub limit: Option<Geometry>,
    pub number: Option<String>,
    pub identdn: Option<String>,
    pub egrid: Option<String>,
    pub subunit_of_land_register: Option<String>,
    /// URL of the metadata describing the geographical base data.
    pub metadata_of_geographical_base_data: Option<String>,
    pub public_law_restrictions: Vec<PlrRecord>,
}

impl RealEstateRecord {
    pub fn new(
        kind: impl Into<String>,
        canton: impl Into<String>,
        municipality: impl Into<String>,
        fosnr: u32,
        land_registry_area: f64,
    ) -> Self {
        Self {
            kind: kind.into(),
            canton: canton.into(),
            municipality: municipality.into(),
            fosnr,
            land_registry_area,
            limit: None,
            number: None,
            identdn: None,
            egrid: None,
            subunit_of_land_register: None,
            metadata_of_geographical_base_data: None,
            public_law_restrictions: Vec::new(),
        }
    }
}
