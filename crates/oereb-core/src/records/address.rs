/// Postal address of a real estate, used for address-based lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub street_name: String,
    pub zip_code: u32,
    pub number: String,
}

impl AddressRecord {
    pub fn new(street_name: impl Into<String>, zip_code: u32, number: impl Into<String>) -> Self {
        Self {
            street_name: street_name.into(),
            zip_code,
            number: number.into(),
        }
    }
}
