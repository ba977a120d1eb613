/// An authority responsible for an extract or a restriction.
///
/// Only the name is guaranteed; address fields depend on what the
/// cantonal data provides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfficeRecord {
    pub name: String,
    pub uid: Option<String>,
    pub office_at_web: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub postal_code: Option<u32>,
    pub city: Option<String>,
}

impl OfficeRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
