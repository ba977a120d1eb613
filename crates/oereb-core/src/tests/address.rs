use crate::records::address::AddressRecord;

#[test]
fn address_construction_keeps_all_fields() {
    let address = AddressRecord::new("Mühlemattstrasse", 4410, "36");
    assert_eq!(address.street_name, "Mühlemattstrasse");
    assert_eq!(address.zip_code, 4410);
    assert_eq!(address.number, "36");
}
