use chrono::NaiveDate;

use crate::records::document::{DocumentRecord, filter_published};
use crate::records::office::OfficeRecord;

fn day(year: i32, month: u32, dayofmonth: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dayofmonth).unwrap()
}

fn document(title: &str, published_from: NaiveDate) -> DocumentRecord {
    DocumentRecord::new(title, OfficeRecord::new("Bundesamt"), published_from)
}

#[test]
fn a_document_is_published_from_its_start_date_on() {
    let record = document("Law", day(2017, 1, 1));
    assert!(!record.is_published(day(2016, 12, 31)));
    assert!(record.is_published(day(2017, 1, 1)));
    assert!(record.is_published(day(2017, 1, 2)));
}

#[test]
fn filter_published_recurses_into_references() {
    let mut law = document("Law", day(2016, 1, 1));
    law.references.push(document("Future amendment", day(2030, 1, 1)));
    law.references.push(document("Old article", day(2010, 6, 30)));

    let kept = filter_published(
        vec![law, document("Draft", day(2030, 1, 1))],
        day(2017, 2, 1),
    );

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].title, "Law");
    assert_eq!(kept[0].references.len(), 1);
    assert_eq!(kept[0].references[0].title, "Old article");
}
