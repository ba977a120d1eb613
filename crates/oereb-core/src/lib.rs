#![forbid(unsafe_code)]

//! Record model and map-service plumbing for PLR cadastre extracts.
//!
//! Design goals:
//! - the federal extract data model as plain, immutable record types
//! - deterministic, testable exports (the embedded JSON shapes are pinned
//!   by the federal extract schema)
//! - no hidden globals: print and CRS configuration is threaded in
//!   explicitly by the caller

pub mod config;
pub mod error;
pub mod geometry;
pub mod records;
pub mod urls;

pub use config::{Config, MapSize, PrintConfig};
pub use error::{Error, Result};
pub use geometry::{BBox, Geometry, Point, print_bbox};
pub use records::address::AddressRecord;
pub use records::document::{DocumentRecord, filter_published};
pub use records::extract::{ExclusionOfLiabilityRecord, ExtractRecord, GlossaryRecord};
pub use records::image::ImageRecord;
pub use records::office::OfficeRecord;
pub use records::plr::PlrRecord;
pub use records::real_estate::RealEstateRecord;
pub use records::theme::ThemeRecord;
pub use records::view_service::{LegendEntryRecord, ViewServiceRecord};

#[cfg(test)]
mod tests;
