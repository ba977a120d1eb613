#![forbid(unsafe_code)]

//! Headless toolkit for PLR cadastre ("land registry") extracts.
//!
//! The extract record model, print configuration and WMS view service
//! live in [`oereb_core`] and are re-exported at the crate root.
//!
//! # Features
//!
//! - `render`: enable the federal-schema JSON renderer (`oereb::render`)

pub use oereb_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use oereb_render::base::date_time;
    pub use oereb_render::{ExtractParams, Flavour, JsonRenderer};
}
