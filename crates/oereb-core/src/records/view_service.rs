use std::io::Read as _;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};
use tracing::error;

use crate::config::PrintConfig;
use crate::error::{Error, Result};
use crate::geometry::print_bbox;
use crate::urls::{add_url_params, uri_validator};

use super::image::ImageRecord;
use super::real_estate::RealEstateRecord;
use super::theme::ThemeRecord;

const DOWNLOAD_FAILED: &str = "Image for WMS couldn't be retrieved.";

/// One legend symbol with its classification, shown alongside the map
/// image of a view service.
#[derive(Debug, Clone)]
pub struct LegendEntryRecord {
    pub symbol: ImageRecord,
    pub legend_text: String,
    /// Class of the legend entry, matching the restriction type codes.
    pub type_code: String,
    /// URL of the type-code catalogue this entry's code belongs to.
    pub type_code_list: String,
    pub theme: Arc<ThemeRecord>,
    pub sub_theme: Option<String>,
    pub additional_theme: Option<String>,
}

impl LegendEntryRecord {
    pub fn new(
        symbol: ImageRecord,
        legend_text: impl Into<String>,
        type_code: impl Into<String>,
        type_code_list: impl Into<String>,
        theme: Arc<ThemeRecord>,
    ) -> Self {
        Self {
            symbol,
            legend_text: legend_text.into(),
            type_code: type_code.into(),
            type_code_list: type_code_list.into(),
            theme,
            sub_theme: None,
            additional_theme: None,
        }
    }

    /// Export for embedding in an extract: every non-empty own field,
    /// plus always the theme's export.
    pub fn to_extract(&self) -> Value {
        let mut entry = Map::new();
        if !self.symbol.is_empty() {
            entry.insert("symbol".to_string(), Value::String(self.symbol.encode()));
        }
        insert_non_empty(&mut entry, "legend_text", &self.legend_text);
        insert_non_empty(&mut entry, "type_code", &self.type_code);
        insert_non_empty(&mut entry, "type_code_list", &self.type_code_list);
        insert_non_empty(&mut entry, "sub_theme", self.sub_theme.as_deref().unwrap_or(""));
        insert_non_empty(
            &mut entry,
            "additional_theme",
            self.additional_theme.as_deref().unwrap_or(""),
        );
        entry.insert("theme".to_string(), self.theme.to_extract());
        Value::Object(entry)
    }
}

/// WMS endpoint and legend used to picture one restriction theme on the
/// extract.
#[derive(Debug, Clone)]
pub struct ViewServiceRecord {
    /// URL of the map service (WMS GetMap, without the BBOX parameter).
    pub link_wms: String,
    /// URL of the legend service (WMS GetLegendGraphic).
    pub legend_web: String,
    pub legends: Vec<LegendEntryRecord>,
    /// Map image resulting from calling the WMS link. Absent until
    /// [`Self::download_wms_content`] succeeds, never cleared afterwards.
    image: Option<ImageRecord>,
}

impl ViewServiceRecord {
    pub fn new(
        link_wms: impl Into<String>,
        legend_web: impl Into<String>,
        legends: Vec<LegendEntryRecord>,
    ) -> Self {
        Self {
            link_wms: link_wms.into(),
            legend_web: legend_web.into(),
            legends,
            image: None,
        }
    }

    pub fn image(&self) -> Option<&ImageRecord> {
        self.image.as_ref()
    }

    /// Export for embedding in an extract. With `type_code` given, the
    /// legend list is narrowed to entries of that class.
    pub fn to_extract(&self, type_code: Option<&str>) -> Value {
        let mut extract = Map::new();
        insert_non_empty(&mut extract, "link_wms", &self.link_wms);
        insert_non_empty(&mut extract, "legend_web", &self.legend_web);
        if !self.legends.is_empty() {
            let legends: Vec<Value> = self
                .legends
                .iter()
                .filter(|legend| type_code.is_none_or(|code| legend.type_code == code))
                .map(LegendEntryRecord::to_extract)
                .collect();
            extract.insert("legends".to_string(), Value::Array(legends));
        }
        Value::Object(extract)
    }

    /// The WMS request URL for a map of the given real estate.
    ///
    /// The estate must carry a limit geometry; asking for a map of an
    /// estate without one is a caller bug.
    pub fn get_full_wms_url(
        &self,
        real_estate: &RealEstateRecord,
        print: &PrintConfig,
    ) -> Result<String> {
        let limit = real_estate
            .limit
            .as_ref()
            .expect("real estate carries no limit geometry");
        let bounds = limit.bounds().expect("limit geometry has no positions");
        let bbox = print_bbox(bounds, print.map_size, print.buffer)?;
        let bbox = format!("{},{},{},{}", bbox.min.x, bbox.min.y, bbox.max.x, bbox.max.y);
        add_url_params(&self.link_wms, &[("BBOX", bbox.as_str())])
    }

    /// Downloads the map image behind `link_wms`.
    ///
    /// On HTTP 200 the response body becomes [`Self::image`]; any other
    /// status fails with [`Error::RemoteLookup`] carrying the URL and the
    /// response body. An invalid URL fails before any network call.
    /// `timeout` of `None` keeps the transport default.
    // TODO: check for an image in the response rather than only code 200.
    pub fn download_wms_content(&mut self, timeout: Option<Duration>) -> Result<()> {
        if !uri_validator(&self.link_wms) {
            let detail = format!("URL seems to be not valid. URL was: {}", self.link_wms);
            error!("{DOWNLOAD_FAILED}");
            error!("{detail}");
            return Err(Error::InvalidUrl {
                url: self.link_wms.clone(),
            });
        }

        let mut request = ureq::get(&self.link_wms);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        match request.call() {
            Ok(response) if response.status() == 200 => {
                let mut content = Vec::new();
                response
                    .into_reader()
                    .read_to_end(&mut content)
                    .map_err(|err| self.transport_failure(Box::new(err)))?;
                self.image = Some(ImageRecord::new(content));
                Ok(())
            }
            Ok(response) => Err(self.remote_lookup_failure(response)),
            Err(ureq::Error::Status(_, response)) => Err(self.remote_lookup_failure(response)),
            Err(err) => Err(self.transport_failure(Box::new(err))),
        }
    }

    fn remote_lookup_failure(&self, response: ureq::Response) -> Error {
        let body = response.into_string().unwrap_or_default();
        let detail = format!(
            "The image could not be downloaded. URL was: {}, Response was {body}",
            self.link_wms
        );
        error!("{DOWNLOAD_FAILED}");
        error!("{detail}");
        Error::RemoteLookup {
            url: self.link_wms.clone(),
            body,
        }
    }

    fn transport_failure(&self, source: Box<dyn std::error::Error + Send + Sync>) -> Error {
        let detail = format!("WMS request to {} failed: {source}", self.link_wms);
        error!("{DOWNLOAD_FAILED}");
        error!("{detail}");
        Error::Transport {
            url: self.link_wms.clone(),
            source,
        }
    }
}

fn insert_non_empty(map: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
}
