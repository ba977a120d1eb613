use std::time::Duration;

use serde_json::Value;

use crate::error::{Error, Result};

/// Target size of the printed map image.
///
/// The unit (pixels, millimeters) is whatever the print template uses;
/// only the width/height ratio matters for bounding-box fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSize {
    pub width: f64,
    pub height: f64,
}

impl MapSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Print template settings consumed when composing WMS map requests.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintConfig {
    pub map_size: MapSize,
    /// Extra margin around the parcel geometry, as a percentage of its
    /// extent per axis.
    pub buffer: f64,
}

impl PrintConfig {
    pub fn new(map_size: MapSize, buffer: f64) -> Self {
        Self { map_size, buffer }
    }

    pub fn validate(&self) -> Result<()> {
        let MapSize { width, height } = self.map_size;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(Error::InvalidConfig {
                message: format!("map size must be positive, got {width}x{height}"),
            });
        }
        if !self.buffer.is_finite() {
            return Err(Error::InvalidConfig {
                message: format!("buffer must be a finite percentage, got {}", self.buffer),
            });
        }
        Ok(())
    }
}

/// Process-wide extract configuration.
///
/// Owned by the caller and threaded into the view service and the
/// renderer explicitly; nothing in this crate reads global state.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub print: PrintConfig,
    /// Spatial reference system identifier shared by all extract
    /// geometries.
    pub srid: u32,
    /// Language used when no explicit request language is given.
    pub default_language: String,
    /// Timeout applied to WMS image downloads. `None` keeps the
    /// transport default.
    pub wms_timeout: Option<Duration>,
}

impl Config {
    pub fn new(print: PrintConfig, srid: u32) -> Self {
        Self {
            print,
            srid,
            default_language: "de".to_string(),
            wms_timeout: None,
        }
    }

    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    pub fn with_wms_timeout(mut self, timeout: Duration) -> Self {
        self.wms_timeout = Some(timeout);
        self
    }

    /// Builds a configuration from a loaded settings document.
    ///
    /// Required keys: `print.map_size` (a `[width, height]` pair),
    /// `print.buffer` and `srid`. Optional keys: `default_language`
    /// (defaults to `"de"`) and `wms_timeout_seconds`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map_size = parse_map_size(required(value, "print.map_size")?)?;
        let buffer = required(value, "print.buffer")?
            .as_f64()
            .ok_or_else(|| invalid("print.buffer must be a number"))?;
        let srid = required(value, "srid")?
            .as_u64()
            .and_then(|raw| u32::try_from(raw).ok())
            .ok_or_else(|| invalid("srid must be a positive integer"))?;

        let print = PrintConfig::new(map_size, buffer);
        print.validate()?;

        let default_language = match lookup(value, "default_language") {
            Some(raw) => raw
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid("default_language must be a string"))?,
            None => "de".to_string(),
        };
        let wms_timeout = match lookup(value, "wms_timeout_seconds") {
            Some(raw) => Some(
                raw.as_u64()
                    .map(Duration::from_secs)
                    .ok_or_else(|| invalid("wms_timeout_seconds must be a positive integer"))?,
            ),
            None => None,
        };

        Ok(Self {
            print,
            srid,
            default_language,
            wms_timeout,
        })
    }

    /// CRS label attached to every rendered geometry.
    pub fn crs(&self) -> String {
        format!("EPSG:{}", self.srid)
    }
}

fn lookup<'a>(value: &'a Value, dotted_path: &str) -> Option<&'a Value> {
    let mut cur = value;
    for segment in dotted_path.split('.') {
        cur = cur.as_object()?.get(segment)?;
    }
    Some(cur)
}

fn required<'a>(value: &'a Value, key: &'static str) -> Result<&'a Value> {
    lookup(value, key).ok_or(Error::MissingConfig { key })
}

fn invalid(message: &str) -> Error {
    Error::InvalidConfig {
        message: message.to_string(),
    }
}

fn parse_map_size(value: &Value) -> Result<MapSize> {
    let pair = value
        .as_array()
        .filter(|parts| parts.len() == 2)
        .ok_or_else(|| invalid("print.map_size must be a [width, height] pair"))?;
    let width = pair[0]
        .as_f64()
        .ok_or_else(|| invalid("print.map_size width must be a number"))?;
    let height = pair[1]
        .as_f64()
        .ok_or_else(|| invalid("print.map_size height must be a number"))?;
    Ok(MapSize::new(width, height))
}
