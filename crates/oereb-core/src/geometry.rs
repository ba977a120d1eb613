use serde_json::{Value, json};

use crate::config::MapSize;
use crate::error::{Error, Result};

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type BBox = euclid::Box2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

/// A parcel or restriction geometry in the configured spatial reference
/// system.
///
/// Coordinates nest the way the federal extract schema embeds them:
/// a position is `[x, y]`, a line is a list of positions, a polygon is a
/// list of rings (outer ring first, holes after).
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(Vec<Point>),
    Polygon(Vec<Vec<Point>>),
    MultiPolygon(Vec<Vec<Vec<Point>>>),
}

impl Geometry {
    /// Axis-aligned bounds, `None` for a geometry without positions.
    pub fn bounds(&self) -> Option<BBox> {
        let mut positions = self.positions();
        let first = positions.next()?;
        let mut bounds = BBox::new(first, first);
        for position in positions {
            bounds.min.x = bounds.min.x.min(position.x);
            bounds.min.y = bounds.min.y.min(position.y);
            bounds.max.x = bounds.max.x.max(position.x);
            bounds.max.y = bounds.max.y.max(position.y);
        }
        Some(bounds)
    }

    /// Native nested-array coordinate representation.
    pub fn coordinates(&self) -> Value {
        match self {
            Self::Point(position) => coordinate(position),
            Self::LineString(line) => line_coordinates(line),
            Self::Polygon(rings) => polygon_coordinates(rings),
            Self::MultiPolygon(polygons) => {
                Value::Array(polygons.iter().map(|rings| polygon_coordinates(rings)).collect())
            }
        }
    }

    fn positions(&self) -> Box<dyn Iterator<Item = Point> + '_> {
        match self {
            Self::Point(position) => Box::new(std::iter::once(*position)),
            Self::LineString(line) => Box::new(line.iter().copied()),
            Self::Polygon(rings) => Box::new(rings.iter().flatten().copied()),
            Self::MultiPolygon(polygons) => {
                Box::new(polygons.iter().flatten().flatten().copied())
            }
        }
    }
}

fn coordinate(position: &Point) -> Value {
    json!([position.x, position.y])
}

fn line_coordinates(line: &[Point]) -> Value {
    Value::Array(line.iter().map(coordinate).collect())
}

fn polygon_coordinates(rings: &[Vec<Point>]) -> Value {
    Value::Array(rings.iter().map(|ring| line_coordinates(ring)).collect())
}

/// Bounding box sent to the WMS server for a map of `map_size`.
///
/// Expands `bounds` by `buffer` percent per axis, then grows the narrow
/// axis symmetrically until the box matches the `map_size` aspect ratio.
/// The result contains the buffered bounds and is centered on them along
/// the adjusted axis.
pub fn print_bbox(bounds: BBox, map_size: MapSize, buffer: f64) -> Result<BBox> {
    let MapSize { width, height } = map_size;
    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
        return Err(Error::InvalidConfig {
            message: format!("map size must be positive, got {width}x{height}"),
        });
    }

    let width_buffer = (bounds.max.x - bounds.min.x) * buffer / 100.0;
    let height_buffer = (bounds.max.y - bounds.min.y) * buffer / 100.0;
    let mut print_bounds = BBox::new(
        point(bounds.min.x - width_buffer, bounds.min.y - height_buffer),
        point(bounds.max.x + width_buffer, bounds.max.y + height_buffer),
    );

    let object_width = print_bounds.max.x - print_bounds.min.x;
    let object_height = print_bounds.max.y - print_bounds.min.y;
    if object_width <= 0.0 && object_height <= 0.0 {
        return Err(Error::InvalidConfig {
            message: "geometry extent is degenerate, cannot fit a map scale to it".to_string(),
        });
    }

    let print_ratio = map_size.ratio();
    // A zero-height extent counts as wider-than-target; comparing through
    // the ratio would divide by zero.
    let wider_than_target = object_height <= 0.0 || object_width / object_height > print_ratio;
    if wider_than_target {
        let to_add = (object_width / print_ratio - object_height) / 2.0;
        print_bounds.min.y -= to_add;
        print_bounds.max.y += to_add;
    } else {
        let to_add = (object_height * print_ratio - object_width) / 2.0;
        print_bounds.min.x -= to_add;
        print_bounds.max.x += to_add;
    }
    Ok(print_bounds)
}
