//! The geometry value model: a small closed tagged union of shapes, each
//! carrying its own `has_z` flag and a cached axis-aligned bounding box.
//!
//! Geometries are value-owned results of a single decode call; they never
//! alias the source blob.

/// A single coordinate, 2D or 3D depending on the owning geometry's `has_z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coordinate {
    pub fn xy(x: f64, y: f64) -> Self {
        Coordinate { x, y, z: None }
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Coordinate {
            x,
            y,
            z: Some(z),
        }
    }
}

/// Axis-aligned bounding box over a geometry's decoded real-valued
/// coordinates. Deliberately *not* derived from the blob's own bounding-box
/// varints, which are consumed but never trusted for correctness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub min_z: Option<f64>,
    pub max_z: Option<f64>,
}

impl BoundingBox {
    /// Computes a bounding box over a flat slice of coordinates.
    ///
    /// Returns `None` for an empty slice — an empty geometry has no bounds.
    pub fn from_coordinates(coords: &[Coordinate]) -> Option<Self> {
        let first = coords.first()?;
        let mut bbox = BoundingBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
            min_z: first.z,
            max_z: first.z,
        };
        for c in &coords[1..] {
            bbox.min_x = bbox.min_x.min(c.x);
            bbox.max_x = bbox.max_x.max(c.x);
            bbox.min_y = bbox.min_y.min(c.y);
            bbox.max_y = bbox.max_y.max(c.y);
            bbox.min_z = match (bbox.min_z, c.z) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, None) => a,
                (None, b) => b,
            };
            bbox.max_z = match (bbox.max_z, c.z) {
                (Some(a), Some(b)) => Some(a.max(b)),
                (a, None) => a,
                (None, b) => b,
            };
        }
        Some(bbox)
    }

    fn empty() -> Self {
        BoundingBox {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
            min_z: None,
            max_z: None,
        }
    }

    fn union_all<'a>(boxes: impl Iterator<Item = &'a BoundingBox>) -> Option<Self> {
        boxes.copied().reduce(|a, b| BoundingBox {
            min_x: a.min_x.min(b.min_x),
            min_y: a.min_y.min(b.min_y),
            max_x: a.max_x.max(b.max_x),
            max_y: a.max_y.max(b.max_y),
            min_z: match (a.min_z, b.min_z) {
                (Some(x), Some(y)) => Some(x.min(y)),
                (x, None) => x,
                (None, y) => y,
            },
            max_z: match (a.max_z, b.max_z) {
                (Some(x), Some(y)) => Some(x.max(y)),
                (x, None) => x,
                (None, y) => y,
            },
        })
    }
}

/// A single point.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub coordinate: Coordinate,
    pub has_z: bool,
    pub bounds: BoundingBox,
}

impl Point {
    pub fn new(coordinate: Coordinate, has_z: bool) -> Self {
        let bounds = BoundingBox::from_coordinates(std::slice::from_ref(&coordinate))
            .unwrap_or_else(BoundingBox::empty);
        Point {
            coordinate,
            has_z,
            bounds,
        }
    }
}

/// An ordered sequence of points forming one line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    pub points: Vec<Coordinate>,
    pub has_z: bool,
    pub bounds: BoundingBox,
}

impl LineString {
    pub fn new(points: Vec<Coordinate>, has_z: bool) -> Self {
        let bounds = BoundingBox::from_coordinates(&points).unwrap_or_else(BoundingBox::empty);
        LineString {
            points,
            has_z,
            bounds,
        }
    }
}

/// A polygon: one exterior ring followed by zero or more interior (hole) rings.
/// Each ring is an ordered sequence of coordinates; by convention its first
/// point equals its last.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub rings: Vec<Vec<Coordinate>>,
    pub has_z: bool,
    pub bounds: BoundingBox,
}

impl Polygon {
    pub fn new(rings: Vec<Vec<Coordinate>>, has_z: bool) -> Self {
        let all_points: Vec<Coordinate> = rings.iter().flatten().copied().collect();
        let bounds = BoundingBox::from_coordinates(&all_points).unwrap_or_else(BoundingBox::empty);
        Polygon {
            rings,
            has_z,
            bounds,
        }
    }

    pub fn exterior(&self) -> Option<&[Coordinate]> {
        self.rings.first().map(Vec::as_slice)
    }

    pub fn interiors(&self) -> &[Vec<Coordinate>] {
        self.rings.get(1..).unwrap_or(&[])
    }
}

/// An order-preserving set of points with no line or ring topology between them.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    pub points: Vec<Coordinate>,
    pub has_z: bool,
    pub bounds: BoundingBox,
}

impl MultiPoint {
    pub fn new(points: Vec<Coordinate>, has_z: bool) -> Self {
        let bounds = BoundingBox::from_coordinates(&points).unwrap_or_else(BoundingBox::empty);
        MultiPoint {
            points,
            has_z,
            bounds,
        }
    }
}

/// An ordered sequence of `LineString`s sharing no implied topology.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    pub lines: Vec<LineString>,
    pub has_z: bool,
    pub bounds: BoundingBox,
}

impl MultiLineString {
    pub fn new(lines: Vec<LineString>, has_z: bool) -> Self {
        let bounds = BoundingBox::union_all(lines.iter().map(|l| &l.bounds))
            .unwrap_or_else(BoundingBox::empty);
        MultiLineString {
            lines,
            has_z,
            bounds,
        }
    }
}

/// An ordered sequence of `Polygon`s.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    pub polygons: Vec<Polygon>,
    pub has_z: bool,
    pub bounds: BoundingBox,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>, has_z: bool) -> Self {
        let bounds = BoundingBox::union_all(polygons.iter().map(|p| &p.bounds))
            .unwrap_or_else(BoundingBox::empty);
        MultiPolygon {
            polygons,
            has_z,
            bounds,
        }
    }
}

/// A decoded geometry value: a small closed union dispatched on by external
/// exporters (WKT/WKB/GeoJSON serializers), which are out of scope here.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    /// Whether this geometry carries Z values.
    pub fn has_z(&self) -> bool {
        match self {
            Geometry::Point(g) => g.has_z,
            Geometry::LineString(g) => g.has_z,
            Geometry::Polygon(g) => g.has_z,
            Geometry::MultiPoint(g) => g.has_z,
            Geometry::MultiLineString(g) => g.has_z,
            Geometry::MultiPolygon(g) => g.has_z,
        }
    }

    /// The cached axis-aligned bounding box.
    pub fn bounds(&self) -> BoundingBox {
        match self {
            Geometry::Point(g) => g.bounds,
            Geometry::LineString(g) => g.bounds,
            Geometry::Polygon(g) => g.bounds,
            Geometry::MultiPoint(g) => g.bounds,
            Geometry::MultiLineString(g) => g.bounds,
            Geometry::MultiPolygon(g) => g.bounds,
        }
    }
}
