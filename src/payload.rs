use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

/// A single sample on a 2D curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(into = "[f32; 2]")]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point2D> for [f32; 2] {
    fn from(point: Point2D) -> Self {
        [point.x, point.y]
    }
}

/// A single sample in 3D space
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(into = "[f32; 3]")]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance from the Z axis
    pub fn radial_distance(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl From<[f32; 3]> for Point3D {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3D> for [f32; 3] {
    fn from(point: Point3D) -> Self {
        [point.x, point.y, point.z]
    }
}

/// An 8 bit per channel color.
///
/// Channels are `u8` so a color is always within [0, 255]. Use [`Rgb::from_unit`] to build one
/// out of normalized channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        [color.r, color.g, color.b]
    }
}

/// A fixed size, row-major buffer of colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Rgb>,
}

impl Grid {
    /// Wrap a row-major buffer. Returns `None` if the buffer doesn't hold `width * height` cells.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Rgb>) -> Option<Self> {
        (cells.len() == width * height).then_some(Self { width, height, cells })
    }

    /// Wrap a buffer the caller built with exactly one cell per grid position.
    pub(crate) fn from_row_major(width: usize, height: usize, cells: Vec<Rgb>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Rgb] {
        &self.cells
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.cells.chunks(self.width.max(1))
    }
}

// Grids travel as `height` rows of `width` triples.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.height))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

/// An ordered list of polylines
pub type LineSet = Vec<Vec<Point2D>>;

/// An ordered list of 3D points
pub type PointCloud = Vec<Point3D>;

/// One frame worth of data, ready to be handed to a sink
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Payload {
    Grid(Grid),
    Lines(LineSet),
    Points3d(PointCloud),
    Text(String),
}

impl Payload {
    /// The number of elements carried: cells, points, or characters.
    pub fn element_count(&self) -> usize {
        match self {
            Self::Grid(grid) => grid.cells().len(),
            Self::Lines(lines) => lines.iter().map(Vec::len).sum(),
            Self::Points3d(points) => points.len(),
            Self::Text(text) => text.chars().count(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Grid(_) => "grid",
            Self::Lines(_) => "lines",
            Self::Points3d(_) => "points3d",
            Self::Text(_) => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grid_rejects_mismatched_buffer() {
        assert!(Grid::from_cells(3, 2, vec![Rgb::BLACK; 5]).is_none());
        assert!(Grid::from_cells(3, 2, vec![Rgb::BLACK; 6]).is_some());
    }

    #[test]
    fn grid_serializes_as_rows_of_triples() {
        let cells = vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6), Rgb::new(7, 8, 9), Rgb::new(10, 11, 12)];
        let grid = Grid::from_cells(2, 2, cells).expect("valid grid");
        let value = serde_json::to_value(Payload::Grid(grid)).expect("serialize");
        assert_eq!(value, json!({"kind": "grid", "data": [[[1, 2, 3], [4, 5, 6]], [[7, 8, 9], [10, 11, 12]]]}));
    }

    #[test]
    fn points_serialize_as_arrays() {
        let lines = Payload::Lines(vec![vec![Point2D::new(0.5, 1.0)]]);
        assert_eq!(serde_json::to_value(lines).unwrap(), json!({"kind": "lines", "data": [[[0.5, 1.0]]]}));

        let cloud = Payload::Points3d(vec![Point3D::new(1.0, 2.0, 3.0)]);
        assert_eq!(serde_json::to_value(cloud).unwrap(), json!({"kind": "points3d", "data": [[1.0, 2.0, 3.0]]}));
    }

    #[test]
    fn grid_lookup_is_row_major() {
        let cells = (0..6).map(|i| Rgb::new(i, 0, 0)).collect();
        let grid = Grid::from_cells(3, 2, cells).unwrap();
        assert_eq!(grid.get(2, 1), Some(Rgb::new(5, 0, 0)));
        assert_eq!(grid.get(3, 0), None);
    }
}
