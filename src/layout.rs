//! Grid layout and shape placement
//!
//! The icon is a 4x4 grid centered in the padded canvas. Three placement
//! groups share the grid: the eight edge cells, the four corners and the four
//! center cells. Each group draws one catalog pattern in one theme color,
//! rotated a quarter turn further at every successive position.

use log::{debug, trace};

use crate::catalog::{ShapeFn, INNER, OUTER};
use crate::color::{self, ColorSlots, Theme};
use crate::config::Config;
use crate::digest::{self, Digest};
use crate::geometry::{Point, Shape};
use crate::svg::{Document, FillGroup};

/// Cells per grid side
pub const GRID: usize = 4;

/// Grid coordinates of the edge cells, clockwise pairs around the ring
pub const OUTER_PRIMARY_POSITIONS: [(usize, usize); 8] = [
    (1, 0),
    (2, 0),
    (2, 3),
    (1, 3),
    (0, 1),
    (3, 1),
    (3, 2),
    (0, 2),
];

/// Grid coordinates of the corner cells
pub const OUTER_SECONDARY_POSITIONS: [(usize, usize); 4] = [(0, 0), (3, 0), (3, 3), (0, 3)];

/// Grid coordinates of the center cells
pub const INNER_POSITIONS: [(usize, usize); 4] = [(1, 1), (2, 1), (2, 2), (1, 2)];

/// One of the three shape groups of an icon
#[derive(Debug, Clone, Copy)]
pub struct PlacementGroup {
    pub name: &'static str,
    pub catalog: &'static [ShapeFn],
    /// Digest offset of the catalog selector
    pub shape_offset: usize,
    /// Digest offset of the rotation seed (0 = unseeded)
    pub rotation_offset: usize,
    pub positions: &'static [(usize, usize)],
}

/// Groups in drawing order; the n-th group takes the n-th color slot
pub static GROUPS: [PlacementGroup; 3] = [
    PlacementGroup {
        name: "outer-primary",
        catalog: &OUTER,
        shape_offset: digest::OUTER_PRIMARY_SHAPE,
        rotation_offset: digest::OUTER_PRIMARY_ROTATION,
        positions: &OUTER_PRIMARY_POSITIONS,
    },
    PlacementGroup {
        name: "outer-secondary",
        catalog: &OUTER,
        shape_offset: digest::OUTER_SECONDARY_SHAPE,
        rotation_offset: digest::OUTER_SECONDARY_ROTATION,
        positions: &OUTER_SECONDARY_POSITIONS,
    },
    PlacementGroup {
        name: "inner",
        catalog: &INNER,
        shape_offset: digest::INNER_SHAPE,
        rotation_offset: digest::INNER_ROTATION,
        positions: &INNER_POSITIONS,
    },
];

/// Canvas geometry shared by every placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Top-left corner of the grid
    pub origin: Point,
    /// Side of one cell
    pub cell: f64,
}

impl Grid {
    /// Fit a square grid inside the padded canvas
    ///
    /// The axis with the larger extent gets the size difference as extra
    /// padding, keeping the grid square and centered.
    pub fn new(width: u32, height: u32, padding: f64) -> Self {
        let w = f64::from(width);
        let h = f64::from(height);
        let mut pad_x = w * (padding * 2.0);
        let mut pad_y = h * (padding * 2.0);
        if w > h {
            pad_x += w - h;
        }
        if h > w {
            pad_y += h - w;
        }
        Self {
            origin: Point::new(pad_x / 2.0, pad_y / 2.0),
            cell: (w - pad_x) / GRID as f64,
        }
    }

    /// Top-left corner of the cell at grid coordinates `(col, row)`
    pub fn cell_origin(&self, (col, row): (usize, usize)) -> Point {
        Point::new(
            self.origin.x + col as f64 * self.cell,
            self.origin.y + row as f64 * self.cell,
        )
    }
}

impl PlacementGroup {
    /// Catalog entry chosen by the digest
    pub fn generator(&self, digest: &Digest) -> ShapeFn {
        let idx = digest.nibble(self.shape_offset) as usize % self.catalog.len();
        trace!("{}: pattern {}", self.name, idx);
        self.catalog[idx]
    }

    /// Instantiate, translate and rotate the group's pattern at every position
    pub fn render(&self, digest: &Digest, grid: &Grid) -> Vec<Shape> {
        let generator = self.generator(digest);
        let seed = digest.rotation_seed(self.rotation_offset) as usize;
        let mut out = Vec::new();
        for (i, &position) in self.positions.iter().enumerate() {
            let corner = grid.cell_origin(position);
            let center = Point::new(corner.x + grid.cell / 2.0, corner.y + grid.cell / 2.0);
            let quadrant = (seed + i) % 4;
            for mut shape in generator(grid.cell, i) {
                shape.translate(corner.x, corner.y);
                shape.rotate(quadrant as f64 * 90.0, center);
                out.push(shape);
            }
        }
        out
    }
}

/// Build the full document for a digest and configuration
pub fn compose(digest: &Digest, config: &Config) -> Document {
    let hue = color::hue(config, digest);
    let theme = Theme::new(hue, config);
    let slots = ColorSlots::select(digest);
    debug!(
        "composing identicon digest={} hue={:.6} slots={:?}",
        digest, hue, slots.0
    );

    let mut doc = Document::new(config.width, config.height);
    let bg = config.background;
    if bg.a != 0 {
        let w = f64::from(config.width);
        let h = f64::from(config.height);
        doc.push(FillGroup::with_opacity(
            bg.hex(),
            bg.opacity(),
            vec![Shape::polygon(
                vec![
                    Point::new(0.0, 0.0),
                    Point::new(w, 0.0),
                    Point::new(w, h),
                    Point::new(0.0, h),
                ],
                false,
            )],
        ));
    }

    let grid = Grid::new(config.width, config.height, config.padding);
    for (group, fill) in GROUPS.iter().zip(slots.colors(&theme)) {
        doc.add_shapes(fill, group.render(digest, &grid));
    }
    doc
}
