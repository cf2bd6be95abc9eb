//! Geometry primitives used to compose identicons
//!
//! Everything here works in canvas coordinates (pixels, y pointing down).
//! Shapes are built in cell-local space by the catalog, then translated to
//! their grid cell and rotated about the cell center by the layout step.

pub mod shape;

pub use shape::{Circle, Polygon, Shape};

use std::fmt;

/// A point in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Point at `(x, y)`
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move by `(dx, dy)`
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Rotate this point by `deg` degrees around `center`
    pub fn rotate(&mut self, deg: f64, center: Point) {
        let rad = deg * std::f64::consts::PI / 180.0;
        let (sin, cos) = (rad.sin(), rad.cos());
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        self.x = center.x + dx * cos - dy * sin;
        self.y = center.y + dy * cos + dx * sin;
    }

    /// Write the point as `x,y` rounded to whole pixels
    pub fn write_path<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{:.0},{:.0}", self.x, self.y)
    }
}
