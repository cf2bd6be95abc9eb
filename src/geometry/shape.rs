//! Polygon and circle shapes plus the parametric constructors the catalog uses

use std::fmt;

use super::Point;

/// A closed polygon
///
/// Points are emitted in stored order when `clockwise` is set and in reverse
/// order otherwise. Reversing the winding is how cut-outs are drawn: the SVG
/// nonzero fill rule leaves opposite-wound regions empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub clockwise: bool,
}

/// A circle described by its center and radius
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub clockwise: bool,
}

/// A shape that can be moved, rotated and written as SVG path data
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(Polygon),
    Circle(Circle),
}

impl Shape {
    /// Arbitrary polygon from a list of points
    pub fn polygon(points: Vec<Point>, clockwise: bool) -> Self {
        Shape::Polygon(Polygon { points, clockwise })
    }

    /// Circle inscribed in the square at (`x`, `y`) with side `size`
    pub fn circle(x: f64, y: f64, size: f64, clockwise: bool) -> Self {
        let radius = size / 2.0;
        Shape::Circle(Circle {
            center: Point::new(x + radius, y + radius),
            radius,
            clockwise,
        })
    }

    /// Axis-aligned rectangle
    pub fn rectangle(x: f64, y: f64, w: f64, h: f64, clockwise: bool) -> Self {
        Self::polygon(
            vec![
                Point::new(x, y),
                Point::new(x + w, y),
                Point::new(x + w, y + h),
                Point::new(x, y + h),
            ],
            clockwise,
        )
    }

    /// Right triangle filling half of the given box
    ///
    /// `rotation` picks which corner of the box is dropped: 0 drops the
    /// top-right corner, 1 bottom-right, 2 bottom-left, 3 top-left.
    pub fn triangle(x: f64, y: f64, w: f64, h: f64, rotation: usize, clockwise: bool) -> Self {
        let mut points = vec![
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
            Point::new(x, y),
        ];
        points.remove(rotation % 4);
        Self::polygon(points, clockwise)
    }

    /// Diamond touching the midpoints of the given box
    pub fn rhombus(x: f64, y: f64, w: f64, h: f64, clockwise: bool) -> Self {
        Self::polygon(
            vec![
                Point::new(x + w / 2.0, y),
                Point::new(x + w, y + h / 2.0),
                Point::new(x + w / 2.0, y + h),
                Point::new(x, y + h / 2.0),
            ],
            clockwise,
        )
    }

    /// Move every point by `(dx, dy)`
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Polygon(p) => p.points.iter_mut().for_each(|pt| pt.translate(dx, dy)),
            Shape::Circle(c) => c.center.translate(dx, dy),
        }
    }

    /// Rotate by `deg` degrees around `center`. Circles only move their center.
    pub fn rotate(&mut self, deg: f64, center: Point) {
        match self {
            Shape::Polygon(p) => p.points.iter_mut().for_each(|pt| pt.rotate(deg, center)),
            Shape::Circle(c) => c.center.rotate(deg, center),
        }
    }

    /// Append this shape's sub-path to `out`
    pub fn write_path<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            Shape::Polygon(p) => p.write_path(out),
            Shape::Circle(c) => c.write_path(out),
        }
    }

    /// Sub-path as an owned string
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_path(f)
    }
}

impl Polygon {
    fn write_path<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        if self.points.is_empty() {
            return Ok(());
        }
        let mut first = true;
        let mut emit = |pt: &Point, out: &mut W| -> fmt::Result {
            out.write_char(if first { 'M' } else { 'L' })?;
            first = false;
            pt.write_path(out)
        };
        if self.clockwise {
            for pt in &self.points {
                emit(pt, out)?;
            }
        } else {
            for pt in self.points.iter().rev() {
                emit(pt, out)?;
            }
        }
        out.write_char('Z')
    }
}

impl Circle {
    fn write_path<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let r = self.radius;
        let d = r * 2.0;
        if self.clockwise {
            write!(out, "M{:.0},{:.0}", self.center.x + r, self.center.y)?;
            write!(out, "a{r:.1},{r:.1} 0 1,1 -{d:.1},0")?;
            write!(out, "a{r:.1},{r:.1} 0 1,1 {d:.1},0")
        } else {
            write!(out, "M{:.0},{:.0}", self.center.x - r, self.center.y)?;
            write!(out, "a{r:.1},{r:.1} 0 1,1 {d:.1},0")?;
            write!(out, "a{r:.1},{r:.1} 0 1,1 -{d:.1},0")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_counter_clockwise_reverses_points() {
        let r = Shape::rectangle(0.0, 0.0, 10.0, 5.0, false);
        assert_eq!(r.path(), "M0,5L10,5L10,0L0,0Z");
        let r = Shape::rectangle(0.0, 0.0, 10.0, 5.0, true);
        assert_eq!(r.path(), "M0,0L10,0L10,5L0,5Z");
    }

    #[test]
    fn triangle_drops_rotation_corner() {
        match Shape::triangle(0.0, 0.0, 4.0, 4.0, 0, true) {
            Shape::Polygon(p) => {
                assert_eq!(p.points.len(), 3);
                assert!(!p.points.contains(&Point::new(4.0, 0.0)));
            }
            other => panic!("unexpected shape {:?}", other),
        }
        match Shape::triangle(0.0, 0.0, 4.0, 4.0, 7, true) {
            Shape::Polygon(p) => assert!(!p.points.contains(&Point::new(0.0, 0.0))),
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn rhombus_touches_midpoints() {
        let r = Shape::rhombus(0.0, 0.0, 10.0, 20.0, true);
        assert_eq!(r.path(), "M5,0L10,10L5,20L0,10Z");
    }

    #[test]
    fn circle_paths_mirror_by_winding() {
        let c = Shape::circle(0.0, 0.0, 21.0, false);
        assert_eq!(c.path(), "M0,10a10.5,10.5 0 1,1 21.0,0a10.5,10.5 0 1,1 -21.0,0");
        let c = Shape::circle(0.0, 0.0, 21.0, true);
        assert_eq!(c.path(), "M21,10a10.5,10.5 0 1,1 -21.0,0a10.5,10.5 0 1,1 21.0,0");
    }

    #[test]
    fn circle_rotation_moves_only_center() {
        let mut c = Shape::circle(0.0, 0.0, 2.0, false);
        c.rotate(180.0, Point::new(2.0, 1.0));
        match c {
            Shape::Circle(c) => {
                assert!((c.center.x - 3.0).abs() < 1e-9);
                assert!((c.center.y - 1.0).abs() < 1e-9);
                assert_eq!(c.radius, 1.0);
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn empty_polygon_writes_nothing() {
        assert_eq!(Shape::polygon(Vec::new(), true).path(), "");
    }

    #[test]
    fn translate_then_serialize() {
        let mut r = Shape::rectangle(0.0, 0.0, 2.0, 2.0, true);
        r.translate(100.0, 50.0);
        assert_eq!(r.path(), "M100,50L102,50L102,52L100,52Z");
    }

    #[test]
    fn display_matches_streamed_path() {
        let shapes = [
            Shape::triangle(0.0, 0.0, 10.0, 10.0, 1, false),
            Shape::circle(5.0, 5.0, 10.0, true),
        ];
        for shape in &shapes {
            let mut streamed = String::new();
            shape.write_path(&mut streamed).unwrap();
            assert_eq!(format!("{}", shape), streamed);
            assert_eq!(shape.path(), streamed);
        }
    }
}
