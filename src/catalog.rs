//! Shape catalogs
//!
//! Each entry maps a cell size and the placement index within its group to
//! the shapes drawn in one cell, in cell-local coordinates. An icon picks one
//! entry per group with `nibble % table.len()`, so the order and length of
//! both tables are fixed.

use crate::geometry::{Point, Shape};

/// Shape generator: `(cell size, placement index) -> shapes`
pub type ShapeFn = fn(f64, usize) -> Vec<Shape>;

/// Patterns for the four center cells
pub static INNER: [ShapeFn; 14] = [
    notched_square,
    side_triangle,
    center_square,
    framed_square,
    corner_circle,
    square_with_triangle_hole,
    folded_square,
    small_triangle,
    stepped_square,
    square_with_square_hole,
    square_with_circle_hole,
    // repeated on purpose; the slot is part of the index mapping
    small_triangle,
    square_with_rhombus_hole,
    large_circle_once,
];

/// Patterns for the edge and corner cells
pub static OUTER: [ShapeFn; 4] = [full_triangle, half_triangle, rhombus, inset_circle];

fn notched_square(cell: f64, _index: usize) -> Vec<Shape> {
    let k = cell * 0.42;
    vec![Shape::polygon(
        vec![
            Point::new(0.0, 0.0),
            Point::new(cell, 0.0),
            Point::new(cell, cell - k * 2.0),
            Point::new(cell - k, cell),
            Point::new(0.0, cell),
        ],
        false,
    )]
}

fn side_triangle(cell: f64, _index: usize) -> Vec<Shape> {
    let w = cell * 0.5;
    let h = cell * 0.8;
    vec![Shape::triangle(cell - w, 0.0, w, h, 2, false)]
}

fn center_square(cell: f64, _index: usize) -> Vec<Shape> {
    let s = cell / 3.0;
    vec![Shape::rectangle(s, s, cell - s, cell - s, false)]
}

fn framed_square(cell: f64, _index: usize) -> Vec<Shape> {
    // Fixed border widths on small icons so the border is still drawn
    let outer = if cell < 6.0 {
        1.0
    } else if cell < 8.0 {
        2.0
    } else {
        cell * 0.25
    };
    let inner = cell * 0.1;
    let inner = if inner > 1.0 {
        inner.trunc()
    } else if inner > 0.5 {
        1.0
    } else {
        0.0
    };
    vec![Shape::rectangle(
        outer,
        outer,
        cell - inner - outer,
        cell - inner - outer,
        false,
    )]
}

fn corner_circle(cell: f64, _index: usize) -> Vec<Shape> {
    let m = cell * 0.15;
    let s = cell * 0.5;
    vec![Shape::circle(cell - s - m, cell - s - m, s, false)]
}

fn square_with_triangle_hole(cell: f64, _index: usize) -> Vec<Shape> {
    let inner = cell * 0.1;
    let mut outer = inner * 4.0;
    // Snap to whole pixels on large icons
    if outer > 3.0 {
        outer = outer.trunc();
    }
    vec![
        Shape::rectangle(0.0, 0.0, cell, cell, true),
        Shape::polygon(
            vec![
                Point::new(outer, outer),
                Point::new(cell - inner, outer),
                Point::new(outer + (cell - outer - inner) / 2.0, cell - inner),
            ],
            true,
        ),
    ]
}

fn folded_square(cell: f64, _index: usize) -> Vec<Shape> {
    vec![Shape::polygon(
        vec![
            Point::new(0.0, 0.0),
            Point::new(cell, 0.0),
            Point::new(cell, cell * 0.7),
            Point::new(cell * 0.4, cell * 0.4),
            Point::new(cell * 0.7, cell),
            Point::new(0.0, cell),
        ],
        false,
    )]
}

fn small_triangle(cell: f64, _index: usize) -> Vec<Shape> {
    let half = cell / 2.0;
    vec![Shape::triangle(half, half, half, half, 3, false)]
}

fn stepped_square(cell: f64, _index: usize) -> Vec<Shape> {
    let half = cell / 2.0;
    vec![
        Shape::rectangle(0.0, 0.0, cell, half, false),
        Shape::rectangle(0.0, half, half, half, false),
        Shape::triangle(half, half, half, half, 1, false),
    ]
}

fn square_with_square_hole(cell: f64, _index: usize) -> Vec<Shape> {
    let outer = if cell < 4.0 {
        1.0
    } else if cell < 6.0 {
        2.0
    } else {
        (cell * 0.35).trunc()
    };
    let mut inner = cell * 0.14;
    if cell >= 8.0 {
        inner = inner.trunc();
    }
    vec![
        Shape::rectangle(0.0, 0.0, cell, cell, false),
        Shape::rectangle(
            outer,
            outer,
            cell - outer - inner,
            cell - outer - inner,
            true,
        ),
    ]
}

fn square_with_circle_hole(cell: f64, _index: usize) -> Vec<Shape> {
    let inner = cell * 0.12;
    let outer = inner * 3.0;
    vec![
        Shape::rectangle(0.0, 0.0, cell, cell, false),
        Shape::circle(outer, outer, cell - inner - outer, true),
    ]
}

fn square_with_rhombus_hole(cell: f64, _index: usize) -> Vec<Shape> {
    let m = cell * 0.25;
    vec![
        Shape::rectangle(0.0, 0.0, cell, cell, false),
        Shape::rhombus(m, m, cell - m, cell - m, true),
    ]
}

/// One circle spanning the four center cells, drawn from the first of them only
fn large_circle_once(cell: f64, index: usize) -> Vec<Shape> {
    if index != 0 {
        return Vec::new();
    }
    let m = cell * 0.4;
    let s = cell * 1.2;
    vec![Shape::circle(m, m, s, false)]
}

fn full_triangle(cell: f64, _index: usize) -> Vec<Shape> {
    vec![Shape::triangle(0.0, 0.0, cell, cell, 0, false)]
}

fn half_triangle(cell: f64, _index: usize) -> Vec<Shape> {
    let half = cell / 2.0;
    vec![Shape::triangle(0.0, half, cell, half, 0, false)]
}

fn rhombus(cell: f64, _index: usize) -> Vec<Shape> {
    vec![Shape::rhombus(0.0, 0.0, cell, cell, false)]
}

fn inset_circle(cell: f64, _index: usize) -> Vec<Shape> {
    let m = cell / 6.0;
    vec![Shape::circle(m, m, cell - 2.0 * m, false)]
}
