//! Scanline triangle rasterizer
//!
//! Fills arbitrary triangles by reducing them to "flat" triangles - one edge
//! parallel to the scanline axis - which fill in a single pass. A general
//! triangle is split at its middle vertex into a flat-bottom and a flat-top
//! half.

use super::{draw_line, BoundsMode};
use crate::surface::{Color, Surface};
use crate::vec2::Vec2;

/// Fill and stroke an arbitrary triangle given in screen space.
///
/// Interior spans and the stroked outline are written with clipping:
/// rotating geometry routinely leaves the surface for a few frames and that
/// is not an error.
///
/// Zero-area triangles (collinear or coincident vertices) skip the fill and
/// degrade to their stroked outline - a line or a point.
pub fn fill_triangle(
    surface: &mut Surface,
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    fill: Color,
    stroke: Color,
) {
    // Twice the signed area; near-zero means the vertices are collinear
    let doubled_area = (p1.x - p0.x) * (p2.y - p0.y) - (p2.x - p0.x) * (p1.y - p0.y);

    if doubled_area.abs() >= f32::EPSILON {
        // Rotated geometry accumulates floating error, so the flat-edge test
        // compares rounded Y - otherwise the single-pass path never triggers.
        let y0 = p0.y.round();
        let y1 = p1.y.round();
        let y2 = p2.y.round();

        if y0 == y1 {
            fill_flat(surface, p2, p0, p1, fill);
        } else if y0 == y2 {
            fill_flat(surface, p1, p0, p2, fill);
        } else if y1 == y2 {
            fill_flat(surface, p0, p1, p2, fill);
        } else {
            // General triangle: sort by Y, split at the middle vertex against
            // the long top-to-bottom edge, fill the two flat halves.
            let mut top = p0;
            let mut mid = p1;
            let mut bottom = p2;
            if top.y > mid.y {
                std::mem::swap(&mut top, &mut mid);
            }
            if mid.y > bottom.y {
                std::mem::swap(&mut mid, &mut bottom);
            }
            if top.y > mid.y {
                std::mem::swap(&mut top, &mut mid);
            }

            let split = Vec2::new(
                top.x + (bottom.x - top.x) * (mid.y - top.y) / (bottom.y - top.y),
                mid.y,
            );

            fill_flat(surface, top, mid, split, fill);
            fill_flat(surface, bottom, mid, split, fill);

            // Internal diagonal where the two halves meet
            stroke_edge(surface, mid, split, stroke);
        }
    }

    // The original edges are stroked on every path, degenerate included
    stroke_edge(surface, p0, p1, stroke);
    stroke_edge(surface, p1, p2, stroke);
    stroke_edge(surface, p2, p0, stroke);
}

/// Clipped stroke; clipped line draws cannot fail
fn stroke_edge(surface: &mut Surface, a: Vec2, b: Vec2, color: Color) {
    let _ = draw_line(surface, a, b, color, BoundsMode::Clipped);
}

/// Scanline-fill a flat triangle: `apex` against the horizontal edge
/// `flat_a`-`flat_b`. Works for both flat-top (apex below) and flat-bottom
/// (apex above) orientations by stepping Y toward the flat edge.
fn fill_flat(surface: &mut Surface, apex: Vec2, flat_a: Vec2, flat_b: Vec2, fill: Color) {
    let flat_y = flat_a.y;
    let height = flat_y - apex.y;

    // Zero-height triangle: nothing to fill, the stroke pass covers it
    if height.abs() < f32::EPSILON {
        return;
    }

    // Each edge as x = f(y): X advances by the inverse slope per unit Y
    let step_a = (flat_a.x - apex.x) / height;
    let step_b = (flat_b.x - apex.x) / height;

    let y_begin = apex.y.round() as i32;
    let y_end = flat_y.round() as i32;
    let dy = if y_end >= y_begin { 1 } else { -1 };

    let mut y = y_begin;
    loop {
        let offset = y as f32 - apex.y;
        let xa = apex.x + step_a * offset;
        let xb = apex.x + step_b * offset;

        // Either edge may be the left one depending on winding
        let (begin, end) = if xa <= xb { (xa, xb) } else { (xb, xa) };
        hspan(surface, begin as i32, end as i32, y, fill);

        if y == y_end {
            break;
        }
        y += dy;
    }
}

/// Horizontal span with clipping, `x1 <= x2`
fn hspan(surface: &mut Surface, x1: i32, x2: i32, y: i32, color: Color) {
    if y < 0 || y >= surface.height() as i32 {
        return;
    }
    let begin = x1.max(0);
    let end = x2.min(surface.width() as i32 - 1);
    for x in begin..=end {
        surface.set_clipped(x, y, color);
    }
}
