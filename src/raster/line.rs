//! Incremental slope-walk line rasterizer

use super::BoundsMode;
use crate::surface::{Color, OutOfBounds, Surface};
use crate::vec2::Vec2;

/// Draw a single-pixel-wide line segment between two points.
///
/// The walk runs along the dominant axis: when the line is steeper than 45
/// degrees it steps integer Y and solves `x = slope * y + x_intercept` (the
/// line treated as x = f(y), slope expressed as run/rise), otherwise it steps
/// integer X against the usual `y = slope * x + y_intercept`. One pixel lands
/// per unit step along that axis, so steep and shallow lines stay gap-free.
///
/// Equal endpoints draw a single pixel. In `Checked` mode the first
/// out-of-range pixel aborts the call with [`OutOfBounds`].
pub fn draw_line(
    surface: &mut Surface,
    p0: Vec2,
    p1: Vec2,
    color: Color,
    bounds: BoundsMode,
) -> Result<(), OutOfBounds> {
    let run = p1.x - p0.x;
    let rise = p1.y - p0.y;

    if rise.abs() > run.abs() {
        // Steep: walk Y, endpoints ordered so Y always increases
        let (top, bottom) = if p0.y > p1.y { (p1, p0) } else { (p0, p1) };

        let slope = run / rise;
        let x_intercept = top.x - slope * top.y;

        for y in top.y as i32..=bottom.y as i32 {
            let x = slope * y as f32 + x_intercept;
            plot(surface, x as i32, y, color, bounds)?;
        }
    } else {
        // Shallow (or degenerate): walk X left to right
        let (left, right) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };

        if run == 0.0 {
            // Both deltas zero: single-pixel line
            return plot(surface, p0.x as i32, p0.y as i32, color, bounds);
        }

        let slope = rise / run;
        let y_intercept = left.y - slope * left.x;

        for x in left.x as i32..=right.x as i32 {
            let y = slope * x as f32 + y_intercept;
            plot(surface, x, y as i32, color, bounds)?;
        }
    }

    Ok(())
}

#[inline]
fn plot(
    surface: &mut Surface,
    x: i32,
    y: i32,
    color: Color,
    bounds: BoundsMode,
) -> Result<(), OutOfBounds> {
    match bounds {
        BoundsMode::Checked => surface.set(x, y, color),
        BoundsMode::Clipped => {
            surface.set_clipped(x, y, color);
            Ok(())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(surface: &Surface) -> Vec<(i32, i32)> {
        let mut pixels = Vec::new();
        for y in 0..surface.height() as i32 {
            for x in 0..surface.width() as i32 {
                if surface.get(x, y).unwrap() != Color::default() {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    #[test]
    fn test_shallow_line_one_pixel_per_column() {
        let mut surface = Surface::new(64, 64);
        draw_line(
            &mut surface,
            Vec2::new(2.0, 10.0),
            Vec2::new(30.0, 20.0),
            Color::WHITE,
            BoundsMode::Checked,
        )
        .unwrap();

        let pixels = painted(&surface);
        // Exactly one pixel per integer X step across the walked range
        for x in 2..=30 {
            assert_eq!(pixels.iter().filter(|p| p.0 == x).count(), 1, "column {}", x);
        }
        assert_eq!(pixels.len(), 29);
    }

    #[test]
    fn test_steep_line_one_pixel_per_row() {
        let mut surface = Surface::new(64, 64);
        draw_line(
            &mut surface,
            Vec2::new(10.0, 40.0),
            Vec2::new(16.0, 4.0),
            Color::WHITE,
            BoundsMode::Checked,
        )
        .unwrap();

        let pixels = painted(&surface);
        for y in 4..=40 {
            assert_eq!(pixels.iter().filter(|p| p.1 == y).count(), 1, "row {}", y);
        }
    }

    #[test]
    fn test_endpoint_swap_symmetry() {
        let a = Vec2::new(3.0, 7.0);
        let b = Vec2::new(41.0, 29.0);

        let mut forward = Surface::new(64, 64);
        draw_line(&mut forward, a, b, Color::WHITE, BoundsMode::Checked).unwrap();
        let mut backward = Surface::new(64, 64);
        draw_line(&mut backward, b, a, Color::WHITE, BoundsMode::Checked).unwrap();

        assert_eq!(painted(&forward), painted(&backward));
    }

    #[test]
    fn test_degenerate_line_single_pixel() {
        let mut surface = Surface::new(16, 16);
        draw_line(
            &mut surface,
            Vec2::new(5.0, 5.0),
            Vec2::new(5.0, 5.0),
            Color::WHITE,
            BoundsMode::Checked,
        )
        .unwrap();
        assert_eq!(painted(&surface), vec![(5, 5)]);
    }

    #[test]
    fn test_axis_aligned_lines() {
        let mut surface = Surface::new(32, 32);
        draw_line(
            &mut surface,
            Vec2::new(4.0, 8.0),
            Vec2::new(20.0, 8.0),
            Color::WHITE,
            BoundsMode::Checked,
        )
        .unwrap();
        draw_line(
            &mut surface,
            Vec2::new(25.0, 2.0),
            Vec2::new(25.0, 30.0),
            Color::WHITE,
            BoundsMode::Checked,
        )
        .unwrap();

        for x in 4..=20 {
            assert_eq!(surface.get(x, 8).unwrap(), Color::WHITE);
        }
        for y in 2..=30 {
            assert_eq!(surface.get(25, y).unwrap(), Color::WHITE);
        }
    }

    #[test]
    fn test_checked_mode_reports_out_of_bounds() {
        let mut surface = Surface::new(8, 8);
        let result = draw_line(
            &mut surface,
            Vec2::new(4.0, 4.0),
            Vec2::new(20.0, 4.0),
            Color::WHITE,
            BoundsMode::Checked,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_clipped_mode_never_fails() {
        let mut surface = Surface::new(8, 8);
        draw_line(
            &mut surface,
            Vec2::new(-10.0, 4.0),
            Vec2::new(30.0, 4.0),
            Color::WHITE,
            BoundsMode::Clipped,
        )
        .unwrap();
        for x in 0..8 {
            assert_eq!(surface.get(x, 4).unwrap(), Color::WHITE);
        }
    }
}
