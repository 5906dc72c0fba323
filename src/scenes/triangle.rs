//! Rotating-triangle rasterization demo

use sdl2::keyboard::Keycode;

use super::Scene;
use crate::input::InputState;
use crate::raster::fill_triangle;
use crate::surface::{Color, Surface};
use crate::vec2::{Vec2, Viewport};

/// A triangle spinning around the origin, filled with the scanline
/// rasterizer and stroked with the line rasterizer. Left/Right adjust the
/// spin rate, Space reverses it.
pub struct TriangleScene {
    points: [Vec2; 3],
    /// Degrees per second
    spin_rate: f32,
}

impl TriangleScene {
    pub fn new() -> Self {
        Self {
            points: [
                Vec2::new(-146.0, 98.0), // top
                Vec2::new(100.0, 0.0),   // right
                Vec2::new(-100.0, 0.0),  // left
            ],
            spin_rate: 50.0,
        }
    }
}

impl Default for TriangleScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for TriangleScene {
    fn update(&mut self, dt: f32, input: &InputState) {
        if input.is_held(Keycode::Left) {
            self.spin_rate += 25.0 * dt;
        } else if input.is_held(Keycode::Right) {
            self.spin_rate = (self.spin_rate - 25.0 * dt).max(0.0);
        }
        if input.was_pressed(Keycode::Space) {
            self.spin_rate = -self.spin_rate;
        }

        for point in &mut self.points {
            *point = point.rotated_deg(self.spin_rate * dt);
        }
    }

    fn render(&self, surface: &mut Surface) {
        let viewport = Viewport::new(surface.width(), surface.height());
        let [p0, p1, p2] = self.points.map(|p| viewport.cartesian_to_screen(p));

        fill_triangle(surface, p0, p1, p2, Color::WHITE, Color::RED);
    }

    fn name(&self) -> &str {
        "Triangle Raster"
    }
}
