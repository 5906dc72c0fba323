//! Line-drawing demo: a point travels a sine arc between two anchors

use sdl2::keyboard::Keycode;

use super::Scene;
use crate::input::InputState;
use crate::raster::{draw_line, BoundsMode};
use crate::surface::{Color, Surface};
use crate::vec2::{Vec2, Viewport};

/// Two fixed anchor points and a third that sweeps back and forth along a
/// sine arch between them, linked up with line segments. Up/Down change the
/// sweep speed.
pub struct LineScene {
    p0: Vec2,
    p1: Vec2,
    arc_point: Vec2,
    sweep: f32,
    sweep_speed: f32,
    descending: bool,
}

impl LineScene {
    pub fn new() -> Self {
        let p0 = Vec2::new(-150.0, 0.0);
        Self {
            p0,
            p1: Vec2::new(150.0, 0.0),
            arc_point: p0,
            sweep: 0.0,
            sweep_speed: 48.0,
            descending: false,
        }
    }

    fn draw_point(surface: &mut Surface, at: Vec2, color: Color) {
        for y in 0..4 {
            for x in 0..4 {
                surface.set_clipped(at.x as i32 + x, at.y as i32 + y, color);
            }
        }
    }
}

impl Default for LineScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for LineScene {
    fn update(&mut self, dt: f32, input: &InputState) {
        if input.is_held(Keycode::Up) {
            self.sweep_speed += 24.0 * dt;
        } else if input.is_held(Keycode::Down) {
            self.sweep_speed = (self.sweep_speed - 24.0 * dt).max(4.0);
        }

        let span = self.p1.x - self.p0.x;
        if self.sweep < span && !self.descending {
            self.sweep += self.sweep_speed * dt;
        } else {
            self.sweep -= self.sweep_speed * dt;
            self.descending = self.sweep >= 0.0;
        }

        let x = self.p0.x + self.sweep;
        let y = ((x - self.p0.x) * std::f32::consts::PI / span).sin() * 80.0 + self.p0.y;
        self.arc_point = Vec2::new(x, y);
    }

    fn render(&self, surface: &mut Surface) {
        let viewport = Viewport::new(surface.width(), surface.height());
        let p0 = viewport.cartesian_to_screen(self.p0);
        let p1 = viewport.cartesian_to_screen(self.p1);
        let arc = viewport.cartesian_to_screen(self.arc_point);

        let _ = draw_line(surface, p0, arc, Color::CYAN, BoundsMode::Clipped);
        let _ = draw_line(surface, arc, p1, Color::CYAN, BoundsMode::Clipped);
        let _ = draw_line(surface, p0, p1, Color::rgb(80, 80, 80), BoundsMode::Clipped);

        Self::draw_point(surface, p0, Color::WHITE);
        Self::draw_point(surface, p1, Color::WHITE);
        Self::draw_point(surface, arc, Color::RED);
    }

    fn name(&self) -> &str {
        "Line Walker"
    }
}
