//! First-person ray-casting demo with minimap

use sdl2::keyboard::Keycode;

use super::Scene;
use crate::input::InputState;
use crate::raster::{draw_line, BoundsMode};
use crate::raycast::{self, Camera, Grid};
use crate::surface::{Color, Surface};
use crate::vec2::Vec2;

const MAP_WIDTH: u32 = 10;
const MAP_HEIGHT: u32 = 10;

#[rustfmt::skip]
const MAP: [u8; (MAP_WIDTH * MAP_HEIGHT) as usize] = [
    1,1,1,1,1,1,1,1,1,1,
    1,0,0,0,0,0,0,0,0,1,
    1,0,1,1,0,0,0,0,0,1,
    1,0,1,1,0,0,0,0,0,1,
    1,0,0,0,0,0,0,0,0,1,
    1,0,0,0,0,0,0,0,0,1,
    1,0,0,1,0,0,0,0,0,1,
    1,0,0,1,1,0,0,0,0,1,
    1,0,0,0,0,0,0,0,0,1,
    1,1,1,1,1,1,1,1,1,1,
];

const MOVE_SPEED: f32 = 2.0;
const TURN_SPEED: f32 = 1.5;

/// WASD walk through a fixed occupancy grid rendered as a wall projection,
/// with the classic minimap overlay in the top-left corner.
pub struct RaycastScene {
    grid: Grid,
    camera: Camera,
}

impl RaycastScene {
    pub fn new() -> Self {
        let grid = Grid::from_bytes(MAP_WIDTH, MAP_HEIGHT, &MAP)
            .expect("map literal matches grid dimensions");
        Self {
            grid,
            camera: Camera {
                position: Vec2::new(4.0, 4.0),
                facing: 0.0,
                fov: 90.0_f32.to_radians(),
                max_depth: 10.0,
            },
        }
    }

    fn draw_minimap(&self, surface: &mut Surface) {
        let scale = 10;

        // Map background
        for y in 0..(MAP_HEIGHT as i32 * scale) {
            for x in 0..(MAP_WIDTH as i32 * scale) {
                surface.set_clipped(x, y, Color::WHITE);
            }
        }

        // Solid blocks
        for cell_y in 0..MAP_HEIGHT as i32 {
            for cell_x in 0..MAP_WIDTH as i32 {
                if !self.grid.is_solid(cell_x, cell_y) {
                    continue;
                }
                for y in 0..scale {
                    for x in 0..scale {
                        surface.set_clipped(cell_x * scale + x, cell_y * scale + y, Color::BLACK);
                    }
                }
            }
        }

        // Player marker
        let px = (self.camera.position.x * scale as f32) as i32;
        let py = (self.camera.position.y * scale as f32) as i32;
        for y in -2..=2 {
            for x in -2..=2 {
                surface.set_clipped(px + x, py + y, Color::RED);
            }
        }

        // View cone: two rays half a radian apart, joined at the far ends
        let cone_length = 30.0;
        let spread = 0.5;
        let origin = Vec2::new(px as f32, py as f32);
        let left = origin + Vec2::from_angle(self.camera.facing - spread) * cone_length;
        let right = origin + Vec2::from_angle(self.camera.facing + spread) * cone_length;

        let _ = draw_line(surface, origin, left, Color::RED, BoundsMode::Clipped);
        let _ = draw_line(surface, origin, right, Color::RED, BoundsMode::Clipped);
        let _ = draw_line(surface, left, right, Color::RED, BoundsMode::Clipped);
    }
}

impl Default for RaycastScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for RaycastScene {
    fn update(&mut self, dt: f32, input: &InputState) {
        if input.is_held(Keycode::Left) {
            self.camera.facing -= TURN_SPEED * dt;
        } else if input.is_held(Keycode::Right) {
            self.camera.facing += TURN_SPEED * dt;
        }

        let forward = Vec2::from_angle(self.camera.facing) * (MOVE_SPEED * dt);
        // Strafe is the forward vector rotated a quarter turn
        let sideways = Vec2::new(-forward.y, forward.x);

        let mut next = self.camera.position;
        if input.is_held(Keycode::W) {
            next += forward;
        } else if input.is_held(Keycode::S) {
            next -= forward;
        }
        if input.is_held(Keycode::A) {
            next -= sideways;
        } else if input.is_held(Keycode::D) {
            next += sideways;
        }

        // Walls stop movement per axis so the player can slide along them
        if !self.grid.is_solid(next.x as i32, self.camera.position.y as i32) {
            self.camera.position.x = next.x;
        }
        if !self.grid.is_solid(self.camera.position.x as i32, next.y as i32) {
            self.camera.position.y = next.y;
        }
    }

    fn render(&self, surface: &mut Surface) {
        raycast::render(surface, &self.grid, &self.camera);
        self.draw_minimap(surface);
    }

    fn name(&self) -> &str {
        "Ray Caster"
    }
}
