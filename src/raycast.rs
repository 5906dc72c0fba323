//! Wolfenstein-style ray-casting wall projection
//!
//! One ray per screen column marches in fixed steps through a boolean
//! occupancy grid. The hit distance, corrected for the fisheye distortion of
//! non-perpendicular rays, drives the projected wall height and a linear
//! distance shade.

use crate::surface::{Color, Surface};
use crate::vec2::Vec2;

/// March step in grid units. Small enough that walls can't be skipped
/// through at playable depths.
pub const MARCH_STEP: f32 = 0.01;

/// Shortest distance used for wall projection; keeps the height division
/// finite when the player stands against a wall.
const MIN_WALL_DISTANCE: f32 = 1e-4;

/// Shade units subtracted per grid unit of corrected distance
const SHADE_PER_UNIT: f32 = 20.0;

const CEILING_COLOR: Color = Color::rgb(0, 255, 255);
const WALL_COLOR: Color = Color::WHITE;
const FLOOR_COLOR: Color = Color::rgb(0, 255, 0);

// ============================================================================
// Occupancy grid
// ============================================================================

/// Immutable-per-frame grid of solid/empty cells
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Grid {
    /// Build from a row-major map literal; nonzero bytes are solid. Returns
    /// `None` when the array length does not match `width * height`.
    pub fn from_bytes(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        if bytes.len() == (width * height) as usize {
            Some(Self {
                width,
                height,
                cells: bytes.iter().map(|&b| b != 0).collect(),
            })
        } else {
            None
        }
    }

    /// All-empty grid
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Solidity of a cell; out-of-range cells read as empty (the marcher
    /// treats leaving the grid as its own terminal condition)
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && self.cells[(x + self.width as i32 * y) as usize]
    }
}

// ============================================================================
// Camera
// ============================================================================

/// Player/camera state supplied fresh each frame by the scene
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec2,
    /// Facing angle in radians; 0 looks along +X, angles grow clockwise on
    /// screen (grid Y grows downward)
    pub facing: f32,
    /// Field of view in radians
    pub fov: f32,
    /// March cutoff in grid units
    pub max_depth: f32,
}

/// Result of casting one column's ray
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Fisheye-corrected distance, the one wall projection uses
    pub distance: f32,
    /// Absolute angle the ray was cast at
    pub ray_angle: f32,
}

/// March a ray from `origin` along `angle` until a solid cell, the grid
/// edge, or `max_depth`. Leaving the grid counts as a hit at `max_depth`.
/// Returns the raw (uncorrected) ray length, never above `max_depth`.
pub fn march(grid: &Grid, origin: Vec2, angle: f32, max_depth: f32, step: f32) -> f32 {
    let eye = Vec2::from_angle(angle);
    let mut distance = 0.0;

    while distance < max_depth {
        distance += step;

        let test_x = (origin.x + eye.x * distance) as i32;
        let test_y = (origin.y + eye.y * distance) as i32;

        if !grid.contains(test_x, test_y) {
            return max_depth;
        }
        if grid.is_solid(test_x, test_y) {
            return distance;
        }
    }

    max_depth
}

/// Cast the ray for one screen column and correct the fisheye distortion.
///
/// The raw march length is measured along the ray, which for off-center
/// columns is longer than the perpendicular distance to the projection
/// plane; multiplying by the cosine of the angular offset from the facing
/// direction converts between the two.
pub fn cast_ray(grid: &Grid, camera: &Camera, column: u32, screen_width: u32) -> RayHit {
    let ray_angle = (camera.facing - camera.fov / 2.0)
        + (column as f32 / screen_width as f32) * camera.fov;

    let raw = march(grid, camera.position, ray_angle, camera.max_depth, MARCH_STEP);
    let distance = raw * (camera.facing - ray_angle).cos();

    RayHit {
        distance,
        ray_angle,
    }
}

/// Render the full wall projection into `surface`, column by column:
/// ceiling above the wall slice, distance-shaded wall, floor below.
pub fn render(surface: &mut Surface, grid: &Grid, camera: &Camera) {
    let width = surface.width();
    let height = surface.height() as i32;
    let half_height = height as f32 / 2.0;

    for x in 0..width {
        let hit = cast_ray(grid, camera, x, width);
        let distance = hit.distance.max(MIN_WALL_DISTANCE);

        let wall_top = (half_height - height as f32 / distance) as i32;
        let wall_bottom = height - wall_top;

        let shade = (distance.min(camera.max_depth) * SHADE_PER_UNIT).min(255.0) as u8;
        let wall = WALL_COLOR.darkened(shade);

        for y in 0..height {
            let color = if y < wall_top {
                CEILING_COLOR
            } else if y < wall_bottom {
                wall
            } else {
                FLOOR_COLOR
            };
            // Safety: x < width and 0 <= y < height by loop bounds
            unsafe {
                surface.set_unchecked(x, y as u32, color);
            }
        }
    }
}
