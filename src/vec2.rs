//! 2D vector math for rasterization geometry and ray directions

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector / point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Unit-length copy; zero-length vectors come back unchanged
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len != 0.0 {
            Vec2::new(self.x / len, self.y / len)
        } else {
            self
        }
    }

    /// Rotate counter-clockwise around the origin
    pub fn rotated(self, radians: f32) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        Vec2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    pub fn rotated_deg(self, degrees: f32) -> Vec2 {
        self.rotated(degrees.to_radians())
    }

    /// Direction vector for an angle in radians (cos, sin)
    pub fn from_angle(radians: f32) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        Vec2 { x: cos, y: sin }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Maps origin-centered cartesian coordinates (Y up) onto screen space
/// (top-left origin, Y down). Scenes that rotate geometry around the origin
/// work in cartesian space and convert at draw time.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn cartesian_to_screen(&self, v: Vec2) -> Vec2 {
        Vec2 {
            x: v.x + self.width as f32 / 2.0,
            y: -v.y + self.height as f32 / 2.0,
        }
    }

    pub fn screen_to_cartesian(&self, v: Vec2) -> Vec2 {
        Vec2 {
            x: v.x - self.width as f32 / 2.0,
            y: -v.y + self.height as f32 / 2.0,
        }
    }
}
