//! Demo scenes
//!
//! Each scene is a small piece of glue: it owns its animation state, reads
//! the keyboard, and calls into the rasterization core. The frame loop picks
//! one scene at a time.

mod lines;
mod raycaster;
mod sprite_show;
mod triangle;

pub use lines::LineScene;
pub use raycaster::RaycastScene;
pub use sprite_show::SpriteScene;
pub use triangle::TriangleScene;

use crate::input::InputState;
use crate::surface::Surface;

/// A runnable demo scene
pub trait Scene {
    /// Advance animation state (called once per frame)
    fn update(&mut self, dt: f32, input: &InputState);

    /// Draw into the cleared frame surface
    fn render(&self, surface: &mut Surface);

    /// Scene name for the window title
    fn name(&self) -> &str;
}
