//! Sprite scaling and effect-pipeline demo

use sdl2::keyboard::Keycode;

use super::Scene;
use crate::input::InputState;
use crate::sprite::{blit, Sprite, SpriteEffect, SpriteRect};
use crate::surface::{Color, Surface};
use crate::util::Rng;

const KEY_COLOR: Color = Color::MAGENTA;

/// A procedural disc sprite blitted over a noisy backdrop.
///
/// Up/Down change the scale, Left/Right the blend alpha, C toggles the
/// chroma key (cutting the disc's magenta background out), B toggles alpha
/// blending. The active effects run in chroma-key-then-blend order.
pub struct SpriteScene {
    backdrop: Sprite,
    disc: Sprite,
    scale: f32,
    alpha: f32,
    chroma_key: bool,
    alpha_blend: bool,
}

impl SpriteScene {
    pub fn new() -> Self {
        let mut rng = Rng::new(0xC0FFEE);
        Self {
            backdrop: Sprite::noise(160, 120, &mut rng),
            disc: Sprite::disc(32, Color::rgb(240, 200, 40), KEY_COLOR),
            scale: 3.0,
            alpha: 0.6,
            chroma_key: true,
            alpha_blend: false,
        }
    }

    fn effects(&self) -> Vec<SpriteEffect> {
        let mut effects = Vec::new();
        if self.chroma_key {
            effects.push(SpriteEffect::ChromaKey { key: KEY_COLOR });
        }
        if self.alpha_blend {
            effects.push(SpriteEffect::AlphaBlend { alpha: self.alpha });
        }
        effects
    }
}

impl Default for SpriteScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for SpriteScene {
    fn update(&mut self, dt: f32, input: &InputState) {
        if input.is_held(Keycode::Up) {
            self.scale = (self.scale + 2.0 * dt).min(12.0);
        } else if input.is_held(Keycode::Down) {
            self.scale = (self.scale - 2.0 * dt).max(0.1);
        }

        if input.is_held(Keycode::Right) {
            self.alpha = (self.alpha + 0.5 * dt).min(1.0);
        } else if input.is_held(Keycode::Left) {
            self.alpha = (self.alpha - 0.5 * dt).max(0.0);
        }

        if input.was_pressed(Keycode::C) {
            self.chroma_key = !self.chroma_key;
        }
        if input.was_pressed(Keycode::B) {
            self.alpha_blend = !self.alpha_blend;
        }
    }

    fn render(&self, surface: &mut Surface) {
        // Backdrop at a fixed magnification, no effects
        let h_cover = surface.width() as f32 / self.backdrop.width() as f32;
        let v_cover = surface.height() as f32 / self.backdrop.height() as f32;
        blit(
            surface,
            0,
            0,
            SpriteRect::full(&self.backdrop),
            &self.backdrop,
            h_cover,
            v_cover,
            &[],
        );

        // Centered disc at the interactive scale
        let footprint = (self.disc.width() as f32 * self.scale) as i32;
        let x = (surface.width() as i32 - footprint) / 2;
        let y = (surface.height() as i32 - footprint) / 2;
        blit(
            surface,
            x,
            y,
            SpriteRect::full(&self.disc),
            &self.disc,
            self.scale,
            self.scale,
            &self.effects(),
        );
    }

    fn name(&self) -> &str {
        "Sprite Effects"
    }
}
