//! Confetti bursts drawn over the current screen.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::prelude::*;

use crate::effects::{Celebrator, Intensity};

const GLYPHS: [char; 6] = ['*', '+', 'o', '.', '~', '✦'];
const COLORS: [Color; 6] = [
    Color::LightMagenta,
    Color::LightYellow,
    Color::LightCyan,
    Color::LightGreen,
    Color::LightRed,
    Color::LightBlue,
];
const GRAVITY: f32 = 0.012;

struct BurstShape {
    particles: usize,
    spread_degrees: f32,
    origin_y: f32,
    lifetime: u16,
}

fn shape(intensity: Intensity) -> BurstShape {
    match intensity {
        Intensity::Minor => BurstShape {
            particles: 100,
            spread_degrees: 70.0,
            origin_y: 0.6,
            lifetime: 18,
        },
        Intensity::Major => BurstShape {
            particles: 200,
            spread_degrees: 100.0,
            origin_y: 0.5,
            lifetime: 30,
        },
    }
}

/// Position and velocity are fractions of the drawing area.
#[derive(Debug, Clone)]
pub struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    glyph: char,
    color: Color,
    ttl: u16,
}

#[derive(Debug)]
pub struct Confetti {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Default for Confetti {
    fn default() -> Self {
        Self::new()
    }
}

impl Confetti {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            rng,
        }
    }

    pub fn burst(&mut self, intensity: Intensity) {
        let shape = shape(intensity);
        let half_spread = shape.spread_degrees.to_radians() / 2.0;

        for _ in 0..shape.particles {
            let angle = self.rng.gen_range(-half_spread..=half_spread);
            let speed: f32 = self.rng.gen_range(0.02..0.05);
            self.particles.push(Particle {
                x: 0.5,
                y: shape.origin_y,
                vx: speed * angle.sin(),
                vy: -speed * angle.cos(),
                glyph: GLYPHS[self.rng.gen_range(0..GLYPHS.len())],
                color: COLORS[self.rng.gen_range(0..COLORS.len())],
                ttl: shape.lifetime + self.rng.gen_range(0..6u16),
            });
        }
    }

    /// Advance the animation by one frame and drop spent particles.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY;
            p.ttl = p.ttl.saturating_sub(1);
        }
        self.particles
            .retain(|p| p.ttl > 0 && (0.0..=1.0).contains(&p.x) && p.y <= 1.0);
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }
}

impl Celebrator for Confetti {
    fn celebrate(&mut self, intensity: Intensity) {
        self.burst(intensity);
    }
}

pub fn render(frame: &mut Frame, area: Rect, confetti: &Confetti) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let buffer = frame.buffer_mut();
    for p in &confetti.particles {
        if p.y < 0.0 {
            continue;
        }
        let x = area.x + (p.x * f32::from(area.width - 1)) as u16;
        let y = area.y + (p.y * f32::from(area.height - 1)) as u16;
        if let Some(cell) = buffer.cell_mut((x, y)) {
            cell.set_char(p.glyph).set_fg(p.color);
        }
    }
}
