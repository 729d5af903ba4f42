// The eraser core: turns one contact sample per tick into block stamps on a surface.
// Visual expectation: holding the eraser on the board leaves a solid band of
// background color, with no gaps even when the tip moves fast between ticks.

use image::Rgba;

use crate::config::{ConfigError, EraserConfig};
use crate::surface::Surface;
use crate::types::{BlockOrigin, ContactSample, StrokePhase, StrokeState};

/// Gap-filling stamps between two consecutive origins are taken at f = k / STEPS, k = 1..=STEPS.
pub const INTERPOLATION_STEPS: u32 = 100;

pub struct StrokePainter {
    config: EraserConfig,
    state: StrokeState,
    // Surface extent the config was validated against
    extent: (u32, u32),
    // Uniform block of `config.color`, block_size² long (hard erase)
    fill: Vec<Rgba<u8>>,
    // Reused read-back buffer (soft erase)
    scratch: Vec<Rgba<u8>>,
}

impl StrokePainter {
    /// Validate `config` against `surface` and start Idle.
    pub fn new<S: Surface + ?Sized>(config: EraserConfig, surface: &S) -> Result<Self, ConfigError> {
        let extent = (surface.width(), surface.height());
        config.validate(extent.0, extent.1)?;
        Ok(Self {
            fill: uniform_block(config.block_size, config.color),
            scratch: Vec::with_capacity((config.block_size * config.block_size) as usize),
            config,
            state: StrokeState::default(),
            extent,
        })
    }

    /// Swap in a new configuration. On error the previous one stays active.
    pub fn reconfigure(&mut self, config: EraserConfig) -> Result<(), ConfigError> {
        config.validate(self.extent.0, self.extent.1)?;
        if config.block_size != self.config.block_size || config.color != self.config.color {
            self.fill = uniform_block(config.block_size, config.color);
        }
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &EraserConfig {
        &self.config
    }

    pub fn state(&self) -> &StrokeState {
        &self.state
    }

    pub fn phase(&self) -> StrokePhase {
        self.state.phase()
    }

    /// Break the current stroke; the next contact will not connect to the old one.
    pub fn reset(&mut self) {
        if self.state.last_contact {
            tracing::debug!("stroke ended");
        }
        self.state.last_contact = false;
    }

    /// Advance one tick. `surface` is `None` when the tip touches nothing paintable.
    ///
    /// Returns how many blocks were stamped (0 for an idle or skipped tick).
    pub fn process_sample<S: Surface + ?Sized>(&mut self, sample: ContactSample, surface: Option<&mut S>) -> usize {
        let Some(surface) = surface else {
            self.reset();
            return 0;
        };
        if !sample.valid {
            self.reset();
            return 0;
        }

        let (width, height) = (surface.width(), surface.height());
        let size = self.config.block_size;
        if size > width || size > height {
            tracing::warn!(size, width, height, "eraser block no longer fits the surface; skipping tick");
            self.reset();
            return 0;
        }
        if (width, height) != self.extent {
            tracing::debug!(width, height, "surface extent changed");
            self.extent = (width, height);
        }

        let origin = BlockOrigin {
            x: axis_origin(sample.u, width, size),
            y: axis_origin(sample.v, height, size),
        };

        self.stamp_block(surface, origin);
        let mut stamps = 1;

        if self.state.last_contact {
            let last = self.state.last_origin;
            let (max_x, max_y) = (width - size, height - size);
            for step in 1..=INTERPOLATION_STEPS {
                let f = step as f32 / INTERPOLATION_STEPS as f32;
                let x = lerp_clamped(last.x, origin.x, f, max_x);
                let y = lerp_clamped(last.y, origin.y, f, max_y);
                self.stamp_block(surface, BlockOrigin { x, y });
                stamps += 1;
            }
        } else {
            tracing::debug!(x = origin.x, y = origin.y, "stroke started");
        }

        surface.commit();
        tracing::trace!(x = origin.x, y = origin.y, stamps, "tick painted");

        self.state.last_origin = origin;
        self.state.last_contact = true;
        stamps
    }

    /// Write one block at `origin`: overwrite when hard, blend towards the color when soft.
    fn stamp_block<S: Surface + ?Sized>(&mut self, surface: &mut S, origin: BlockOrigin) {
        let size = self.config.block_size;
        if self.config.is_hard() {
            surface.set_rect(origin.x, origin.y, size, size, &self.fill);
            return;
        }

        surface.get_rect(origin.x, origin.y, size, size, &mut self.scratch);
        let (target, keep) = (self.config.color, self.config.softness);
        for px in &mut self.scratch {
            *px = blend(*px, target, keep);
        }
        surface.set_rect(origin.x, origin.y, size, size, &self.scratch);
    }
}

/// Block origin along one axis: centered on the contact, clamped so the block stays inside.
fn axis_origin(t: f32, extent: u32, size: u32) -> u32 {
    let max = i64::from(extent - size);
    // NaN casts to 0 and infinities saturate; both then clamp.
    let start = (t * extent as f32).floor() as i64 - i64::from(size / 2);
    start.clamp(0, max) as u32
}

fn lerp_clamped(from: u32, to: u32, f: f32, max: u32) -> u32 {
    let v = (from as f32 + (to as f32 - from as f32) * f).round();
    (v.max(0.0) as u32).min(max)
}

/// Move `existing` towards `target`, keeping `keep` of the existing value per channel.
#[inline]
fn blend(existing: Rgba<u8>, target: Rgba<u8>, keep: f32) -> Rgba<u8> {
    let mut out = [0u8; 4];
    for (c, o) in out.iter_mut().enumerate() {
        let (e, t) = (existing.0[c] as f32, target.0[c] as f32);
        *o = (t + (e - t) * keep).round().clamp(0.0, 255.0) as u8;
    }
    Rgba(out)
}

fn uniform_block(size: u32, color: Rgba<u8>) -> Vec<Rgba<u8>> {
    vec![color; (size * size) as usize]
}

#[cfg(test)]
#[path = "painter_test.rs"]
mod tests;
