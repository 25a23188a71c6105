use crate::constants::PROGRESS_STEP;

// Absorbs float drift from repeated stepping.
const SNAP_EPSILON: f32 = 1e-5;

/// Coarse reading of where the blend currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Tree,
    Transitioning,
    Scattered,
}

/// Owns the scene-wide blend value and walks it toward 0 (tree) or 1
/// (scattered) by a fixed step each frame.
#[derive(Clone, Debug)]
pub struct ProgressController {
    progress: f32,
    exploded: bool,
    step: f32,
}

impl Default for ProgressController {
    fn default() -> Self {
        Self::new(PROGRESS_STEP)
    }
}

impl ProgressController {
    pub fn new(step: f32) -> Self {
        Self {
            progress: 0.0,
            exploded: false,
            step,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn is_exploded(&self) -> bool {
        self.exploded
    }

    #[inline]
    pub fn target(&self) -> f32 {
        if self.exploded {
            1.0
        } else {
            0.0
        }
    }

    /// One-way trigger; repeated calls are no-ops.
    pub fn explode(&mut self) {
        if !self.exploded {
            log::info!("[progress] explode");
        }
        self.exploded = true;
    }

    pub fn reset(&mut self) {
        if self.exploded {
            log::info!("[progress] reset");
        }
        self.exploded = false;
    }

    /// `true` explodes, `false` resets.
    pub fn trigger(&mut self, explode: bool) {
        if explode {
            self.explode();
        } else {
            self.reset();
        }
    }

    /// Advance one frame. Snaps onto the target once within a step, so the
    /// value never overshoots and settles exactly on 0 or 1.
    pub fn tick(&mut self) -> f32 {
        let target = self.target();
        if (self.progress - target).abs() < self.step + SNAP_EPSILON {
            self.progress = target;
        } else if target > self.progress {
            self.progress = (self.progress + self.step).min(1.0);
        } else {
            self.progress = (self.progress - self.step).max(0.0);
        }
        self.progress
    }

    pub fn phase(&self) -> Phase {
        if self.progress <= 0.0 {
            Phase::Tree
        } else if self.progress >= 1.0 {
            Phase::Scattered
        } else {
            Phase::Transitioning
        }
    }
}
