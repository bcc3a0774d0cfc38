//! Tunable spark parameters with per-field random modes.
//!
//! Each numeric tunable carries a baseline (the value it had at construction
//! or the last reset) and a random-mode flag. While the flag is set, every
//! spark-creation event redraws the field from its fixed range. Turning the
//! flag off snaps the field back to its baseline before the adjustment is
//! applied, so every spark created afterwards sees the same value.

use super::rng::Rng;

/// Numeric tunables that support random mode and incremental adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tunable {
    Limit,
    SpawnRate,
    VelocityRate,
    Gravity,
    Size,
    FadeRate,
}

impl Tunable {
    pub const ALL: [Tunable; 6] = [
        Self::Limit, Self::SpawnRate, Self::VelocityRate,
        Self::Gravity, Self::Size, Self::FadeRate,
    ];

    /// Range a randomized value is drawn from.
    pub fn random_range(self) -> (f32, f32) {
        match self {
            Self::Limit => (1.0, 10.0),
            Self::SpawnRate => (0.0, 500.0),
            Self::VelocityRate => (0.1, 2.0),
            Self::Gravity => (0.0, 0.01),
            Self::Size => (1.0, 4.0),
            Self::FadeRate => (0.0, 0.1),
        }
    }

    /// Lowest value a manual adjustment can produce.
    pub fn floor(self) -> f32 {
        match self {
            Self::Size => 1.0,
            _ => 0.0,
        }
    }
}

/// Values the tunables return to when random mode is switched off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub limit: f32,
    pub spawn_rate: f32,
    pub velocity_rate: f32,
    pub gravity: f32,
    pub size: f32,
    pub fade_rate: f32,
    pub swade: bool,
}

/// Random-mode flags, one per tunable plus swade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomModes {
    pub limit: bool,
    pub spawn_rate: bool,
    pub velocity_rate: bool,
    pub gravity: bool,
    pub size: bool,
    pub fade_rate: bool,
    pub swade: bool,
}

impl RandomModes {
    fn flag_mut(&mut self, tunable: Tunable) -> &mut bool {
        match tunable {
            Tunable::Limit => &mut self.limit,
            Tunable::SpawnRate => &mut self.spawn_rate,
            Tunable::VelocityRate => &mut self.velocity_rate,
            Tunable::Gravity => &mut self.gravity,
            Tunable::Size => &mut self.size,
            Tunable::FadeRate => &mut self.fade_rate,
        }
    }

    pub fn is_random(&self, tunable: Tunable) -> bool {
        match tunable {
            Tunable::Limit => self.limit,
            Tunable::SpawnRate => self.spawn_rate,
            Tunable::VelocityRate => self.velocity_rate,
            Tunable::Gravity => self.gravity,
            Tunable::Size => self.size,
            Tunable::FadeRate => self.fade_rate,
        }
    }
}

/// Live spark parameters read at every spark creation.
#[derive(Debug, Clone, PartialEq)]
pub struct SparkProperties {
    /// Reserved: stored and adjustable, never enforced as a spark cap.
    pub limit: f32,
    pub spawn_rate: f32,
    pub velocity_rate: f32,
    /// Added to a spark's vertical velocity every step.
    pub gravity: f32,
    pub size: f32,
    /// Color decrement accumulated every step.
    pub fade_rate: f32,
    pub swade: bool,
    pub threshold: f32,
    pub random: RandomModes,
    baseline: Baseline,
}

impl Default for SparkProperties {
    fn default() -> Self {
        let baseline = Baseline {
            limit: 2.0,
            spawn_rate: 50.0,
            velocity_rate: 1.0,
            gravity: 0.0,
            size: 1.5,
            fade_rate: 0.05,
            swade: false,
        };
        Self {
            limit: baseline.limit,
            spawn_rate: baseline.spawn_rate,
            velocity_rate: baseline.velocity_rate,
            gravity: baseline.gravity,
            size: baseline.size,
            fade_rate: baseline.fade_rate,
            swade: baseline.swade,
            threshold: 0.05,
            random: RandomModes::default(),
            baseline,
        }
    }
}

impl SparkProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every field, baseline and flag to the defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    pub fn get(&self, tunable: Tunable) -> f32 {
        match tunable {
            Tunable::Limit => self.limit,
            Tunable::SpawnRate => self.spawn_rate,
            Tunable::VelocityRate => self.velocity_rate,
            Tunable::Gravity => self.gravity,
            Tunable::Size => self.size,
            Tunable::FadeRate => self.fade_rate,
        }
    }

    fn get_mut(&mut self, tunable: Tunable) -> &mut f32 {
        match tunable {
            Tunable::Limit => &mut self.limit,
            Tunable::SpawnRate => &mut self.spawn_rate,
            Tunable::VelocityRate => &mut self.velocity_rate,
            Tunable::Gravity => &mut self.gravity,
            Tunable::Size => &mut self.size,
            Tunable::FadeRate => &mut self.fade_rate,
        }
    }

    fn baseline_of(&self, tunable: Tunable) -> f32 {
        let b = &self.baseline;
        match tunable {
            Tunable::Limit => b.limit,
            Tunable::SpawnRate => b.spawn_rate,
            Tunable::VelocityRate => b.velocity_rate,
            Tunable::Gravity => b.gravity,
            Tunable::Size => b.size,
            Tunable::FadeRate => b.fade_rate,
        }
    }

    /// Redraw every field whose random mode is on. Called once per spark creation.
    pub fn randomize_properties(&mut self, rng: &mut Rng) {
        for tunable in Tunable::ALL {
            if self.random.is_random(tunable) {
                let (min, max) = tunable.random_range();
                *self.get_mut(tunable) = rng.range_f32(min, max);
            }
        }
        if self.random.swade {
            self.swade = rng.next_bool();
        }
    }

    pub fn set_random(&mut self, tunable: Tunable) {
        *self.random.flag_mut(tunable) = true;
    }

    /// Leave random mode (snapping to the baseline if it was on), then add
    /// `delta`, clamped at the tunable's floor.
    pub fn adjust(&mut self, tunable: Tunable, delta: f32) {
        if self.random.is_random(tunable) {
            let base = self.baseline_of(tunable);
            *self.get_mut(tunable) = base;
        }
        let floor = tunable.floor();
        let value = self.get_mut(tunable);
        *value = (*value + delta).max(floor);
        *self.random.flag_mut(tunable) = false;
    }

    /// Clear swade random mode. A randomized swade goes back to off; a fixed
    /// one is flipped.
    pub fn toggle_swade(&mut self) {
        if self.random.swade {
            self.swade = false;
        } else {
            self.swade = !self.swade;
        }
        self.random.swade = false;
    }

    pub fn adjust_threshold(&mut self, delta: f32) {
        self.threshold = (self.threshold + delta).max(0.0);
    }
}
