//! Slowly drifting sky: a frame index that wanders up and down.

use bevy::prelude::*;
use rand::Rng;
use crate::shared::*;

pub const BACKGROUND_FRAMES: usize = 5;
/// Ticks between sway rolls.
pub const SWAY_PERIOD: u32 = 60;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundSway {
    pub frame: usize,
    pub ticks: u32,
}

impl Default for BackgroundSway {
    fn default() -> Self {
        Self {
            frame: BACKGROUND_FRAMES / 2,
            ticks: 0,
        }
    }
}

impl BackgroundSway {
    /// Every period the frame steps down or up with a third chance each.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        self.ticks += 1;
        if self.ticks < SWAY_PERIOD {
            return;
        }
        self.ticks = 0;
        match rng.gen_range(0..3) {
            0 => self.frame = self.frame.saturating_sub(1),
            1 => self.frame = (self.frame + 1).min(BACKGROUND_FRAMES - 1),
            _ => {}
        }
    }
}

pub fn sway_background(mut sway: ResMut<BackgroundSway>, mut rng: ResMut<SimRng>) {
    sway.tick(&mut rng.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sway_only_moves_on_period_and_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut sway = BackgroundSway::default();
        assert_eq!(sway.frame, 2);
        for _ in 0..SWAY_PERIOD - 1 {
            sway.tick(&mut rng);
        }
        assert_eq!(sway.frame, 2, "no roll before the period ends");

        let mut seen = [false; BACKGROUND_FRAMES];
        for _ in 0..SWAY_PERIOD * 2000 {
            sway.tick(&mut rng);
            assert!(sway.frame < BACKGROUND_FRAMES);
            seen[sway.frame] = true;
        }
        assert!(seen.iter().all(|s| *s), "every frame is reachable");
    }
}
