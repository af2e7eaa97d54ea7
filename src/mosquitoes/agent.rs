//! Per-mosquito motion: wander around home, home in on the player, bite.

use bevy::prelude::*;
use rand::Rng;
use crate::shared::*;

pub const MOSQUITO_WIDTH: f32 = 27.0;
pub const MOSQUITO_HEIGHT: f32 = 20.0;

pub const MAX_SPEED: f32 = 4.8;
pub const BASE_SPEED: f32 = 0.4;
const WANDER_RADIUS: f32 = 240.0;
const WANDER_SPREAD: f32 = 100.0;
const END_TICK: i32 = 20;
const END_TICK_SPREAD: i32 = 20;
/// Heading offset either side of the bearing home, in degrees.
const HOME_BIAS_DEGREES: f32 = 45.0;

pub const BITE_DAMAGE: i32 = 4;
pub const RECOGNITION_RANGE: f32 = 240.0;
pub const ATTACK_RANGE: f32 = 15.0;
pub const ATTACK_DELAY: i32 = 70;
const CORRECTION_TICKS: i32 = 6;

/// What a mosquito did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosquitoAction {
    Wander,
    Correct,
    Attack { bit: bool },
}

impl Mosquito {
    pub fn new(home: Vec2, rng: &mut impl Rng) -> Self {
        let mut mosquito = Self {
            home,
            velocity: Vec2::ZERO,
            wander_radius: WANDER_RADIUS + rng.gen::<f32>() * 2.0 * WANDER_SPREAD - WANDER_SPREAD,
            attack_cooldown: 0,
            correction: 0,
            movement_tick: 0,
            end_tick: 0,
        };
        mosquito.pick_heading(home, rng);
        mosquito
    }

    /// Chooses a fresh wander heading. Away from home the heading is biased
    /// back toward it.
    pub fn pick_heading(&mut self, position: Vec2, rng: &mut impl Rng) {
        let speed = rng.gen_range(BASE_SPEED..MAX_SPEED);
        let angle = if position == self.home {
            rng.gen_range(0.0..360.0_f32)
        } else {
            let to_home = self.home - position;
            to_home.y.atan2(to_home.x).to_degrees()
                + rng.gen_range(-HOME_BIAS_DEGREES..=HOME_BIAS_DEGREES)
        };
        self.velocity = Vec2::from_angle(angle.to_radians()) * speed;
        self.movement_tick = 0;
        self.end_tick = END_TICK + rng.gen_range(0..2 * END_TICK_SPREAD) - END_TICK_SPREAD;
    }

    /// Advances one tick. `target` is the player's torso; the returned
    /// action says whether the mosquito bit this tick.
    pub fn tick(&mut self, position: &mut Vec2, target: Vec2, rng: &mut impl Rng) -> MosquitoAction {
        let action = if position.distance_squared(target) <= RECOGNITION_RANGE * RECOGNITION_RANGE
            && self.attack_cooldown <= 0
        {
            self.velocity = (target - *position).normalize_or_zero() * MAX_SPEED;
            self.movement_tick = 0;
            self.end_tick = 0;
            *position += self.velocity;

            let bit = position.distance_squared(target) <= ATTACK_RANGE * ATTACK_RANGE;
            if bit {
                self.attack_cooldown = ATTACK_DELAY;
            }
            MosquitoAction::Attack { bit }
        } else {
            let home_radius = self.wander_radius * self.wander_radius;
            let action = if position.distance_squared(self.home) <= home_radius || self.correction > 0 {
                *position += self.velocity;
                self.correction = (self.correction - 1).max(0);
                MosquitoAction::Wander
            } else {
                self.pick_heading(*position, rng);
                self.correction = CORRECTION_TICKS;
                MosquitoAction::Correct
            };
            if self.attack_cooldown > 0 {
                self.attack_cooldown -= 1;
            }
            self.movement_tick += 1;
            if self.movement_tick >= self.end_tick {
                self.pick_heading(*position, rng);
            }
            action
        };

        if position.y > GROUND_Y {
            self.velocity.y = -self.velocity.y.abs();
        } else if position.y < GROUND_Y - self.wander_radius {
            self.velocity.y = self.velocity.y.abs();
        }
        action
    }
}

/// Moves every mosquito and applies bites to the player.
pub fn move_mosquitoes(
    mut mosquitoes: Query<(&mut Mosquito, &mut MapPosition, &mut ScreenX)>,
    mut player: ResMut<PlayerState>,
    camera: Res<CameraShift>,
    mut rng: ResMut<SimRng>,
) {
    let target = player.torso();
    for (mut mosquito, mut pos, mut screen_x) in &mut mosquitoes {
        if let MosquitoAction::Attack { bit: true } = mosquito.tick(&mut pos.0, target, &mut rng.0) {
            player.take_damage(BITE_DAMAGE);
            debug!("[Mosquito] Bite! health now {}", player.health);
        }
        screen_x.0 = camera.to_screen(pos.0.x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_mosquito_ranges() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let m = Mosquito::new(Vec2::new(3000.0, 500.0), &mut rng);
            assert!(m.wander_radius >= 140.0 && m.wander_radius <= 340.0);
            let speed = m.velocity.length();
            assert!(speed >= BASE_SPEED - 1e-3 && speed <= MAX_SPEED + 1e-3, "speed {}", speed);
            assert!((0..40).contains(&m.end_tick));
        }
    }

    #[test]
    fn test_mosquito_homes_in_and_bites() {
        let mut rng = StdRng::seed_from_u64(4);
        let target = Vec2::new(1000.0, 465.0);
        let mut pos = Vec2::new(1100.0, 465.0);
        let mut m = Mosquito::new(pos, &mut rng);

        let mut bites = 0;
        for _ in 0..40 {
            if let MosquitoAction::Attack { bit: true } = m.tick(&mut pos, target, &mut rng) {
                bites += 1;
            }
        }
        assert_eq!(bites, 1, "one bite, then the cooldown holds it off");
        assert!(m.attack_cooldown > 0);
    }

    #[test]
    fn test_cooldown_blocks_attack_and_decays() {
        let mut rng = StdRng::seed_from_u64(8);
        let target = Vec2::new(1000.0, 465.0);
        let mut pos = Vec2::new(1010.0, 465.0);
        let mut m = Mosquito::new(pos, &mut rng);
        m.attack_cooldown = 5;
        let action = m.tick(&mut pos, target, &mut rng);
        assert!(!matches!(action, MosquitoAction::Attack { .. }));
        assert_eq!(m.attack_cooldown, 4);
    }

    #[test]
    fn test_straying_mosquito_corrects_toward_home() {
        let mut rng = StdRng::seed_from_u64(6);
        let home = Vec2::new(5000.0, 500.0);
        let mut m = Mosquito::new(home, &mut rng);
        let mut pos = home + Vec2::new(m.wander_radius + 50.0, 0.0);
        let far_player = Vec2::new(0.0, 465.0);

        assert_eq!(m.tick(&mut pos, far_player, &mut rng), MosquitoAction::Correct);
        assert_eq!(m.correction, CORRECTION_TICKS);
        assert!(m.velocity.x < 0.0, "heading points back toward home");
    }

    #[test]
    fn test_wander_reheads_when_end_tick_reached() {
        let mut rng = StdRng::seed_from_u64(12);
        let home = Vec2::new(5000.0, 500.0);
        let mut m = Mosquito::new(home, &mut rng);
        let heading = Vec2::new(1.0, 0.0);
        m.velocity = heading;
        m.movement_tick = 0;
        m.end_tick = 3;
        let mut pos = home;
        let far_player = Vec2::new(0.0, 465.0);

        for expected_tick in 1..3 {
            assert_eq!(m.tick(&mut pos, far_player, &mut rng), MosquitoAction::Wander);
            assert_eq!(m.velocity, heading, "heading holds before the end tick");
            assert_eq!(m.movement_tick, expected_tick);
        }

        assert_eq!(m.tick(&mut pos, far_player, &mut rng), MosquitoAction::Wander);
        assert_eq!(m.movement_tick, 0, "the wander clock restarts");
        assert!((0..40).contains(&m.end_tick), "end tick {}", m.end_tick);
        assert_ne!(m.velocity, heading, "a fresh heading was rolled");
        let speed = m.velocity.length();
        assert!(speed >= BASE_SPEED - 1e-3 && speed <= MAX_SPEED + 1e-3, "speed {}", speed);
        let off_bearing = m.velocity.angle_to(home - pos).to_degrees().abs();
        assert!(
            off_bearing <= HOME_BIAS_DEGREES + 1e-2,
            "away from home the new heading leans back toward it ({} degrees off)",
            off_bearing
        );
    }

    #[test]
    fn test_grace_window_keeps_heading_outside_radius() {
        let mut rng = StdRng::seed_from_u64(14);
        let home = Vec2::new(5000.0, 500.0);
        let mut m = Mosquito::new(home, &mut rng);
        let outward = Vec2::new(2.0, 0.0);
        m.velocity = outward;
        m.movement_tick = 0;
        m.end_tick = 100;
        m.correction = 3;
        let start = home + Vec2::new(m.wander_radius + 50.0, 0.0);
        let mut pos = start;
        let far_player = Vec2::new(0.0, 465.0);

        for remaining in (0..3).rev() {
            assert_eq!(m.tick(&mut pos, far_player, &mut rng), MosquitoAction::Wander);
            assert_eq!(m.velocity, outward, "no re-pick toward home during the grace window");
            assert_eq!(m.correction, remaining);
        }
        assert!(
            pos.distance(start + outward * 3.0) < 1e-3,
            "kept flying along the old heading"
        );

        assert_eq!(
            m.tick(&mut pos, far_player, &mut rng),
            MosquitoAction::Correct,
            "the boundary check applies again once the window closes"
        );
        assert!(m.velocity.x < 0.0, "heading points back toward home");
    }

    #[test]
    fn test_vertical_bounds_flip_velocity() {
        let mut rng = StdRng::seed_from_u64(10);
        let home = Vec2::new(5000.0, GROUND_Y - 5.0);
        let mut m = Mosquito::new(home, &mut rng);
        m.velocity = Vec2::new(0.0, 8.0);
        m.end_tick = 100;
        let mut pos = home;
        m.tick(&mut pos, Vec2::new(0.0, 465.0), &mut rng);
        assert!(pos.y > GROUND_Y);
        assert!(m.velocity.y < 0.0, "bounced off the ground");
    }
}
