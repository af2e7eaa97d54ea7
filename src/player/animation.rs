//! Frame-gated animation state machine for the player.
//!
//! Every animation is a list of frames. A frame either holds for a number
//! of ticks or waits for the player's feet to cross a height above the
//! ground. Entering certain frames fires a side effect: the swat impact,
//! the pickup reach and the jump launch.

use bevy::prelude::*;
use crate::shared::*;
use super::movement::{ATTACK_DELAY, JUMP_SPEED, JUMP_STAMINA_COST, SWAT_STAMINA_COST};

pub const SWAT_IMPACT_FRAME: usize = 2;
pub const PICK_REACH_FRAME: usize = 1;
pub const JUMP_LAUNCH_FRAME: usize = 1;

const WALK_WEIGHTS: [f64; 7] = [0.1, 0.2, 0.3, 0.2, 0.2, 0.3, 0.1];
const WALK_TOTAL_FRAMES: u32 = 36;
const RUN_WEIGHTS: [f64; 6] = [0.1, 0.1, 0.3, 0.1, 0.1, 0.3];
const RUN_TOTAL_FRAMES: u32 = 28;
const SWAT_WEIGHTS: [f64; 4] = [0.1, 0.2, 0.2, 0.1];
pub const SWAT_TOTAL_FRAMES: u32 = 28;
const PICK_WEIGHTS: [f64; 3] = [0.1, 0.4, 0.1];
const PICK_TOTAL_FRAMES: u32 = 20;

/// How a frame decides it is done.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameGate {
    /// Hold for this many ticks, then advance on the next one.
    Hold(u32),
    /// Advance once the feet are at least this far above the ground.
    Rise(f32),
    /// Advance once the feet are back within this distance of the ground.
    Fall(f32),
}

/// Per-frame hold lengths: `ceil(weight / Σweights × total_frames)`.
pub fn frame_holds(weights: &[f64], total_frames: u32) -> Vec<u32> {
    let sum: f64 = weights.iter().sum();
    weights
        .iter()
        .map(|w| (w / sum * total_frames as f64).ceil() as u32)
        .collect()
}

fn hold_frames(weights: &[f64], total_frames: u32) -> Vec<FrameGate> {
    frame_holds(weights, total_frames)
        .into_iter()
        .map(FrameGate::Hold)
        .collect()
}

/// Frame tables for every animated state, built once at startup.
#[derive(Resource, Debug, Clone)]
pub struct AnimationClips {
    pub walk: Vec<FrameGate>,
    pub run: Vec<FrameGate>,
    pub swat: Vec<FrameGate>,
    pub pick: Vec<FrameGate>,
    pub jump: Vec<FrameGate>,
}

impl Default for AnimationClips {
    fn default() -> Self {
        Self {
            walk: hold_frames(&WALK_WEIGHTS, WALK_TOTAL_FRAMES),
            run: hold_frames(&RUN_WEIGHTS, RUN_TOTAL_FRAMES),
            swat: hold_frames(&SWAT_WEIGHTS, SWAT_TOTAL_FRAMES),
            pick: hold_frames(&PICK_WEIGHTS, PICK_TOTAL_FRAMES),
            // crouch, rise, apex, fall, land
            jump: vec![
                FrameGate::Hold(8),
                FrameGate::Rise(70.0),
                FrameGate::Fall(72.0),
                FrameGate::Fall(1.0),
                FrameGate::Hold(8),
            ],
        }
    }
}

impl AnimationClips {
    pub fn frames(&self, kind: AnimationKind) -> &[FrameGate] {
        match kind {
            AnimationKind::Idle => &[],
            AnimationKind::Walking => &self.walk,
            AnimationKind::Running => &self.run,
            AnimationKind::Jumping => &self.jump,
            AnimationKind::Picking => &self.pick,
            AnimationKind::Swatting => &self.swat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAdvance {
    Held,
    Entered(usize),
    Finished,
}

/// Advances the cursor by one tick against the current frame's gate.
/// `settled` lets a position-gated frame give up when the player is back
/// on the ground and not rising.
pub fn advance_frame(
    animator: &mut Animator,
    frames: &[FrameGate],
    height_above_ground: f32,
    settled: bool,
) -> FrameAdvance {
    let Some(gate) = frames.get(animator.frame) else {
        return FrameAdvance::Finished;
    };
    let ready = match *gate {
        FrameGate::Hold(ticks) => {
            if animator.ticks < ticks {
                animator.ticks += 1;
                false
            } else {
                true
            }
        }
        FrameGate::Rise(height) => height_above_ground >= height || settled,
        FrameGate::Fall(height) => height_above_ground <= height || settled,
    };
    if !ready {
        return FrameAdvance::Held;
    }
    animator.ticks = 0;
    animator.frame += 1;
    if animator.frame >= frames.len() {
        FrameAdvance::Finished
    } else {
        FrameAdvance::Entered(animator.frame)
    }
}

/// Highest-priority animation the motion flags ask for.
pub fn desired_animation(motion: &MotionFlags) -> AnimationKind {
    if motion.swatting {
        AnimationKind::Swatting
    } else if motion.picking {
        AnimationKind::Picking
    } else if motion.jumping {
        AnimationKind::Jumping
    } else if motion.running {
        AnimationKind::Running
    } else if motion.walking {
        AnimationKind::Walking
    } else {
        AnimationKind::Idle
    }
}

/// World interaction requested by an animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCue {
    Swat,
    Pickup,
}

/// Runs one tick of the active animation and applies its frame effects.
pub fn step_animation(
    player: &mut PlayerState,
    clips: &AnimationClips,
    racket_selected: bool,
) -> Option<PlayerCue> {
    if player.motion.swatting && !racket_selected {
        player.motion.swatting = false;
    }

    let kind = desired_animation(&player.motion);
    if player.animator.kind != kind {
        player.animator = Animator::start(kind);
    }
    if kind == AnimationKind::Idle {
        return None;
    }

    let height = GROUND_Y - player.position.y;
    let settled = player.on_ground && player.velocity.y >= 0.0;
    let step = advance_frame(&mut player.animator, clips.frames(kind), height, settled);

    match (kind, step) {
        (_, FrameAdvance::Held) => None,
        (AnimationKind::Walking | AnimationKind::Running, FrameAdvance::Finished) => {
            player.animator.frame = 0;
            None
        }
        (AnimationKind::Swatting, FrameAdvance::Finished) => {
            player.motion.swatting = false;
            player.animator.frame = 0;
            None
        }
        (AnimationKind::Swatting, FrameAdvance::Entered(SWAT_IMPACT_FRAME)) => {
            player.attack_cooldown = ATTACK_DELAY;
            player.stamina = (player.stamina - SWAT_STAMINA_COST).max(0);
            Some(PlayerCue::Swat)
        }
        (AnimationKind::Picking, FrameAdvance::Finished) => {
            player.motion.picking = false;
            player.animator.frame = 0;
            None
        }
        (AnimationKind::Picking, FrameAdvance::Entered(PICK_REACH_FRAME)) => Some(PlayerCue::Pickup),
        (AnimationKind::Jumping, FrameAdvance::Finished) => {
            // Holding jump through the landing chains into the next jump.
            player.motion.jumping = player.keys.jump;
            player.animator.frame = 0;
            None
        }
        (AnimationKind::Jumping, FrameAdvance::Entered(JUMP_LAUNCH_FRAME)) => {
            if player.on_ground && player.stamina >= JUMP_STAMINA_COST {
                player.velocity.y = JUMP_SPEED;
                player.on_ground = false;
                player.stamina -= JUMP_STAMINA_COST;
            } else {
                player.motion.jumping = false;
                player.animator.frame = 0;
            }
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded_player() -> PlayerState {
        PlayerState {
            position: Vec2::new(800.0, GROUND_Y),
            on_ground: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_frame_holds_round_up() {
        assert_eq!(frame_holds(&WALK_WEIGHTS, WALK_TOTAL_FRAMES), vec![3, 6, 8, 6, 6, 8, 3]);
        assert_eq!(frame_holds(&RUN_WEIGHTS, RUN_TOTAL_FRAMES), vec![3, 3, 9, 3, 3, 9]);
        assert_eq!(frame_holds(&SWAT_WEIGHTS, SWAT_TOTAL_FRAMES), vec![5, 10, 10, 5]);
        assert_eq!(frame_holds(&PICK_WEIGHTS, PICK_TOTAL_FRAMES), vec![4, 14, 4]);
    }

    #[test]
    fn test_priority_order() {
        let mut motion = MotionFlags {
            walking: true,
            running: true,
            jumping: true,
            picking: true,
            swatting: true,
        };
        assert_eq!(desired_animation(&motion), AnimationKind::Swatting);
        motion.swatting = false;
        assert_eq!(desired_animation(&motion), AnimationKind::Picking);
        motion.picking = false;
        assert_eq!(desired_animation(&motion), AnimationKind::Jumping);
        motion.jumping = false;
        assert_eq!(desired_animation(&motion), AnimationKind::Running);
        motion.running = false;
        assert_eq!(desired_animation(&motion), AnimationKind::Walking);
        motion.walking = false;
        assert_eq!(desired_animation(&motion), AnimationKind::Idle);
    }

    #[test]
    fn test_hold_frame_waits_its_ticks() {
        let mut animator = Animator::start(AnimationKind::Picking);
        let frames = [FrameGate::Hold(2), FrameGate::Hold(1)];
        assert_eq!(advance_frame(&mut animator, &frames, 0.0, true), FrameAdvance::Held);
        assert_eq!(advance_frame(&mut animator, &frames, 0.0, true), FrameAdvance::Held);
        assert_eq!(advance_frame(&mut animator, &frames, 0.0, true), FrameAdvance::Entered(1));
    }

    #[test]
    fn test_position_gates_use_height() {
        let mut animator = Animator {
            kind: AnimationKind::Jumping,
            frame: 1,
            ticks: 0,
        };
        let frames = AnimationClips::default().jump;
        assert_eq!(advance_frame(&mut animator, &frames, 40.0, false), FrameAdvance::Held);
        assert_eq!(advance_frame(&mut animator, &frames, 71.0, false), FrameAdvance::Entered(2));
        assert_eq!(advance_frame(&mut animator, &frames, 80.0, false), FrameAdvance::Held);
        assert_eq!(advance_frame(&mut animator, &frames, 72.0, false), FrameAdvance::Entered(3));
        assert_eq!(advance_frame(&mut animator, &frames, 0.0, true), FrameAdvance::Entered(4));
    }

    #[test]
    fn test_swat_impact_fires_once_and_costs_stamina() {
        let clips = AnimationClips::default();
        let mut player = grounded_player();
        player.motion.swatting = true;
        let mut cues = Vec::new();
        for _ in 0..40 {
            if let Some(cue) = step_animation(&mut player, &clips, true) {
                cues.push(cue);
            }
        }
        assert_eq!(cues, vec![PlayerCue::Swat]);
        assert_eq!(player.stamina, MAX_STAMINA - SWAT_STAMINA_COST);
        assert_eq!(player.attack_cooldown, ATTACK_DELAY);
        assert!(!player.motion.swatting, "swat ends after its last frame");
    }

    #[test]
    fn test_swat_without_racket_cancels() {
        let clips = AnimationClips::default();
        let mut player = grounded_player();
        player.motion.swatting = true;
        assert_eq!(step_animation(&mut player, &clips, false), None);
        assert!(!player.motion.swatting);
        assert_eq!(player.animator.kind, AnimationKind::Idle);
    }

    #[test]
    fn test_pick_reaches_on_frame_one() {
        let clips = AnimationClips::default();
        let mut player = grounded_player();
        player.motion.picking = true;
        let mut reached_at = None;
        for tick in 0..30 {
            if step_animation(&mut player, &clips, false) == Some(PlayerCue::Pickup) {
                reached_at = Some(tick);
            }
        }
        // frame 0 holds for 4 ticks and advances on the fifth
        assert_eq!(reached_at, Some(4));
        assert!(!player.motion.picking);
    }

    #[test]
    fn test_jump_launch_needs_stamina() {
        let clips = AnimationClips::default();
        let mut player = grounded_player();
        player.stamina = JUMP_STAMINA_COST - 1;
        player.motion.jumping = true;
        for _ in 0..9 {
            step_animation(&mut player, &clips, false);
        }
        assert!(!player.motion.jumping, "jump cancels without stamina");
        assert_eq!(player.velocity.y, 0.0);
        assert_eq!(player.animator.frame, 0);
    }

    #[test]
    fn test_jump_launch_applies_velocity() {
        let clips = AnimationClips::default();
        let mut player = grounded_player();
        player.motion.jumping = true;
        for _ in 0..9 {
            step_animation(&mut player, &clips, false);
        }
        assert_eq!(player.velocity.y, JUMP_SPEED);
        assert!(!player.on_ground);
        assert_eq!(player.stamina, MAX_STAMINA - JUMP_STAMINA_COST);
    }
}
