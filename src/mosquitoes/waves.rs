//! Wave spawning and swat resolution.

use bevy::prelude::*;
use rand::Rng;
use crate::shared::*;

use super::agent::{MOSQUITO_HEIGHT, MOSQUITO_WIDTH};

const AVG_WAVE: i32 = 3;
const WAVE_RANGE: i32 = 5;
/// Ticks of delay each live mosquito adds before the next wave.
pub const DELAY_PER_MOSQUITO: i32 = 120;
/// Ticks refunded to the wave countdown per swatted mosquito.
pub const SWAT_REFUND: i32 = DELAY_PER_MOSQUITO / 2;
const SPAWN_Y: i32 = GROUND_Y as i32 - 60;
const SPAWN_Y_RANGE: i32 = 100;
/// Waves never start closer to the ground than this.
const SPAWN_CEILING: i32 = GROUND_Y as i32 - 10;
/// Width of the mosquito-free strip around the player's start.
const SPAWN_EXCLUSION: i32 = 1000;

pub const SWAT_START_REACH: f32 = 30.0;
pub const SWAT_END_REACH: f32 = 110.0;
/// Total swats that complete the first quest.
pub const SWATS_FOR_QUEST: u32 = 10;

/// Countdown to the next wave. Starts at zero so the first wave spawns
/// immediately.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MosquitoSpawner {
    pub ticks_remaining: i32,
}

/// Rolls the size and home point of one wave.
pub fn roll_wave(rng: &mut impl Rng) -> (usize, Vec2) {
    let count = (AVG_WAVE + rng.gen_range(0..2 * WAVE_RANGE) - WAVE_RANGE).max(1);
    let mut x = rng.gen_range(0..MAP_END as i32 - SPAWN_EXCLUSION);
    if x > 500 {
        x += SPAWN_EXCLUSION;
    }
    let y = (SPAWN_Y + rng.gen_range(0..2 * SPAWN_Y_RANGE) - SPAWN_Y_RANGE).min(SPAWN_CEILING);
    (count as usize, Vec2::new(x as f32, y as f32))
}

/// Whether a swat from `origin` hits a mosquito at `target`: inside the
/// reach annulus and on the side the player faces.
pub fn swat_hits(origin: Vec2, facing_right: bool, target: Vec2) -> bool {
    let distance = origin.distance(target);
    if !(SWAT_START_REACH..=SWAT_END_REACH).contains(&distance) {
        return false;
    }
    if facing_right {
        target.x >= origin.x
    } else {
        target.x <= origin.x
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Systems
// ═══════════════════════════════════════════════════════════════════════════

pub fn spawn_waves(
    mut commands: Commands,
    mut spawner: ResMut<MosquitoSpawner>,
    mut rng: ResMut<SimRng>,
    mosquitoes: Query<(), With<Mosquito>>,
) {
    if spawner.ticks_remaining > 0 {
        spawner.ticks_remaining -= 1;
        return;
    }

    let (count, home) = roll_wave(&mut rng.0);
    for _ in 0..count {
        commands.spawn((
            Mosquito::new(home, &mut rng.0),
            MapPosition(home),
            ScreenX::default(),
            Footprint {
                width: MOSQUITO_WIDTH,
                height: MOSQUITO_HEIGHT,
            },
        ));
    }
    let population = mosquitoes.iter().count() + count;
    spawner.ticks_remaining = population as i32 * DELAY_PER_MOSQUITO;
    info!(
        "[Mosquito] Wave of {} at x={:.0}; next wave in {} ticks",
        count, home.x, spawner.ticks_remaining
    );
}

/// Removes every mosquito a swat connects with.
pub fn resolve_swats(
    mut commands: Commands,
    mut events: EventReader<SwatEvent>,
    mosquitoes: Query<(Entity, &MapPosition), With<Mosquito>>,
    mut spawner: ResMut<MosquitoSpawner>,
    mut stats: ResMut<SessionStats>,
    quest: Res<QuestLine>,
    mut quest_events: EventWriter<QuestAdvanceEvent>,
) {
    for swat in events.read() {
        let mut hits = 0;
        for (entity, pos) in &mosquitoes {
            if swat_hits(swat.origin, swat.facing_right, pos.0) {
                commands.entity(entity).despawn();
                hits += 1;
            }
        }
        if hits == 0 {
            continue;
        }
        stats.mosquitoes_swatted += hits;
        spawner.ticks_remaining -= SWAT_REFUND * hits as i32;
        debug!("[Mosquito] Swatted {} ({} total)", hits, stats.mosquitoes_swatted);

        if quest.stage == QUEST_SWAT_MOSQUITOES && stats.mosquitoes_swatted >= SWATS_FOR_QUEST {
            quest_events.send(QuestAdvanceEvent::from_stage(QUEST_SWAT_MOSQUITOES));
        }
    }
}
