//! Campfires: three fuel tiers burned strictly tinder → kindling → fuel.

use bevy::prelude::*;
use rand::Rng;
use crate::shared::*;

pub const CAMPFIRE_WIDTH: f32 = 120.0;
pub const CAMPFIRE_HEIGHT: f32 = 60.0;
/// Campfires sit slightly below the ground line.
pub const CAMPFIRE_Y: f32 = GROUND_Y + 5.0;

pub const SPARK_TICKS: i32 = 30;
pub const EMBER_FRAMES: u8 = 4;
const EMBER_PERIOD: i32 = 80;
const EMBER_SPREAD: i32 = 50;

const TICKS_PER_SECOND: i32 = 60;
const TICKS_PER_MINUTE: i32 = 60 * TICKS_PER_SECOND;
const TICKS_PER_HOUR: i32 = 60 * TICKS_PER_MINUTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelTier {
    Tinder,
    Kindling,
    Fuel,
}

/// Which tier an item feeds and how many burn ticks one unit is worth.
pub fn fuel_value(kind: ItemKind) -> Option<(FuelTier, i32)> {
    match kind {
        ItemKind::Stick => Some((FuelTier::Kindling, 300)),
        ItemKind::Leaf => Some((FuelTier::Tinder, 60)),
        ItemKind::Log => Some((FuelTier::Fuel, 3600)),
        ItemKind::BirchBark => Some((FuelTier::Tinder, 120)),
        ItemKind::CottonBall => Some((FuelTier::Tinder, 40)),
        ItemKind::FlintAndSteel | ItemKind::Racket | ItemKind::FishCarcass => None,
    }
}

fn ember_period(rng: &mut impl Rng) -> i32 {
    EMBER_PERIOD + rng.gen_range(0..2 * EMBER_SPREAD) - EMBER_SPREAD
}

impl Campfire {
    pub fn total(&self) -> i32 {
        self.tinder + self.kindling + self.fuel
    }

    /// Lighting requires something to burn in every sense: tinder to catch,
    /// kindling to carry it, and ticks left overall.
    pub fn can_ignite(&self) -> bool {
        self.total() > 0 && self.tinder > 0 && self.kindling > 0
    }

    /// Adds one unit of fuel. Items that don't burn are rejected.
    pub fn add_item(&mut self, kind: ItemKind) -> bool {
        let Some((tier, ticks)) = fuel_value(kind) else {
            return false;
        };
        match tier {
            FuelTier::Tinder => self.tinder += ticks,
            FuelTier::Kindling => self.kindling += ticks,
            FuelTier::Fuel => self.fuel += ticks,
        }
        true
    }

    /// Strikes a spark. The fire catches only if it can ignite; returns
    /// whether it is lit afterwards because of this strike.
    pub fn light_fire(&mut self) -> bool {
        self.sparking = true;
        self.image_timer = SPARK_TICKS;
        if self.can_ignite() {
            self.lit = true;
        }
        self.lit && self.can_ignite()
    }

    /// Advances one tick. Returns true when a burn tick was consumed.
    pub fn tick(&mut self, rng: &mut impl Rng) -> bool {
        if self.sparking {
            if self.image_timer <= 0 {
                self.sparking = false;
                self.image_timer = ember_period(rng);
            } else {
                self.image_timer -= 1;
            }
        } else if self.lit {
            if self.image_timer <= 0 {
                self.ember_frame = rng.gen_range(0..EMBER_FRAMES);
                self.image_timer = ember_period(rng);
            } else {
                self.image_timer -= 1;
            }
        }

        if !self.lit {
            return false;
        }

        if self.tinder > 0 {
            self.tinder -= 1;
        } else if self.kindling > 0 {
            self.kindling -= 1;
        } else if self.fuel > 0 {
            self.fuel -= 1;
        }
        if self.total() <= 0 {
            self.lit = false;
        }
        true
    }
}

/// Formats burn ticks as `"1 hr 2 min 3 sec"`, skipping empty units.
/// Anything under a second reads `"0 sec"`.
pub fn format_ticks(ticks: i32) -> String {
    if ticks < TICKS_PER_SECOND {
        return String::from("0 sec");
    }
    let hours = ticks / TICKS_PER_HOUR;
    let minutes = (ticks % TICKS_PER_HOUR) / TICKS_PER_MINUTE;
    let seconds = (ticks % TICKS_PER_MINUTE) / TICKS_PER_SECOND;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{} hr", hours));
    }
    if minutes > 0 {
        parts.push(format!("{} min", minutes));
    }
    if seconds > 0 {
        parts.push(format!("{} sec", seconds));
    }
    parts.join(" ")
}

// ═══════════════════════════════════════════════════════════════════════════
// Systems
// ═══════════════════════════════════════════════════════════════════════════

/// Feeds or lights campfires as the player asked, raising the fire-building
/// quest steps when they are satisfied.
pub fn handle_campfire_actions(
    mut events: EventReader<CampfireActionEvent>,
    mut campfires: Query<&mut Campfire>,
    quest: Res<QuestLine>,
    mut quest_events: EventWriter<QuestAdvanceEvent>,
) {
    for event in events.read() {
        let Ok(mut campfire) = campfires.get_mut(event.campfire) else {
            continue;
        };
        match event.action {
            CampfireAction::Feed(kind) => {
                if campfire.add_item(kind) {
                    debug!("[Campfire] Added {} (total {} ticks)", kind.display_name(), campfire.total());
                }
                if quest.stage == QUEST_FEED_CAMPFIRE && campfire.tinder > 0 && campfire.kindling > 0 {
                    quest_events.send(QuestAdvanceEvent::from_stage(QUEST_FEED_CAMPFIRE));
                }
            }
            CampfireAction::Light => {
                let was_lit = campfire.lit;
                if campfire.light_fire() {
                    if !was_lit {
                        info!("[Campfire] Fire lit with {} ticks of fuel", campfire.total());
                    }
                    if quest.stage == QUEST_LIGHT_CAMPFIRE {
                        quest_events.send(QuestAdvanceEvent::from_stage(QUEST_LIGHT_CAMPFIRE));
                    }
                }
            }
        }
    }
}

/// Burns every lit campfire down by one tick and credits the session score.
pub fn burn_campfires(
    mut campfires: Query<&mut Campfire>,
    mut stats: ResMut<SessionStats>,
    mut rng: ResMut<SimRng>,
) {
    for mut campfire in &mut campfires {
        let was_lit = campfire.lit;
        if campfire.tick(&mut rng.0) {
            stats.campfire_ticks += 1;
        }
        if was_lit && !campfire.lit {
            info!("[Campfire] Fire burned out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_leaf_stick_then_light() {
        let mut fire = Campfire::default();
        assert!(fire.add_item(ItemKind::Leaf));
        assert!(fire.add_item(ItemKind::Stick));
        assert!(fire.light_fire());
        assert!(fire.lit);
        assert_eq!(fire.tinder, 60);
        assert_eq!(fire.kindling, 300);
        assert_eq!(fire.total(), 360);
    }

    #[test]
    fn test_fuel_table() {
        let mut fire = Campfire::default();
        for kind in [ItemKind::Stick, ItemKind::Leaf, ItemKind::Log, ItemKind::BirchBark, ItemKind::CottonBall] {
            assert!(fire.add_item(kind), "{:?} should burn", kind);
        }
        assert_eq!(fire.tinder, 60 + 120 + 40);
        assert_eq!(fire.kindling, 300);
        assert_eq!(fire.fuel, 3600);
        for kind in [ItemKind::FlintAndSteel, ItemKind::Racket, ItemKind::FishCarcass] {
            assert!(!fire.add_item(kind), "{:?} should not burn", kind);
        }
        assert_eq!(fire.total(), 4120);
    }

    #[test]
    fn test_light_fire_needs_tinder_and_kindling() {
        let mut fire = Campfire::default();
        for _ in 0..3 {
            fire.light_fire();
        }
        assert!(!fire.lit, "empty fire never lights");

        fire.add_item(ItemKind::Log);
        fire.add_item(ItemKind::Leaf);
        fire.light_fire();
        assert!(!fire.lit, "no kindling");

        let mut fire = Campfire::default();
        fire.add_item(ItemKind::Stick);
        fire.add_item(ItemKind::Log);
        fire.light_fire();
        assert!(!fire.lit, "no tinder");
    }

    #[test]
    fn test_burn_order_and_extinguish() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut fire = Campfire::default();
        fire.add_item(ItemKind::Leaf);
        fire.add_item(ItemKind::Stick);
        fire.add_item(ItemKind::Log);
        fire.light_fire();
        let (t, k, f) = (fire.tinder, fire.kindling, fire.fuel);

        for _ in 0..t {
            assert!(fire.tick(&mut rng));
        }
        assert_eq!(fire.tinder, 0);
        assert_eq!(fire.kindling, k);
        fire.tick(&mut rng);
        assert_eq!(fire.kindling, k - 1, "kindling burns after tinder");

        for _ in 1..k {
            fire.tick(&mut rng);
        }
        assert_eq!(fire.kindling, 0);
        assert_eq!(fire.fuel, f);

        for _ in 0..f {
            fire.tick(&mut rng);
        }
        assert_eq!(fire.total(), 0);
        assert!(!fire.lit, "fire goes out at zero");
        assert!(!fire.tick(&mut rng));
    }

    #[test]
    fn test_spark_is_cosmetic() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut fire = Campfire::default();
        fire.add_item(ItemKind::Leaf);
        fire.add_item(ItemKind::Stick);
        fire.light_fire();
        assert!(fire.sparking);
        fire.tick(&mut rng);
        assert_eq!(fire.tinder, 59, "sparks do not pause the burn");
    }

    #[test]
    fn test_format_ticks() {
        assert_eq!(format_ticks(0), "0 sec");
        assert_eq!(format_ticks(59), "0 sec");
        assert_eq!(format_ticks(60), "1 sec");
        assert_eq!(format_ticks(3600), "1 min");
        assert_eq!(format_ticks(216_000 + 3600 * 2 + 60 * 3 + 10), "1 hr 2 min 3 sec");
    }
}
