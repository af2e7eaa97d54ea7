//! Shared components, resources, events, and states for Camp Haliburton.
//!
//! This is the type contract. Every domain plugin imports from here.
//! Behaviour for the world components lives in the owning domain module
//! (economy, mosquitoes, npcs); the data shapes live here so that any
//! domain can query them.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    MainMenu,
    Playing,
    Paused,
}

/// Phases of one simulation tick, run in this order inside `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Background,
    Player,
    Camera,
    Plants,
    Campfires,
    Items,
    Mosquitoes,
    Spawning,
    Quests,
    Persistence,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const SCREEN_WIDTH: f32 = 1080.0;
pub const SCREEN_HEIGHT: f32 = 675.0;
pub const GROUND_HEIGHT: f32 = 100.0;
/// Screen-space y of the ground line (y grows downward).
pub const GROUND_Y: f32 = SCREEN_HEIGHT - GROUND_HEIGHT;
/// Right-most x at which content (plants, mosquito waves) is laid out.
pub const MAP_END: f32 = 8640.0;
pub const DEFAULT_TICK_MILLIS: u64 = 15;

pub const PLAYER_SPAWN: Vec2 = Vec2::new(800.0, GROUND_Y - 40.0);
/// The player is always drawn at the horizontal centre of the screen.
pub const PLAYER_REL_X: f32 = SCREEN_WIDTH / 2.0;
pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 140.0;
pub const MAX_HEALTH: i32 = 100;
pub const MAX_STAMINA: i32 = 400;

pub const BURDEN_CAPACITY: u32 = 30;
pub const SLOT_BURDEN: u32 = 4;
pub const MAX_INVENTORY_SLOTS: usize = 9;

/// Items dropped left of this x land on the dock.
pub const DOCK_EDGE_X: f32 = 0.0;

// Quest stages, in script order.
pub const QUEST_SWAT_MOSQUITOES: u8 = 0;
pub const QUEST_DELIVER_FISH: u8 = 1;
pub const QUEST_FEED_CAMPFIRE: u8 = 2;
pub const QUEST_FIND_BRAYDON: u8 = 3;
pub const QUEST_FETCH_FLINT: u8 = 4;
pub const QUEST_LIGHT_CAMPFIRE: u8 = 5;
pub const QUEST_FIND_PORTA_POTTY: u8 = 6;
pub const FINAL_QUEST_STAGE: u8 = 7;

// ═══════════════════════════════════════════════════════════════════════
// ITEMS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Stick,
    Leaf,
    Log,
    BirchBark,
    FlintAndSteel,
    CottonBall,
    Racket,
    FishCarcass,
}

impl ItemKind {
    pub const ALL: [ItemKind; 8] = [
        ItemKind::Stick,
        ItemKind::Leaf,
        ItemKind::Log,
        ItemKind::BirchBark,
        ItemKind::FlintAndSteel,
        ItemKind::CottonBall,
        ItemKind::Racket,
        ItemKind::FishCarcass,
    ];

    /// Inventory weight of one unit.
    pub fn burden(self) -> u32 {
        match self {
            ItemKind::Stick => 5,
            ItemKind::Leaf => 2,
            ItemKind::Log => 28,
            ItemKind::BirchBark => 2,
            ItemKind::FlintAndSteel => 4,
            ItemKind::CottonBall => 1,
            ItemKind::Racket => 4,
            ItemKind::FishCarcass => 50,
        }
    }

    /// Whether a campfire accepts this item as tinder, kindling or fuel.
    pub fn campfire_valid(self) -> bool {
        matches!(
            self,
            ItemKind::Stick
                | ItemKind::Leaf
                | ItemKind::Log
                | ItemKind::BirchBark
                | ItemKind::CottonBall
        )
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ItemKind::Stick => "Stick",
            ItemKind::Leaf => "Leaf",
            ItemKind::Log => "Log",
            ItemKind::BirchBark => "Birch Bark",
            ItemKind::FlintAndSteel => "Flint And Steel",
            ItemKind::CottonBall => "Cotton Ball",
            ItemKind::Racket => "Racket",
            ItemKind::FishCarcass => "Fish Carcass",
        }
    }

    /// Distance below the ground line at which a dropped item rests.
    pub fn ground_offset(self) -> f32 {
        match self {
            ItemKind::Stick => 5.0,
            ItemKind::FishCarcass => 3.0,
            ItemKind::FlintAndSteel => 0.0,
            _ => 1.0,
        }
    }

    /// Downward acceleration per tick while airborne.
    pub fn drop_accel(self) -> f32 {
        match self {
            ItemKind::Stick => 0.8,
            ItemKind::Leaf => 0.03,
            ItemKind::Log => 1.0,
            ItemKind::BirchBark => 0.2,
            ItemKind::FlintAndSteel => 0.8,
            ItemKind::CottonBall => 0.1,
            ItemKind::Racket => 0.6,
            ItemKind::FishCarcass => 0.8,
        }
    }

    /// Fraction of speed kept after a bounce.
    pub fn bounce(self) -> f32 {
        match self {
            ItemKind::Stick => 0.3,
            ItemKind::Leaf => 0.06,
            ItemKind::Log => 0.2,
            ItemKind::BirchBark => 0.05,
            ItemKind::FlintAndSteel => 0.1,
            ItemKind::CottonBall => 0.08,
            ItemKind::Racket => 0.25,
            ItemKind::FishCarcass => 0.05,
        }
    }

    /// Sprite footprint of a dropped item.
    pub fn size(self) -> Vec2 {
        match self {
            ItemKind::Stick => Vec2::new(40.0, 10.0),
            ItemKind::Leaf => Vec2::new(20.0, 12.0),
            ItemKind::Log => Vec2::new(60.0, 22.0),
            ItemKind::BirchBark => Vec2::new(30.0, 10.0),
            ItemKind::FlintAndSteel => Vec2::new(25.0, 14.0),
            ItemKind::CottonBall => Vec2::new(18.0, 16.0),
            ItemKind::Racket => Vec2::new(45.0, 20.0),
            ItemKind::FishCarcass => Vec2::new(50.0, 18.0),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySlot {
    pub kind: ItemKind,
    pub count: u32,
}

/// Burden-limited inventory. At most one slot per item kind; every slot
/// costs `SLOT_BURDEN` on top of the weight of what it holds.
#[derive(Resource, Debug, Clone, Default)]
pub struct Inventory {
    pub slots: Vec<InventorySlot>,
    pub selected: Option<usize>,
    burden: u32,
}

impl Inventory {
    pub fn current_burden(&self) -> u32 {
        self.burden
    }

    pub fn slot_burden(&self) -> u32 {
        self.slots.len() as u32 * SLOT_BURDEN
    }

    pub fn total_burden(&self) -> u32 {
        self.burden + self.slot_burden()
    }

    pub fn is_overburdened(&self) -> bool {
        self.total_burden() >= BURDEN_CAPACITY
    }

    pub fn count(&self, kind: ItemKind) -> u32 {
        self.slots
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| s.count)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Adds one unit. Rejected outright while overburdened.
    pub fn try_add(&mut self, kind: ItemKind) -> bool {
        if self.is_overburdened() {
            return false;
        }
        match self.slots.iter_mut().find(|s| s.kind == kind) {
            Some(slot) => slot.count += 1,
            None => self.slots.push(InventorySlot { kind, count: 1 }),
        }
        self.burden += kind.burden();
        true
    }

    pub fn selected_kind(&self) -> Option<ItemKind> {
        self.selected
            .and_then(|i| self.slots.get(i))
            .map(|s| s.kind)
    }

    /// Selects a slot by index; ignored if the slot does not exist.
    pub fn select(&mut self, index: usize) {
        if index < self.slots.len() {
            self.selected = Some(index);
        }
    }

    /// Removes one unit from the selected slot. When the slot empties the
    /// selection moves to the previous slot, or the first, or nothing.
    pub fn remove_selected(&mut self) -> Option<ItemKind> {
        let index = self.selected?;
        let slot = self.slots.get_mut(index)?;
        let kind = slot.kind;
        self.burden -= kind.burden();
        if slot.count > 1 {
            slot.count -= 1;
        } else {
            self.slots.remove(index);
            self.selected = if index > 0 {
                Some(index - 1)
            } else if !self.slots.is_empty() {
                Some(0)
            } else {
                None
            };
        }
        Some(kind)
    }

    /// Empties the inventory, returning every held unit.
    pub fn drain_units(&mut self) -> Vec<ItemKind> {
        let units = self
            .slots
            .drain(..)
            .flat_map(|s| std::iter::repeat(s.kind).take(s.count as usize))
            .collect();
        self.selected = None;
        self.burden = 0;
        units
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

/// Marker for the player's render entity. Simulation state is `PlayerState`.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Keys whose held state the player controller tracks between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeldKey {
    Left,
    Right,
    Jump,
    Swat,
    Sprint,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub swat: bool,
    pub sprint: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionFlags {
    pub walking: bool,
    pub running: bool,
    pub jumping: bool,
    pub picking: bool,
    pub swatting: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    #[default]
    Idle,
    Walking,
    Running,
    Jumping,
    Picking,
    Swatting,
}

/// Playback cursor of the active animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Animator {
    pub kind: AnimationKind,
    pub frame: usize,
    pub ticks: u32,
}

impl Animator {
    pub fn start(kind: AnimationKind) -> Self {
        Self {
            kind,
            frame: 0,
            ticks: 0,
        }
    }
}

/// Simulation state of the single player. `position.x` is the horizontal
/// centre, `position.y` the feet.
#[derive(Resource, Debug, Clone)]
pub struct PlayerState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub on_ground: bool,
    pub facing_right: bool,
    pub health: i32,
    pub stamina: i32,
    pub attack_cooldown: i32,
    pub keys: HeldKeys,
    pub motion: MotionFlags,
    pub animator: Animator,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: PLAYER_SPAWN,
            velocity: Vec2::ZERO,
            on_ground: false,
            facing_right: true,
            health: MAX_HEALTH,
            stamina: MAX_STAMINA,
            attack_cooldown: 0,
            keys: HeldKeys::default(),
            motion: MotionFlags::default(),
            animator: Animator::default(),
        }
    }
}

impl PlayerState {
    /// Point mosquitoes home in on and swats are measured from.
    pub fn torso(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y - PLAYER_HEIGHT / 2.0)
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// Extra horizontal slack on top of both half-widths for interactions.
pub const PICK_UP_REACH: f32 = 5.0;

/// Whether something `target_width` wide centred at `target_x` is within
/// the player's interaction reach.
pub fn within_reach(player_x: f32, target_x: f32, target_width: f32) -> bool {
    (target_x - player_x).abs() <= PICK_UP_REACH + target_width / 2.0 + PLAYER_WIDTH / 2.0
}

/// Whether a dropped item can be picked up: within reach and lower than
/// the player's torso.
pub fn in_pickup_range(player: &PlayerState, item_pos: Vec2, item_width: f32) -> bool {
    within_reach(player.position.x, item_pos.x, item_width) && item_pos.y > player.torso().y
}

/// Adds an item to the inventory, pinning stamina to zero if the addition
/// leaves the player overburdened.
pub fn give_item(player: &mut PlayerState, inventory: &mut Inventory, kind: ItemKind) -> bool {
    if !inventory.try_add(kind) {
        return false;
    }
    if inventory.is_overburdened() {
        player.stamina = 0;
    }
    true
}

// ═══════════════════════════════════════════════════════════════════════
// WORLD COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

/// Absolute map coordinate. y grows downward; ground entities use their base.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct MapPosition(pub Vec2);

/// Camera-relative x, valid for the current tick only.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenX(pub f32);

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlantKind {
    Pine,
    Birch,
    Cotton,
    PortaPotty,
}

/// A drop-timer entity that spawns items around its base.
#[derive(Component, Debug, Clone)]
pub struct Plant {
    pub kind: PlantKind,
    pub mirrored: bool,
    pub live_drops: u32,
    pub drop_timer: i32,
}

/// An item lying in (or falling into) the world.
#[derive(Component, Debug, Clone)]
pub struct EnvironmentItem {
    pub kind: ItemKind,
    pub velocity: f32,
    pub on_ground: bool,
    /// Plant whose live-drop count this item occupies.
    pub source: Option<Entity>,
    /// Monotonic drop order, used to break pickup distance ties.
    pub serial: u64,
}

#[derive(Component, Debug, Clone, Default)]
pub struct Campfire {
    pub tinder: i32,
    pub kindling: i32,
    pub fuel: i32,
    pub lit: bool,
    pub sparking: bool,
    pub image_timer: i32,
    pub ember_frame: u8,
}

#[derive(Component, Debug, Clone)]
pub struct Mosquito {
    pub home: Vec2,
    pub velocity: Vec2,
    pub wander_radius: f32,
    pub attack_cooldown: i32,
    pub correction: i32,
    pub movement_tick: i32,
    pub end_tick: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScouterName {
    Bryant,
    Hubert,
    Braydon,
}

impl ScouterName {
    pub fn display_name(self) -> &'static str {
        match self {
            ScouterName::Bryant => "Scouter Bryant",
            ScouterName::Hubert => "Scouter Hubert",
            ScouterName::Braydon => "Scouter Braydon",
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scouter {
    pub name: ScouterName,
}

// ═══════════════════════════════════════════════════════════════════════
// SESSION RESOURCES
// ═══════════════════════════════════════════════════════════════════════

/// The single global quest phase (0..=7).
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestLine {
    pub stage: u8,
}

/// Raw score counters for the running session.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub mosquitoes_swatted: u32,
    pub campfire_ticks: u32,
    /// Horizontal pixels travelled inside the map bounds.
    pub distance: u64,
}

/// Camera offset from map to screen space. `dirty` is raised whenever the
/// player's absolute x changes.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraShift {
    pub shift: f32,
    pub dirty: bool,
}

impl Default for CameraShift {
    fn default() -> Self {
        Self {
            shift: PLAYER_REL_X - PLAYER_SPAWN.x,
            dirty: true,
        }
    }
}

impl CameraShift {
    pub fn to_screen(&self, x: f32) -> f32 {
        x + self.shift
    }
}

/// Source of all simulation randomness.
#[derive(Resource)]
pub struct SimRng(pub StdRng);

impl Default for SimRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Runtime settings read from `haliburton.ron`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_name: String,
    pub score_file: String,
    pub tick_millis: u64,
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: String::from("Camper"),
            score_file: String::from("highscores.txt"),
            tick_millis: DEFAULT_TICK_MILLIS,
            rng_seed: None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════

/// Gameplay input gathered since the last simulation tick. Filled every
/// frame by the input plugin and drained by the player tick, so edges are
/// neither lost nor repeated when frame and tick rates differ.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PlayerInput {
    /// Held-key transitions in arrival order: (key, is_down).
    pub transitions: Vec<(HeldKey, bool)>,
    pub interact: bool,
    pub drop: bool,
    pub quest_advance: bool,
    pub slot: Option<usize>,
}

impl PlayerInput {
    pub fn is_empty(&self) -> bool {
        *self == PlayerInput::default()
    }
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub jump: KeyCode,
    pub swat: KeyCode,
    pub interact: KeyCode,
    pub drop: KeyCode,
    pub sprint: KeyCode,
    pub sprint_alt: KeyCode,
    pub pause: KeyCode,
    pub quest_advance: KeyCode,
    pub start: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            jump: KeyCode::Space,
            swat: KeyCode::KeyK,
            interact: KeyCode::KeyL,
            drop: KeyCode::KeyQ,
            sprint: KeyCode::ShiftLeft,
            sprint_alt: KeyCode::ShiftRight,
            pause: KeyCode::KeyP,
            quest_advance: KeyCode::KeyT,
            start: KeyCode::Enter,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// Request to move the quest forward. `expected_stage` guards against
/// double advances: the request only applies while the counter still sits
/// at that stage. `None` advances unconditionally (developer hotkey).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestAdvanceEvent {
    pub expected_stage: Option<u8>,
}

impl QuestAdvanceEvent {
    pub fn from_stage(stage: u8) -> Self {
        Self {
            expected_stage: Some(stage),
        }
    }
}

/// Fired by the player on the impact frame of a swat.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwatEvent {
    pub origin: Vec2,
    pub facing_right: bool,
}

/// Fired by the player on the reach frame of the pick animation.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PickupEvent;

/// Request to place an item in the world.
#[derive(Event, Debug, Clone, Copy)]
pub struct ItemDropEvent {
    pub kind: ItemKind,
    pub position: Vec2,
    pub source: Option<Entity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampfireAction {
    Feed(ItemKind),
    Light,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct CampfireActionEvent {
    pub campfire: Entity,
    pub action: CampfireAction,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ScouterInteractEvent {
    pub scouter: Entity,
}

// ═══════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_table_matches_burdens() {
        let expected = [
            (ItemKind::Stick, 5, true),
            (ItemKind::Leaf, 2, true),
            (ItemKind::Log, 28, true),
            (ItemKind::BirchBark, 2, true),
            (ItemKind::FlintAndSteel, 4, false),
            (ItemKind::CottonBall, 1, true),
            (ItemKind::Racket, 4, false),
            (ItemKind::FishCarcass, 50, false),
        ];
        for (kind, burden, valid) in expected {
            assert_eq!(kind.burden(), burden, "burden of {:?}", kind);
            assert_eq!(kind.campfire_valid(), valid, "campfire flag of {:?}", kind);
        }
        assert_eq!(ItemKind::ALL.len(), expected.len());
    }

    #[test]
    fn test_inventory_stacks_one_slot_per_kind() {
        let mut inv = Inventory::default();
        assert!(inv.try_add(ItemKind::Leaf));
        assert!(inv.try_add(ItemKind::Leaf));
        assert!(inv.try_add(ItemKind::CottonBall));
        assert_eq!(inv.slots.len(), 2);
        assert_eq!(inv.count(ItemKind::Leaf), 2);
        assert_eq!(inv.current_burden(), 5);
        assert_eq!(inv.slot_burden(), 8);
        assert!(!inv.is_overburdened());
    }

    #[test]
    fn test_inventory_rejects_when_overburdened() {
        let mut inv = Inventory::default();
        assert!(inv.try_add(ItemKind::FishCarcass));
        assert!(inv.is_overburdened());
        assert!(!inv.try_add(ItemKind::Leaf), "overburdened inventory must refuse items");
        assert_eq!(inv.count(ItemKind::Leaf), 0);
    }

    #[test]
    fn test_remove_selected_moves_selection_back() {
        let mut inv = Inventory::default();
        inv.try_add(ItemKind::Stick);
        inv.try_add(ItemKind::Leaf);
        inv.select(1);
        assert_eq!(inv.remove_selected(), Some(ItemKind::Leaf));
        assert_eq!(inv.selected, Some(0));
        assert_eq!(inv.remove_selected(), Some(ItemKind::Stick));
        assert_eq!(inv.selected, None);
        assert_eq!(inv.current_burden(), 0);
        assert_eq!(inv.remove_selected(), None);
    }

    #[test]
    fn test_select_ignores_missing_slot() {
        let mut inv = Inventory::default();
        inv.try_add(ItemKind::Racket);
        inv.select(4);
        assert_eq!(inv.selected, None);
        inv.select(0);
        assert_eq!(inv.selected_kind(), Some(ItemKind::Racket));
    }

    #[test]
    fn test_give_item_pins_stamina_when_overburdened() {
        let mut player = PlayerState::default();
        let mut inv = Inventory::default();
        assert!(give_item(&mut player, &mut inv, ItemKind::Stick));
        assert_eq!(player.stamina, MAX_STAMINA);
        assert!(give_item(&mut player, &mut inv, ItemKind::Log));
        assert_eq!(inv.total_burden(), 41);
        assert_eq!(player.stamina, 0);
    }
}
