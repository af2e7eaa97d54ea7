use crate::shared::*;

pub const WALK_SPEED: f32 = 4.0;
pub const RUN_SPEED: f32 = 7.0;
pub const JUMP_SPEED: f32 = -15.0;
pub const GRAVITY: f32 = 1.3;

pub const MAP_MIN_X: f32 = -460.0;
pub const MAP_MAX_X: f32 = 9105.0;
/// Walking past this point finds the Porta-potty.
pub const PORTA_POTTY_TRIGGER_X: f32 = 8380.0;

pub const SWAT_STAMINA_COST: i32 = 100;
pub const JUMP_STAMINA_COST: i32 = 20;
pub const ATTACK_DELAY: i32 = 30;

/// What the body simulation reports back to the tick system.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyReport {
    pub moved: bool,
    pub distance: u32,
    pub past_porta_potty: bool,
    pub died: bool,
}

/// Ground-only horizontal speed choice; the player has no air control.
pub fn horizontal_velocity(keys: &HeldKeys, stamina: i32) -> f32 {
    let speed = if keys.sprint && stamina > 0 {
        RUN_SPEED
    } else {
        WALK_SPEED
    };
    match (keys.left, keys.right) {
        (true, true) | (false, false) => 0.0,
        (true, false) => -speed,
        (false, true) => speed,
    }
}

/// Sprinting drains one stamina per tick; otherwise it regenerates one per
/// tick unless the inventory is overburdened.
pub fn update_stamina(player: &mut PlayerState, overburdened: bool) {
    if player.keys.sprint {
        if player.stamina > 0 {
            player.stamina -= 1;
        } else {
            player.motion.running = false;
        }
    } else if player.stamina < MAX_STAMINA && !overburdened {
        player.stamina += 1;
    }
}

/// Starts a swat or jump when their keys are held and the body allows it.
pub fn update_action_triggers(player: &mut PlayerState) {
    let swat_threshold = SWAT_STAMINA_COST - super::animation::SWAT_TOTAL_FRAMES as i32;
    if player.keys.swat && player.attack_cooldown <= 0 && player.stamina > swat_threshold {
        player.motion.swatting = true;
    } else if player.attack_cooldown > 0 {
        player.attack_cooldown -= 1;
    }

    if player.keys.jump && !player.motion.picking && !player.motion.swatting {
        player.motion.jumping = true;
    }
}

/// Advances the player's body by one tick: velocity choice, pools, action
/// triggers, horizontal clamp and vertical integration.
pub fn simulate_body(player: &mut PlayerState, inventory: &Inventory) -> BodyReport {
    let mut report = BodyReport::default();

    if player.on_ground {
        player.velocity.x = horizontal_velocity(&player.keys, player.stamina);
    }
    update_stamina(player, inventory.is_overburdened());
    update_action_triggers(player);

    player.position.x += player.velocity.x;
    if player.position.x < MAP_MIN_X {
        player.position.x = MAP_MIN_X;
    } else if player.position.x > MAP_MAX_X {
        player.position.x = MAP_MAX_X;
    } else {
        report.past_porta_potty = player.position.x > PORTA_POTTY_TRIGGER_X;
        report.distance = player.velocity.x.abs() as u32;
    }
    report.moved = player.velocity.x != 0.0;

    player.position.y += player.velocity.y;
    if !player.on_ground {
        player.velocity.y += GRAVITY;
    }
    if player.position.y >= GROUND_Y {
        player.on_ground = true;
        player.position.y = GROUND_Y;
        player.velocity.y = 0.0;
    }

    report.died = player.is_dead();
    report
}
