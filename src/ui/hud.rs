use bevy::prelude::*;

use crate::economy::campfire::format_ticks;
use crate::npcs::dialogue::{DialogueSession, Glyph};
use crate::save::leaderboard::format_distance;
use crate::shared::*;

const HUD_TEXT: Color = Color::srgb(0.95, 0.95, 0.9);
const HIGHLIGHT_TEXT: Color = Color::srgb(1.0, 0.8, 0.2);
const PANEL_BG: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);
const SLOT_BG: Color = Color::srgba(0.1, 0.1, 0.1, 0.7);
const SLOT_SELECTED_BG: Color = Color::srgba(0.8, 0.65, 0.2, 0.8);

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct HudHealthFill;

#[derive(Component)]
pub struct HudStaminaFill;

#[derive(Component)]
pub struct HudBurdenText;

#[derive(Component)]
pub struct HudDistanceText;

#[derive(Component)]
pub struct HotbarSlot {
    pub index: usize,
}

#[derive(Component)]
pub struct HotbarSlotText {
    pub index: usize,
}

#[derive(Component)]
pub struct CampfirePanel;

#[derive(Component)]
pub struct CampfirePanelText;

#[derive(Component)]
pub struct DialoguePanel;

/// Root text of the dialogue panel; its spans are rebuilt per line.
#[derive(Component)]
pub struct DialogueText;

// ═══════════════════════════════════════════════════════════════════════
// FORMATTING
// ═══════════════════════════════════════════════════════════════════════

/// Fill of a bar in percent, clamped to 0..=100.
pub fn bar_percent(value: i32, max: i32) -> f32 {
    if max <= 0 {
        return 0.0;
    }
    (value as f32 / max as f32 * 100.0).clamp(0.0, 100.0)
}

pub fn slot_label(slot: Option<&InventorySlot>) -> String {
    match slot {
        Some(slot) => format!("{}\nx{}", slot.kind.display_name(), slot.count),
        None => String::new(),
    }
}

pub fn campfire_panel_text(campfire: &Campfire) -> String {
    format!(
        "Total Time: {}\nTinder: {}\nKindling: {}\nFuel: {}",
        format_ticks(campfire.total()),
        format_ticks(campfire.tinder),
        format_ticks(campfire.kindling),
        format_ticks(campfire.fuel),
    )
}

/// Collapses revealed glyphs into runs of equal highlighting.
pub fn glyph_runs(glyphs: &[Glyph]) -> Vec<(String, bool)> {
    let mut runs: Vec<(String, bool)> = Vec::new();
    for glyph in glyphs {
        let (ch, highlighted) = match *glyph {
            Glyph::Char { ch, highlighted } => (ch, highlighted),
            // A break belongs to whatever run it interrupts.
            Glyph::Break => ('\n', runs.last().map(|r| r.1).unwrap_or(false)),
        };
        match runs.last_mut() {
            Some((text, h)) if *h == highlighted => text.push(ch),
            _ => runs.push((ch.to_string(), highlighted)),
        }
    }
    runs
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN
// ═══════════════════════════════════════════════════════════════════════

fn text_font(size: f32) -> TextFont {
    TextFont {
        font_size: size,
        ..default()
    }
}

fn spawn_bar<M: Component>(parent: &mut ChildBuilder, label: &str, fill_color: Color, marker: M) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((Text::new(label), text_font(14.0), TextColor(HUD_TEXT)));
            row.spawn((
                Node {
                    width: Val::Px(160.0),
                    height: Val::Px(12.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.2, 0.2, 0.2, 0.8)),
            ))
            .with_children(|bar| {
                bar.spawn((
                    marker,
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(fill_color),
                ));
            });
        });
}

/// Runs on entering Playing; kept across pauses.
pub fn spawn_hud(mut commands: Commands, existing: Query<(), With<HudRoot>>) {
    if !existing.is_empty() {
        return;
    }

    commands
        .spawn((
            HudRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            },
        ))
        .with_children(|root| {
            // ─── TOP BAR ───
            root.spawn((
                Node {
                    width: Val::Percent(100.0),
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::SpaceBetween,
                    align_items: AlignItems::Center,
                    padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                    ..default()
                },
                BackgroundColor(PANEL_BG),
            ))
            .with_children(|top| {
                top.spawn(Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    ..default()
                })
                .with_children(|bars| {
                    spawn_bar(bars, "HP", Color::srgb(0.8, 0.2, 0.2), HudHealthFill);
                    spawn_bar(bars, "SP", Color::srgb(0.2, 0.7, 0.3), HudStaminaFill);
                });
                top.spawn((
                    HudBurdenText,
                    Text::new(format!("0/{}", BURDEN_CAPACITY)),
                    text_font(18.0),
                    TextColor(HUD_TEXT),
                ));
                top.spawn((
                    HudDistanceText,
                    Text::new(format_distance(0)),
                    text_font(18.0),
                    TextColor(HUD_TEXT),
                ));
            });

            // ─── MIDDLE: campfire panel and dialogue ───
            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::FlexStart,
                padding: UiRect::all(Val::Px(12.0)),
                ..default()
            })
            .with_children(|middle| {
                middle
                    .spawn((
                        CampfirePanel,
                        Node {
                            padding: UiRect::all(Val::Px(8.0)),
                            ..default()
                        },
                        BackgroundColor(PANEL_BG),
                        Visibility::Hidden,
                    ))
                    .with_children(|panel| {
                        panel.spawn((
                            CampfirePanelText,
                            Text::new(""),
                            text_font(16.0),
                            TextColor(HUD_TEXT),
                        ));
                    });
                middle
                    .spawn((
                        DialoguePanel,
                        Node {
                            max_width: Val::Px(520.0),
                            padding: UiRect::all(Val::Px(10.0)),
                            ..default()
                        },
                        BackgroundColor(PANEL_BG),
                        Visibility::Hidden,
                    ))
                    .with_children(|panel| {
                        panel.spawn((
                            DialogueText,
                            Text::new(""),
                            text_font(16.0),
                            TextColor(HUD_TEXT),
                        ));
                    });
            });

            // ─── HOTBAR ───
            root.spawn(Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(4.0),
                padding: UiRect::bottom(Val::Px(110.0)),
                ..default()
            })
            .with_children(|bar| {
                for index in 0..MAX_INVENTORY_SLOTS {
                    bar.spawn((
                        HotbarSlot { index },
                        Node {
                            width: Val::Px(72.0),
                            height: Val::Px(48.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        BackgroundColor(SLOT_BG),
                    ))
                    .with_children(|slot| {
                        slot.spawn((
                            HotbarSlotText { index },
                            Text::new(""),
                            text_font(11.0),
                            TextColor(HUD_TEXT),
                        ));
                    });
                }
            });
        });
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

#[allow(clippy::type_complexity)]
pub fn update_pool_bars(
    player: Res<PlayerState>,
    mut health: Query<&mut Node, (With<HudHealthFill>, Without<HudStaminaFill>)>,
    mut stamina: Query<&mut Node, (With<HudStaminaFill>, Without<HudHealthFill>)>,
) {
    if !player.is_changed() {
        return;
    }
    for mut node in &mut health {
        node.width = Val::Percent(bar_percent(player.health, MAX_HEALTH));
    }
    for mut node in &mut stamina {
        node.width = Val::Percent(bar_percent(player.stamina, MAX_STAMINA));
    }
}

#[allow(clippy::type_complexity)]
pub fn update_status_text(
    inventory: Res<Inventory>,
    stats: Res<SessionStats>,
    mut burden: Query<&mut Text, (With<HudBurdenText>, Without<HudDistanceText>)>,
    mut distance: Query<&mut Text, (With<HudDistanceText>, Without<HudBurdenText>)>,
) {
    if inventory.is_changed() {
        for mut text in &mut burden {
            **text = format!("{}/{}", inventory.total_burden(), BURDEN_CAPACITY);
        }
    }
    if stats.is_changed() {
        for mut text in &mut distance {
            **text = format_distance(stats.distance);
        }
    }
}

pub fn update_hotbar(
    inventory: Res<Inventory>,
    mut slots: Query<(&HotbarSlot, &mut BackgroundColor)>,
    mut labels: Query<(&HotbarSlotText, &mut Text)>,
) {
    if !inventory.is_changed() {
        return;
    }
    for (slot, mut bg) in &mut slots {
        *bg = if inventory.selected == Some(slot.index) {
            BackgroundColor(SLOT_SELECTED_BG)
        } else {
            BackgroundColor(SLOT_BG)
        };
    }
    for (label, mut text) in &mut labels {
        **text = slot_label(inventory.slots.get(label.index));
    }
}

pub fn update_campfire_panel(
    player: Res<PlayerState>,
    campfires: Query<(&Campfire, &MapPosition, &Footprint)>,
    mut panel: Query<&mut Visibility, With<CampfirePanel>>,
    mut panel_text: Query<&mut Text, With<CampfirePanelText>>,
) {
    let overlapping = campfires
        .iter()
        .find(|(_, pos, footprint)| within_reach(player.position.x, pos.0.x, footprint.width));

    for mut visibility in &mut panel {
        *visibility = if overlapping.is_some() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
    if let Some((campfire, _, _)) = overlapping {
        for mut text in &mut panel_text {
            **text = campfire_panel_text(campfire);
        }
    }
}

/// Shows the line of the on-screen Scouter that is currently speaking,
/// one span per highlighted run.
pub fn update_dialogue_panel(
    mut commands: Commands,
    scouters: Query<(&Scouter, &DialogueSession, &ScreenX, &Footprint)>,
    mut panel: Query<&mut Visibility, With<DialoguePanel>>,
    text_root: Query<Entity, With<DialogueText>>,
    mut shown: Local<Option<(ScouterName, Vec<Glyph>)>>,
) {
    let speaking = scouters
        .iter()
        .filter(|(_, session, screen_x, footprint)| {
            !session.is_silent() && crate::player::camera::is_on_screen(screen_x.0, footprint.width)
        })
        .map(|(scouter, session, _, _)| (scouter.name, session.visible_glyphs()))
        .next();

    for mut visibility in &mut panel {
        *visibility = if speaking.is_some() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
    if *shown == speaking {
        return;
    }

    for root in &text_root {
        commands.entity(root).despawn_descendants();
        if let Some((name, glyphs)) = &speaking {
            commands.entity(root).with_children(|text| {
                text.spawn((
                    TextSpan::new(format!("Scouter {}: ", name.display_name())),
                    text_font(16.0),
                    TextColor(HUD_TEXT),
                ));
                for (run, highlighted) in glyph_runs(glyphs) {
                    let color = if highlighted { HIGHLIGHT_TEXT } else { HUD_TEXT };
                    text.spawn((TextSpan::new(run), text_font(16.0), TextColor(color)));
                }
            });
        }
    }
    *shown = speaking;
}
