use bevy::prelude::*;

use crate::core::config::EditorConfig;
use crate::core::scene::Scene;
use crate::net::sync::SaveKind;
use crate::ui::name_prompt::NamePrompt;

const PANEL_WIDTH: f32 = 210.0;
const PANEL_BG: Color = Color::srgba(0.02, 0.02, 0.05, 0.85);
const BUTTON_BG: Color = Color::srgba(0.05, 0.05, 0.08, 0.6);
const BUTTON_BG_HOVER: Color = Color::srgba(0.08, 0.08, 0.12, 0.7);
const BUTTON_BG_PRESSED: Color = Color::srgba(0.15, 0.15, 0.25, 0.8);

pub struct PanelsPlugin;

impl Plugin for PanelsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_panels).add_systems(
            Update,
            (
                populate_lists,
                handle_list_clicks,
                handle_save_clicks,
                style_buttons,
            )
                .chain(),
        );
    }
}

/// List container whose children are rebuilt from the loaded lists.
#[derive(Component)]
struct FormationList;
#[derive(Component)]
struct TeamList;

/// Clickable list items carrying the index into the scene's lists. Indices
/// are only valid within one load cycle; the lists are rebuilt on reload.
#[derive(Component)]
struct FormationItem(usize);
#[derive(Component)]
struct TeamItem(usize);

#[derive(Component)]
struct SaveButton(SaveKind);

fn spawn_panels(mut commands: Commands, cfg: Res<EditorConfig>) {
    spawn_panel(
        &mut commands,
        PanelSide::Left,
        &cfg.strings.formations_heading,
        &cfg.strings.save_formation_label,
        SaveKind::Formation,
    );
    spawn_panel(
        &mut commands,
        PanelSide::Right,
        &cfg.strings.teams_heading,
        &cfg.strings.save_team_label,
        SaveKind::Team,
    );
}

enum PanelSide {
    Left,
    Right,
}

fn spawn_panel(
    commands: &mut Commands,
    side: PanelSide,
    heading: &str,
    save_label: &str,
    kind: SaveKind,
) {
    let mut node = Node {
        position_type: PositionType::Absolute,
        top: Val::Px(0.0),
        width: Val::Px(PANEL_WIDTH),
        height: Val::Percent(100.0),
        flex_direction: FlexDirection::Column,
        justify_content: JustifyContent::FlexStart,
        align_items: AlignItems::Stretch,
        padding: UiRect::all(Val::Px(10.0)),
        row_gap: Val::Px(6.0),
        ..default()
    };
    match side {
        PanelSide::Left => node.left = Val::Px(0.0),
        PanelSide::Right => node.right = Val::Px(0.0),
    }

    commands
        .spawn((node, BackgroundColor(PANEL_BG)))
        .with_children(|panel| {
            panel.spawn((
                Text::new(heading),
                TextFont {
                    font_size: 16.0,
                    ..Default::default()
                },
                TextColor(Color::WHITE),
            ));
            panel
                .spawn((
                    Button,
                    SaveButton(kind),
                    Node {
                        padding: UiRect::all(Val::Px(6.0)),
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                    BackgroundColor(BUTTON_BG),
                ))
                .with_children(|b| {
                    b.spawn((
                        Text::new(save_label),
                        TextFont {
                            font_size: 13.0,
                            ..Default::default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
            let list_node = Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            };
            match kind {
                SaveKind::Formation => panel.spawn((FormationList, list_node)),
                SaveKind::Team => panel.spawn((TeamList, list_node)),
            };
        });
}

/// Rebuild the clickable items whenever the loaded name lists differ from
/// what is on screen. The scene also changes on every drag frame, so diff on
/// the names instead of rebuilding unconditionally.
fn populate_lists(
    mut commands: Commands,
    scene: Res<Scene>,
    mut shown: Local<(Vec<String>, Vec<String>)>,
    formation_list: Query<Entity, With<FormationList>>,
    team_list: Query<Entity, With<TeamList>>,
) {
    if !scene.is_changed() {
        return;
    }
    let formation_names: Vec<String> = scene.formations.iter().map(|f| f.name.clone()).collect();
    let team_names: Vec<String> = scene.teams.iter().map(|t| t.name.clone()).collect();

    if formation_names != shown.0 {
        if let Ok(list) = formation_list.single() {
            commands.entity(list).despawn_related::<Children>();
            commands.entity(list).with_children(|parent| {
                for (i, name) in formation_names.iter().enumerate() {
                    spawn_list_item(parent, name, FormationItem(i));
                }
            });
            shown.0 = formation_names;
        }
    }
    if team_names != shown.1 {
        if let Ok(list) = team_list.single() {
            commands.entity(list).despawn_related::<Children>();
            commands.entity(list).with_children(|parent| {
                for (i, name) in team_names.iter().enumerate() {
                    spawn_list_item(parent, name, TeamItem(i));
                }
            });
            shown.1 = team_names;
        }
    }
}

fn spawn_list_item(parent: &mut ChildSpawnerCommands, label: &str, marker: impl Bundle) {
    parent
        .spawn((
            Button,
            marker,
            Node {
                padding: UiRect::axes(Val::Px(6.0), Val::Px(3.0)),
                ..default()
            },
            BackgroundColor(BUTTON_BG),
        ))
        .with_children(|b| {
            b.spawn((
                Text::new(label),
                TextFont {
                    font_size: 12.0,
                    ..Default::default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

fn handle_list_clicks(
    formation_items: Query<(&Interaction, &FormationItem), Changed<Interaction>>,
    team_items: Query<(&Interaction, &TeamItem), Changed<Interaction>>,
    mut scene: ResMut<Scene>,
    prompt: Res<NamePrompt>,
) {
    // The name prompt is modal; clicks under it do nothing.
    if prompt.active.is_some() {
        return;
    }
    for (interaction, item) in &formation_items {
        if *interaction == Interaction::Pressed {
            info!(target: "ui", "apply formation {}", item.0);
            scene.apply_formation(item.0);
        }
    }
    for (interaction, item) in &team_items {
        if *interaction == Interaction::Pressed {
            info!(target: "ui", "apply team {}", item.0);
            scene.apply_team(item.0);
        }
    }
}

/// Save buttons open the name prompt; the actual request is emitted when the
/// prompt confirms (or falls back to the default name).
fn handle_save_clicks(
    buttons: Query<(&Interaction, &SaveButton), Changed<Interaction>>,
    mut prompt: ResMut<NamePrompt>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed && prompt.active.is_none() {
            prompt.open(button.0);
        }
    }
}

fn style_buttons(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, mut bg) in buttons.iter_mut() {
        *bg = BackgroundColor(match *interaction {
            Interaction::Pressed => BUTTON_BG_PRESSED,
            Interaction::Hovered => BUTTON_BG_HOVER,
            Interaction::None => BUTTON_BG,
        });
    }
}
