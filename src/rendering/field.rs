use bevy::prelude::*;
use bevy::sprite::MeshMaterial2d;

use crate::core::config::EditorConfig;
use crate::core::scene::Scene;

/// Z-depths, back to front: background, border, markers, attack sector,
/// players, ball.
pub const BACKGROUND_Z: f32 = 0.0;
pub const BORDER_Z: f32 = 1.0;
pub const MARKER_Z: f32 = 2.0;
pub const SECTOR_Z: f32 = 5.0;
pub const PLAYER_Z: f32 = 10.0;
pub const BALL_Z: f32 = 20.0;

/// Draw radii in court units (hit radii live in the interaction config).
pub const PLAYER_DRAW_RADIUS: f32 = 15.0;
pub const BALL_DRAW_RADIUS: f32 = 10.0;
pub const MARKER_DRAW_RADIUS: f32 = 12.0;
const MARKER_RING_WIDTH: f32 = 1.5;
const BORDER_THICKNESS: f32 = 2.0;

const COURT_FILL: Color = Color::srgb(0.94, 0.94, 0.94);
const BORDER_COLOR: Color = Color::BLACK;
const MARKER_COLOR: Color = Color::srgb(0.55, 0.55, 0.55);
const PLAYER_COLOR: Color = Color::srgb(0.0, 0.48, 0.8);
const BALL_COLOR: Color = Color::srgb(0.9, 0.22, 0.27);
const SECTOR_COLOR: Color = Color::srgba(0.9, 0.22, 0.27, 0.18);
const LABEL_COLOR: Color = Color::WHITE;

pub struct FieldPlugin;

impl Plugin for FieldPlugin {
    fn build(&self, app: &mut App) {
        // Integration tests run on MinimalPlugins; make sure the asset
        // storages this plugin writes to exist.
        if app.world().get_resource::<Assets<Mesh>>().is_none() {
            app.init_resource::<Assets<Mesh>>();
        }
        if app
            .world()
            .get_resource::<Assets<ColorMaterial>>()
            .is_none()
        {
            app.init_resource::<Assets<ColorMaterial>>();
        }
        app.add_systems(Startup, setup_field)
            .add_systems(Update, sync_scene_visuals);
    }
}

/// Shared mesh/material handles so drag frames only respawn entities, not
/// assets. The sector mesh is the exception: its shape follows the ball, so
/// its handle is overwritten in place on every rebuild.
#[derive(Resource)]
pub struct FieldAssets {
    pub player_mesh: Handle<Mesh>,
    pub ball_mesh: Handle<Mesh>,
    pub marker_mesh: Handle<Mesh>,
    pub sector_mesh: Handle<Mesh>,
    pub player_material: Handle<ColorMaterial>,
    pub ball_material: Handle<ColorMaterial>,
    pub marker_material: Handle<ColorMaterial>,
    pub sector_material: Handle<ColorMaterial>,
}

/// Marker for entities rebuilt on every scene change.
#[derive(Component)]
pub struct SceneVisual;

fn setup_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<EditorConfig>,
) {
    commands.spawn((
        Sprite::from_color(COURT_FILL, Vec2::new(cfg.court.width, cfg.court.height)),
        Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
    ));
    spawn_border(&mut commands, &cfg);
    commands.insert_resource(FieldAssets {
        player_mesh: meshes.add(Circle::new(PLAYER_DRAW_RADIUS)),
        ball_mesh: meshes.add(Circle::new(BALL_DRAW_RADIUS)),
        marker_mesh: meshes.add(Mesh::from(Annulus::new(
            MARKER_DRAW_RADIUS - MARKER_RING_WIDTH,
            MARKER_DRAW_RADIUS,
        ))),
        sector_mesh: meshes.add(Mesh::from(Triangle2d::new(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO))),
        player_material: materials.add(ColorMaterial::from(PLAYER_COLOR)),
        ball_material: materials.add(ColorMaterial::from(BALL_COLOR)),
        marker_material: materials.add(ColorMaterial::from(MARKER_COLOR)),
        sector_material: materials.add(ColorMaterial::from(SECTOR_COLOR)),
    });
}

/// Court outline as four thin sprites just above the background, so it sits
/// below markers, players and the ball as the draw order requires.
fn spawn_border(commands: &mut Commands, cfg: &EditorConfig) {
    let w = cfg.court.width;
    let h = cfg.court.height;
    let t = BORDER_THICKNESS;
    let sides = [
        (Vec2::new(0.0, h / 2.0), Vec2::new(w + t, t)),
        (Vec2::new(0.0, -h / 2.0), Vec2::new(w + t, t)),
        (Vec2::new(-w / 2.0, 0.0), Vec2::new(t, h + t)),
        (Vec2::new(w / 2.0, 0.0), Vec2::new(t, h + t)),
    ];
    for (pos, size) in sides {
        commands.spawn((
            Sprite::from_color(BORDER_COLOR, size),
            Transform::from_xyz(pos.x, pos.y, BORDER_Z),
        ));
    }
}

/// Whenever the scene changes, tear down and respawn the marker rings, the
/// sector triangle, the player circles with their labels, and the ball
/// circle. Deterministic full rebuild, no differential updates.
fn sync_scene_visuals(
    mut commands: Commands,
    scene: Res<Scene>,
    assets: Res<FieldAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    visuals: Query<Entity, With<SceneVisual>>,
    cfg: Res<EditorConfig>,
) {
    if !scene.is_changed() {
        return;
    }
    for entity in &visuals {
        commands.entity(entity).despawn();
    }

    for marker in &scene.markers {
        let pos = cfg.court.court_to_world(*marker);
        commands.spawn((
            SceneVisual,
            Mesh2d(assets.marker_mesh.clone()),
            MeshMaterial2d(assets.marker_material.clone()),
            Transform::from_xyz(pos.x, pos.y, MARKER_Z),
        ));
    }

    // Attack sector: ball to the two net ends (court edges at mid-height).
    if let Some(ball) = scene.ball {
        let a = cfg.court.court_to_world(ball);
        let b = cfg.court.court_to_world(Vec2::new(0.0, cfg.court.net_y()));
        let c = cfg.court.court_to_world(Vec2::new(cfg.court.width, cfg.court.net_y()));
        meshes.insert(&assets.sector_mesh, Mesh::from(Triangle2d::new(a, b, c)));
        commands.spawn((
            SceneVisual,
            Mesh2d(assets.sector_mesh.clone()),
            MeshMaterial2d(assets.sector_material.clone()),
            Transform::from_xyz(0.0, 0.0, SECTOR_Z),
        ));
    }

    for player in &scene.players {
        let pos = cfg.court.court_to_world(player.pos);
        commands
            .spawn((
                SceneVisual,
                Mesh2d(assets.player_mesh.clone()),
                MeshMaterial2d(assets.player_material.clone()),
                Transform::from_xyz(pos.x, pos.y, PLAYER_Z),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text2d::new(player.name.clone()),
                    TextFont {
                        font_size: 11.0,
                        ..Default::default()
                    },
                    TextColor(LABEL_COLOR),
                    Transform::from_xyz(0.0, 0.0, 1.0),
                ));
            });
    }

    if let Some(ball) = scene.ball {
        let pos = cfg.court.court_to_world(ball);
        commands.spawn((
            SceneVisual,
            Mesh2d(assets.ball_mesh.clone()),
            MeshMaterial2d(assets.ball_material.clone()),
            Transform::from_xyz(pos.x, pos.y, BALL_Z),
        ));
    }
}
