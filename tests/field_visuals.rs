use bevy::prelude::*;
use tactic_board::core::model::FormationDoc;
use tactic_board::rendering::field::{
    FieldAssets, FieldPlugin, BACKGROUND_Z, BALL_Z, BORDER_Z, MARKER_Z, PLAYER_Z, SECTOR_Z,
};
use tactic_board::{EditorConfig, Scene};

fn field_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(EditorConfig::default());
    app.init_resource::<Scene>();
    app.add_plugins(FieldPlugin);
    app
}

fn formation(name: &str, ball: [f32; 2], offsets: Vec<[f32; 2]>) -> FormationDoc {
    FormationDoc {
        name: name.into(),
        ball,
        offsets,
        names: vec![],
    }
}

fn load_two_formations(app: &mut App) {
    app.world_mut().resource_mut::<Scene>().load(
        vec![
            formation("4-2", [50.0, 50.0], vec![[10.0, 0.0], [-10.0, 0.0]]),
            formation("6-0", [120.0, 80.0], vec![]),
        ],
        vec![],
    );
}

/// Transform z per mesh kind, looked up through the shared asset handles.
fn mesh_depths(app: &mut App) -> (Vec<f32>, Vec<f32>, Vec<f32>, Vec<f32>) {
    let assets = app.world().resource::<FieldAssets>();
    let (marker, sector, player, ball) = (
        assets.marker_mesh.clone(),
        assets.sector_mesh.clone(),
        assets.player_mesh.clone(),
        assets.ball_mesh.clone(),
    );
    let (mut markers, mut sectors, mut players, mut balls) =
        (vec![], vec![], vec![], vec![]);
    let mut query = app.world_mut().query::<(&Mesh2d, &Transform)>();
    for (mesh, tf) in query.iter(app.world()) {
        let z = tf.translation.z;
        if mesh.0 == marker {
            markers.push(z);
        } else if mesh.0 == sector {
            sectors.push(z);
        } else if mesh.0 == player {
            players.push(z);
        } else if mesh.0 == ball {
            balls.push(z);
        }
    }
    (markers, sectors, players, balls)
}

#[test]
fn markers_are_rings_below_sector_players_and_ball() {
    let mut app = field_app();
    app.update();
    load_two_formations(&mut app);
    app.update();

    let (markers, sectors, players, balls) = mesh_depths(&mut app);
    assert_eq!(markers, vec![MARKER_Z, MARKER_Z], "one ring per formation");
    assert_eq!(sectors, vec![SECTOR_Z]);
    assert_eq!(players, vec![PLAYER_Z, PLAYER_Z]);
    assert_eq!(balls, vec![BALL_Z]);

    // Back-to-front: background, border, markers, sector, players, ball.
    assert!(BACKGROUND_Z < BORDER_Z);
    assert!(BORDER_Z < MARKER_Z);
    assert!(MARKER_Z < SECTOR_Z);
    assert!(SECTOR_Z < PLAYER_Z);
    assert!(PLAYER_Z < BALL_Z);
}

#[test]
fn border_is_retained_above_background() {
    let mut app = field_app();
    app.update();

    let mut query = app.world_mut().query::<(&Sprite, &Transform)>();
    let depths: Vec<f32> = query
        .iter(app.world())
        .map(|(_, tf)| tf.translation.z)
        .collect();
    assert_eq!(
        depths.iter().filter(|&&z| z == BORDER_Z).count(),
        4,
        "four border strips"
    );
    assert_eq!(depths.iter().filter(|&&z| z == BACKGROUND_Z).count(), 1);
}

#[test]
fn sector_and_ball_disappear_without_a_ball() {
    let mut app = field_app();
    app.update();
    load_two_formations(&mut app);
    app.update();

    {
        let mut scene = app.world_mut().resource_mut::<Scene>();
        scene.ball = None;
    }
    app.update();

    let (markers, sectors, players, balls) = mesh_depths(&mut app);
    assert_eq!(markers.len(), 2, "rings stay with the loaded formations");
    assert!(sectors.is_empty());
    assert_eq!(players.len(), 2);
    assert!(balls.is_empty());
}
