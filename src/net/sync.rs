use bevy::prelude::*;

use super::api::ApiClient;
use crate::core::scene::Scene;

pub struct NetSyncPlugin;

impl Plugin for NetSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SaveRequest>()
            .add_systems(Startup, initial_load)
            .add_systems(Update, handle_save_requests);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Formation,
    Team,
}

/// Emitted by the UI once a save has a (possibly defaulted) name.
#[derive(Event, Debug, Clone)]
pub struct SaveRequest {
    pub kind: SaveKind,
    pub name: String,
}

/// One-shot startup load: both lists fetched concurrently, joined before the
/// scene is touched. A failed load leaves the court empty; there is no retry.
fn initial_load(api: Res<ApiClient>, mut scene: ResMut<Scene>) {
    match api.fetch_all() {
        Ok((formations, teams)) => {
            info!(
                target: "net",
                "loaded {} formations, {} teams",
                formations.len(),
                teams.len()
            );
            scene.load(formations, teams);
        }
        Err(e) => {
            warn!(target: "net", "initial load failed: {e:#}");
        }
    }
}

/// Persist the current scene, then reload everything from the backend rather
/// than patching the lists locally. Failures are logged and otherwise
/// unreported.
fn handle_save_requests(
    mut requests: EventReader<SaveRequest>,
    api: Res<ApiClient>,
    mut scene: ResMut<Scene>,
) {
    for req in requests.read() {
        let result = match req.kind {
            SaveKind::Formation => match scene.formation_doc(req.name.clone()) {
                Some(doc) => api.save_formation(&doc),
                None => {
                    warn!(target: "net", "no ball on the court; formation not saved");
                    continue;
                }
            },
            SaveKind::Team => api.save_team(&scene.team_doc(req.name.clone())),
        };
        match result {
            Ok(()) => {
                info!(target: "net", "saved {:?} '{}'", req.kind, req.name);
                match api.fetch_all() {
                    Ok((formations, teams)) => scene.load(formations, teams),
                    Err(e) => warn!(target: "net", "reload after save failed: {e:#}"),
                }
            }
            Err(e) => warn!(target: "net", "save {:?} failed: {e:#}", req.kind),
        }
    }
}
