use bevy::prelude::*;

use crate::core::config::EditorConfig;
use crate::core::scene::Scene;
use crate::interaction::drag::DragPlugin;
use crate::net::sync::NetSyncPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::field::FieldPlugin;
use crate::ui::name_prompt::NamePromptPlugin;
use crate::ui::panels::PanelsPlugin;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Scene>()
            .add_plugins((
                CameraPlugin,
                FieldPlugin,
                DragPlugin,
                NetSyncPlugin,
                PanelsPlugin,
                NamePromptPlugin,
            ))
            .add_systems(Startup, log_config_warnings);
    }
}

fn log_config_warnings(cfg: Res<EditorConfig>) {
    for warning in cfg.validate() {
        warn!(target: "editor", "config: {warning}");
    }
}
