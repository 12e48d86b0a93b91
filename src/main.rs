use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use tactic_board::net::api::ApiClient;
use tactic_board::{EditorConfig, EditorPlugin};

#[derive(Parser, Debug)]
#[command(name = "tactic_board", about = "Volleyball tactic board editor")]
struct Args {
    /// Path to the RON configuration file.
    #[arg(long, default_value = "assets/config/editor.ron")]
    config: PathBuf,
    /// Override the backend base URL from the config file.
    #[arg(long)]
    api_base: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Fall back to defaults if the file is missing or malformed; the error is
    // surfaced once logging is up.
    let (mut cfg, load_error) = EditorConfig::load_or_default(&args.config);
    if let Some(base) = args.api_base {
        cfg.api.base_url = base;
    }
    let api = ApiClient::new(cfg.api.base_url.clone()).context("init API client")?;

    let mut app = App::new();
    app.insert_resource(cfg.clone())
        .insert_resource(api)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EditorPlugin);
    if let Some(e) = load_error {
        app.add_systems(Startup, move || {
            warn!(target: "editor", "config not loaded, using defaults: {e}");
        });
    }
    app.run();
    Ok(())
}
