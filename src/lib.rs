pub mod app;
pub mod core;
pub mod interaction;
pub mod net;
pub mod rendering;
pub mod ui;

// Curated re-exports
pub use crate::app::EditorPlugin;
pub use crate::core::config::EditorConfig;
pub use crate::core::model::{FormationDoc, TeamDoc};
pub use crate::core::scene::{PlayerState, Scene};
