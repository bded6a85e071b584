//! UI module providing the egui dashboard overlay.
//!
//! A ranked feed list on the right, planet shortcuts top-left and time
//! controls along the bottom. Everything else on screen is the 3D scene.

pub mod feed_panel;
pub mod icons;
mod scene_panel;
pub mod time_controls;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Colors for the dashboard UI.
pub(crate) mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(21, 25, 37, 230);
    pub const ROW_BG: Color32 = Color32::from_rgb(11, 13, 23);
    pub const ROW_SELECTED: Color32 = Color32::from_rgb(28, 48, 96);
    pub const ELEVATED: Color32 = Color32::from_rgb(248, 113, 113);
    pub const NOMINAL: Color32 = Color32::from_rgb(52, 211, 153);
    pub const ACCENT: Color32 = Color32::from_rgb(96, 165, 250);
    pub const MUTED: Color32 = Color32::from_rgb(140, 145, 160);
}

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Panels first so the floating window lays out in the remaining space
                    feed_panel::feed_panel,
                    time_controls::time_controls_panel,
                    scene_panel::scene_panel,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
