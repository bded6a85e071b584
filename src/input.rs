//! Keyboard shortcuts.
//!
//! - Space: pause / resume the orbit clock
//! - `[` / `]`: halve / double the clock speed
//! - Escape: drop focus and return the camera home
//! - F5: refresh the feed now

use bevy::prelude::*;

use crate::feed::RefreshFeed;
use crate::types::{Focus, OrbitClock};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<OrbitClock>,
    mut focus: ResMut<Focus>,
    mut refresh: ResMut<RefreshFeed>,
) {
    if keys.just_pressed(KeyCode::Space) {
        clock.paused = !clock.paused;
        info!("Orbits {}", if clock.paused { "paused" } else { "running" });
    }

    if keys.just_pressed(KeyCode::BracketLeft) {
        clock.slower();
        info!("Time scale: {}x", clock.scale);
    }

    if keys.just_pressed(KeyCode::BracketRight) {
        clock.faster();
        info!("Time scale: {}x", clock.scale);
    }

    if keys.just_pressed(KeyCode::Escape) && focus.target.is_some() {
        focus.target = None;
        info!("View reset");
    }

    if keys.just_pressed(KeyCode::F5) {
        refresh.requested = true;
    }
}
