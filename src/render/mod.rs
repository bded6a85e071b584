//! Rendering systems for the dashboard scene.
//!
//! This module provides the Sun, planets, tracked asteroids, orbit rings,
//! the focus highlight and background elements.

mod background;
pub mod bodies;
pub mod highlight;
mod orbits;
pub mod sync;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::{SceneBodyPlugin, release_lost_focus, respawn_asteroids};
use self::highlight::HighlightPlugin;
use self::orbits::OrbitRingPlugin;
use self::sync::sync_orbit_positions;
use crate::time::AdvanceClockSet;
use crate::types::Focus;

pub use self::bodies::{AsteroidMarker, SceneBody};
pub use self::orbits::OrbitRingSettings;
pub use self::sync::{OrbitSlot, SyncPositionsSet};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Focus>().add_plugins((
            SceneBodyPlugin,
            BackgroundPlugin,
            OrbitRingPlugin,
            HighlightPlugin,
        ))
        // Asteroids are rebuilt from the feed before positions are written,
        // so new entities never show a frame at the origin.
        .add_systems(
            Update,
            (
                release_lost_focus,
                respawn_asteroids,
                sync_orbit_positions.in_set(SyncPositionsSet),
            )
                .chain()
                .after(AdvanceClockSet),
        );
    }
}
