//! Orbit clock advancement.
//!
//! Handles progression of the animation clock based on scale and pause state.

use bevy::prelude::*;

use crate::types::OrbitClock;

/// Plugin providing clock advancement.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitClock>()
            .add_systems(Update, advance_clock.in_set(AdvanceClockSet));
    }
}

/// System set for the clock tick, so position sync can run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdvanceClockSet;

fn advance_clock(mut clock: ResMut<OrbitClock>, time: Res<Time>) {
    clock.advance(time.delta_secs_f64());
}
