//! Position synchronization between the orbit calculator and rendering.
//!
//! Each body owns an [`OrbitSlot`] that this system overwrites once per frame.
//! Anything that needs a body's current position (camera tracking, the focus
//! highlight) reads the slot. Descriptors are never written to.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::orbit::{OrbitingBodyDescriptor, position};
use crate::types::OrbitClock;

/// System set label for position sync.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyncPositionsSet;

/// Latest computed orbit position of one body.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitSlot {
    pub position: DVec3,
}

impl OrbitSlot {
    /// Slot pre-filled with the body's position at `elapsed`.
    pub fn at(body: &OrbitingBodyDescriptor, elapsed: f64) -> Self {
        Self {
            position: position(body, elapsed),
        }
    }
}

/// Recompute every body's position for the current clock value.
pub fn sync_orbit_positions(
    clock: Res<OrbitClock>,
    mut query: Query<(&OrbitingBodyDescriptor, &mut OrbitSlot, &mut Transform)>,
) {
    for (body, mut slot, mut transform) in query.iter_mut() {
        slot.position = position(body, clock.elapsed);
        transform.translation = slot.position.as_vec3();
    }
}
