//! Focus highlighting.
//!
//! Draws a ring around the focused body so it stands out among the markers.

use bevy::prelude::*;

use crate::render::bodies::SceneBody;
use crate::render::orbits::ring_points;
use crate::render::sync::{OrbitSlot, SyncPositionsSet};
use crate::types::{BodyKey, Focus};

/// Plugin providing the focus ring.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_focus_ring.after(SyncPositionsSet));
    }
}

fn draw_focus_ring(
    mut gizmos: Gizmos,
    focus: Res<Focus>,
    bodies: Query<(&BodyKey, &SceneBody, &OrbitSlot)>,
) {
    let Some(target) = &focus.target else {
        return;
    };
    let Some((_, body, slot)) = bodies.iter().find(|(key, _, _)| *key == target) else {
        return;
    };

    let center = slot.position.as_vec3();
    let ring_radius = body.radius.max(1.0) * 1.8;
    let color = Color::srgba(0.0, 1.0, 1.0, 0.8);

    for pair in ring_points(ring_radius, 32).windows(2) {
        gizmos.line(center + pair[0], center + pair[1], color);
    }
}
