//! Camera system for the dashboard scene.
//!
//! The camera either rests at its home pose looking at the Sun, or follows the
//! focused body at a fixed offset. Both poses are approached smoothly.

use bevy::{input::mouse::AccumulatedMouseScroll, prelude::*};

use crate::render::{OrbitSlot, SyncPositionsSet};
use crate::types::{BodyKey, Focus};

/// Home eye position, above and behind the ecliptic.
pub const HOME_POSITION: Vec3 = Vec3::new(0.0, 60.0, 120.0);

/// Eye offset from a tracked body.
pub const TRACK_OFFSET: Vec3 = Vec3::new(10.0, 15.0, 20.0);

/// Closest zoom multiplier.
pub const MIN_ZOOM: f32 = 0.2;

/// Farthest zoom multiplier.
pub const MAX_ZOOM: f32 = 3.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Reference frame rate the smoothing factors are tuned for.
const REFERENCE_FPS: f32 = 60.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource tracking camera smoothing state.
#[derive(Resource, Clone, Debug)]
pub struct CameraTracking {
    /// Point the camera currently looks at.
    pub look_at: Vec3,
    /// Fraction of the remaining eye distance covered per reference frame.
    pub eye_smoothing: f32,
    /// Fraction of the remaining look-at distance covered per reference frame.
    pub target_smoothing: f32,
    /// Scales both the home pose and the tracking offset.
    pub zoom: f32,
}

impl Default for CameraTracking {
    fn default() -> Self {
        Self {
            look_at: Vec3::ZERO,
            eye_smoothing: 0.05,
            target_smoothing: 0.1,
            zoom: 1.0,
        }
    }
}

impl CameraTracking {
    /// Where the eye and look-at point are heading for a given tracked position.
    pub fn goal(&self, tracked: Option<Vec3>) -> (Vec3, Vec3) {
        match tracked {
            Some(target) => (target + TRACK_OFFSET * self.zoom, target),
            None => (HOME_POSITION * self.zoom, Vec3::ZERO),
        }
    }

    /// Advance one frame of `dt` seconds. Returns the new eye position.
    pub fn step(&mut self, eye: Vec3, tracked: Option<Vec3>, dt: f32) -> Vec3 {
        let (goal_eye, goal_look) = self.goal(tracked);
        self.look_at = self
            .look_at
            .lerp(goal_look, frame_factor(self.target_smoothing, dt));
        eye.lerp(goal_eye, frame_factor(self.eye_smoothing, dt))
    }
}

/// Convert a per-reference-frame smoothing factor to one for a `dt` step.
fn frame_factor(per_frame: f32, dt: f32) -> f32 {
    1.0 - (1.0 - per_frame.clamp(0.0, 1.0)).powf(dt * REFERENCE_FPS)
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTracking>()
            .init_resource::<Focus>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_zoom, track_focus.after(SyncPositionsSet)));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(HOME_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(mouse_scroll: Res<AccumulatedMouseScroll>, mut tracking: ResMut<CameraTracking>) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }
    let zoom_factor = 1.0 - mouse_scroll.delta.y * ZOOM_SPEED;
    tracking.zoom = (tracking.zoom * zoom_factor).clamp(MIN_ZOOM, MAX_ZOOM);
}

/// Ease the camera toward the focused body's current slot, or home.
fn track_focus(
    time: Res<Time>,
    focus: Res<Focus>,
    mut tracking: ResMut<CameraTracking>,
    bodies: Query<(&BodyKey, &OrbitSlot)>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let tracked = focus.target.as_ref().and_then(|target| {
        bodies
            .iter()
            .find(|(key, _)| *key == target)
            .map(|(_, slot)| slot.position.as_vec3())
    });

    transform.translation = tracking.step(transform.translation, tracked, time.delta_secs());
    let look_at = tracking.look_at;
    transform.look_at(look_at, Vec3::Y);
}
