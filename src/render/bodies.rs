//! Scene body spawning.
//!
//! Handles the Sun, the catalogue planets and one marker per tracked object.

use bevy::prelude::*;

use crate::feed::LiveFeed;
use crate::orbit::planets::{PLANETS, SUN_RADIUS};
use crate::render::sync::OrbitSlot;
use crate::types::{BodyKey, Focus, OrbitClock};

/// Radius of an asteroid marker sphere.
pub const ASTEROID_RADIUS: f32 = 0.5;

/// Component describing a renderable body.
#[derive(Component, Clone, Debug)]
pub struct SceneBody {
    /// Human-readable name.
    pub name: String,
    /// Sphere radius in scene units.
    pub radius: f32,
}

/// Marks entities spawned from the live feed.
#[derive(Component, Clone, Copy, Debug)]
pub struct AsteroidMarker {
    pub hazardous: bool,
}

/// Plugin providing the static solar system.
pub struct SceneBodyPlugin;

impl Plugin for SceneBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system);
    }
}

fn srgb([r, g, b]: [f32; 3]) -> Color {
    Color::srgb(r, g, b)
}

fn hazard_color(hazardous: bool) -> Color {
    if hazardous {
        Color::srgb(1.0, 0.2, 0.2)
    } else {
        Color::srgb(0.53, 0.8, 0.53)
    }
}

/// Spawn the Sun and all planets.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    clock: Res<OrbitClock>,
) {
    let sun_color = Color::srgb(1.0, 0.84, 0.0);
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.65, 0.0),
            emissive: sun_color.to_linear() * 2.0,
            ..default()
        })),
        Transform::IDENTITY,
        SceneBody {
            name: "Sun".to_string(),
            radius: SUN_RADIUS,
        },
    ));

    for planet in &PLANETS {
        let orbit = planet.orbit();
        let slot = OrbitSlot::at(&orbit, clock.elapsed);

        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(planet.size))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: srgb(planet.color),
                ..default()
            })),
            Transform::from_translation(slot.position.as_vec3()),
            SceneBody {
                name: planet.name.to_string(),
                radius: planet.size,
            },
            planet.key(),
            orbit,
            slot,
        ));
    }

    info!("Spawned Sun and {} planets", PLANETS.len());
}

/// Drop focus on an asteroid the latest feed no longer reports.
pub fn release_lost_focus(feed: Res<LiveFeed>, mut focus: ResMut<Focus>) {
    if !feed.is_changed() {
        return;
    }
    let Some(BodyKey::Asteroid(id)) = &focus.target else {
        return;
    };
    if feed.objects.iter().all(|object| object.id != *id) {
        info!("Focused object {} left the feed", id);
        focus.target = None;
    }
}

/// Rebuild asteroid markers whenever a new feed revision is published.
pub fn respawn_asteroids(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    feed: Res<LiveFeed>,
    clock: Res<OrbitClock>,
    existing: Query<Entity, With<AsteroidMarker>>,
    mut seen_revision: Local<u64>,
) {
    if feed.revision == *seen_revision {
        return;
    }
    *seen_revision = feed.revision;

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let mesh = meshes.add(Sphere::new(ASTEROID_RADIUS));
    let hazardous_material = materials.add(StandardMaterial {
        base_color: hazard_color(true),
        ..default()
    });
    let benign_material = materials.add(StandardMaterial {
        base_color: hazard_color(false),
        ..default()
    });

    for object in &feed.objects {
        let hazardous = object.record.is_hazardous;
        let orbit = object.orbit();
        let slot = OrbitSlot::at(&orbit, clock.elapsed);
        let material = if hazardous {
            hazardous_material.clone()
        } else {
            benign_material.clone()
        };

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(slot.position.as_vec3()),
            SceneBody {
                name: object.label().to_string(),
                radius: ASTEROID_RADIUS,
            },
            AsteroidMarker { hazardous },
            BodyKey::Asteroid(object.id.clone()),
            orbit,
            slot,
        ));
    }

    info!(
        "Spawned {} asteroid markers (feed revision {})",
        feed.objects.len(),
        feed.revision
    );
}
