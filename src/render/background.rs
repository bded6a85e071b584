//! Background rendering for the solar system view.
//!
//! Provides the starfield and scene lighting.

use bevy::prelude::*;
use rand::Rng;

/// Number of background stars.
const STAR_COUNT: usize = 1500;

/// Stars are placed on a shell between these radii.
const STAR_SHELL: std::ops::Range<f32> = 300.0..350.0;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.02)))
            .add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

/// Random point on the star shell.
fn star_position(rng: &mut impl Rng) -> Vec3 {
    let z: f32 = rng.gen_range(-1.0..1.0);
    let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let r = rng.gen_range(STAR_SHELL);
    let ring = (1.0 - z * z).sqrt();
    Vec3::new(ring * theta.cos(), z, ring * theta.sin()) * r
}

fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(0.3));

    let mut rng = rand::thread_rng();
    for _ in 0..STAR_COUNT {
        let scale = rng.gen_range(0.5..1.5);
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(star_position(&mut rng)).with_scale(Vec3::splat(scale)),
        ));
    }

    info!("Spawned {} background stars", STAR_COUNT);
}

/// The Sun is the only light source.
fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        PointLight {
            color: Color::srgb(1.0, 0.84, 0.0),
            intensity: 2.0e9,
            range: 500.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::IDENTITY,
    ));
}
