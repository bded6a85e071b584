//! Cosmic Watch - Near-Earth Object Dashboard
//!
//! A desktop dashboard that scores today's near-Earth objects for risk and
//! shows them orbiting a stylized solar system.

use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use cosmic_watch::camera::CameraPlugin;
use cosmic_watch::config::{AppConfig, Cli};
use cosmic_watch::feed::plugin::FeedSchedule;
use cosmic_watch::feed::{FeedClient, FeedPlugin, TrackedObject};
use cosmic_watch::input::InputPlugin;
use cosmic_watch::render::RenderPlugin;
use cosmic_watch::time::TimePlugin;
use cosmic_watch::types::OrbitClock;
use cosmic_watch::ui::UiPlugin;

fn main() -> Result<()> {
    let config = Cli::parse()
        .into_config()
        .context("invalid configuration")?;

    if config.list_only {
        return print_feed(&config);
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Cosmic Watch".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(config.feed.clone())
        .insert_resource(FeedSchedule {
            every: config.refresh,
        })
        .insert_resource(OrbitClock::with_scale(config.time_scale))
        .add_plugins((
            TimePlugin,
            FeedPlugin,
            RenderPlugin,
            CameraPlugin,
            InputPlugin,
            UiPlugin,
        ))
        .run();

    Ok(())
}

/// Fetch once and print the ranked list.
fn print_feed(config: &AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let client = FeedClient::new(config.feed.clone()).context("failed to build HTTP client")?;
    let objects = runtime.block_on(client.fetch_or_fallback(Vec::new()));

    if objects.is_empty() {
        println!("No objects reported.");
        return Ok(());
    }

    println!(
        "{:>5}  {:<28} {:>12} {:>10} {:>12}",
        "RISK", "NAME", "MISS (km)", "DIAM (m)", "VEL (km/h)"
    );
    for object in &objects {
        println!("{}", list_row(object));
    }
    Ok(())
}

fn list_row(object: &TrackedObject) -> String {
    format!(
        "{:>5}  {:<28} {:>12.0} {:>10.0} {:>12.0}  {}",
        object.risk.to_string(),
        object.label(),
        object.record.miss_distance_km,
        object.record.diameter_max_meters,
        object.record.relative_velocity_kph,
        if object.record.is_hazardous { "HAZARDOUS" } else { "" }
    )
}
