//! Cosmic Watch - Near-Earth Object Dashboard
//!
//! A library crate providing risk scoring, orbit placement and the feed
//! client, plus the Bevy plugins that put them on screen.

pub mod camera;
pub mod config;
pub mod feed;
pub mod input;
pub mod neo;
pub mod orbit;
pub mod render;
pub mod risk;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
