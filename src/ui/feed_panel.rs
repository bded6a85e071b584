//! Live feed panel: the ranked object list.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use super::icons;
use crate::feed::{LiveFeed, RefreshFeed, TrackedObject};
use crate::risk::{RiskBreakdown, RiskLevel};
use crate::types::{BodyKey, Focus};

/// Badge colour for a risk level.
pub fn risk_color(level: RiskLevel) -> egui::Color32 {
    match level {
        RiskLevel::Elevated => colors::ELEVATED,
        RiskLevel::Nominal => colors::NOMINAL,
    }
}

/// Rounded diameter for display.
pub fn format_diameter(meters: f64) -> String {
    format!("{} m", meters.round() as u64)
}

/// Miss distance in millions of km.
pub fn format_miss_distance(km: f64) -> String {
    format!("{:.2} M km", km / 1_000_000.0)
}

/// System that renders the feed panel.
pub fn feed_panel(
    mut contexts: EguiContexts,
    feed: Res<LiveFeed>,
    mut focus: ResMut<Focus>,
    mut refresh: ResMut<RefreshFeed>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::right("feed_panel")
        .resizable(false)
        .default_width(280.0)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} LIVE FEED", icons::FEED));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(!feed.loading, egui::Button::new(icons::REFRESH))
                        .on_hover_text("Refresh now (F5)")
                        .clicked()
                    {
                        refresh.requested = true;
                    }
                });
            });

            render_status(ui, &feed);
            ui.separator();

            if feed.objects.is_empty() && !feed.loading {
                ui.label(egui::RichText::new("No objects reported.").color(colors::MUTED));
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for object in &feed.objects {
                    let key = object.key();
                    let selected = focus.target.as_ref() == Some(&key);
                    if render_row(ui, object, selected) {
                        focus.target = if selected { None } else { Some(key) };
                        if let Some(BodyKey::Asteroid(id)) = &focus.target {
                            info!("Focused object {}", id);
                        }
                    }
                }
            });
        });
}

fn render_status(ui: &mut egui::Ui, feed: &LiveFeed) {
    if feed.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Receiving telemetry...").color(colors::ACCENT));
        });
    } else if let Some(at) = feed.fetched_at {
        ui.label(
            egui::RichText::new(format!(
                "{} {} objects, updated {}",
                icons::CLOCK,
                feed.objects.len(),
                at.format("%H:%M UTC")
            ))
            .small()
            .color(colors::MUTED),
        );
    }

    if let Some(err) = &feed.last_error {
        ui.label(
            egui::RichText::new(format!("{} {}", icons::WARNING, err))
                .small()
                .color(colors::ELEVATED),
        );
    }
}

/// Draw one object. Returns `true` if it was clicked.
fn render_row(ui: &mut egui::Ui, object: &TrackedObject, selected: bool) -> bool {
    let fill = if selected {
        colors::ROW_SELECTED
    } else {
        colors::ROW_BG
    };

    let response = egui::Frame::NONE
        .fill(fill)
        .corner_radius(6)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(format!("{} {}", icons::ASTEROID, object.label()))
                    .monospace()
                    .strong(),
            );
            ui.label(
                egui::RichText::new(format!(
                    "EST. DIAMETER {} \u{2013} {}   MISS {}",
                    format_diameter(object.diameter_min_meters),
                    format_diameter(object.record.diameter_max_meters),
                    format_miss_distance(object.record.miss_distance_km),
                ))
                .small()
                .color(colors::MUTED),
            );

            ui.horizontal(|ui| {
                let color = risk_color(object.risk.level());
                ui.label(
                    egui::RichText::new(format!("RISK {}", object.risk))
                        .strong()
                        .color(color),
                )
                .on_hover_text(breakdown_text(&RiskBreakdown::of(&object.record)));
                if object.record.is_hazardous {
                    ui.label(
                        egui::RichText::new(format!("{} HAZARDOUS", icons::WARNING))
                            .small()
                            .color(colors::ELEVATED),
                    );
                }
            });
        })
        .response
        .interact(egui::Sense::click());

    response.clicked()
}

fn breakdown_text(b: &RiskBreakdown) -> String {
    format!(
        "hazard +{}\nproximity +{}\nsize +{}\nvelocity +{}",
        b.hazard, b.proximity, b.size, b.velocity
    )
}
