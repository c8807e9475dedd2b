//! Per-frame draw calls
//!
//! Order: baseline, then for each arc by index the band, its ringer and its
//! cycle label, then the overlay text.

use glam::Vec2;

use crate::consts::*;
use crate::renderer::{Surface, colors};
use crate::settings::{ColorMode, Settings};
use crate::sim::{ArcSegment, SimState};

/// Size of the per-arc cycle labels
const LABEL_SIZE: f32 = 10.0;

fn arc_color(arc: &ArcSegment, count: usize, mode: ColorMode) -> [f32; 4] {
    match mode {
        ColorMode::Mono => colors::ARC,
        ColorMode::Spectrum => colors::spectrum(arc.color_tag, count, 0.55),
    }
}

fn ringer_color(arc: &ArcSegment, count: usize, mode: ColorMode) -> [f32; 4] {
    match mode {
        ColorMode::Mono => colors::RINGER,
        ColorMode::Spectrum => colors::spectrum(arc.ringer.color_tag, count, 1.0),
    }
}

/// Issue every draw call for the current state
pub fn draw_frame<S: Surface>(state: &SimState, settings: &Settings, surface: &mut S) {
    let center = state.layout.center;
    let count = state.arcs.len();

    surface.clear(colors::BACKGROUND);

    surface.draw_rect(
        Vec2::new(SIDE_PADDING as f32, center.y + (LINE_WIDTH / 2) as f32),
        Vec2::new((WINDOW_WIDTH - 2 * SIDE_PADDING) as f32, LINE_WIDTH as f32),
        colors::BASELINE,
    );

    for arc in &state.arcs {
        surface.draw_arc(
            center,
            arc.inner_radius(),
            arc.outer_radius(),
            arc_color(arc, count, settings.color_mode),
        );
        surface.draw_point(
            arc.ringer.position,
            RINGER_RADIUS,
            ringer_color(arc, count, settings.color_mode),
        );

        if settings.show_cycle_labels {
            let remaining = arc
                .ringer
                .impacts_remaining_in_cycle(state.time, state.cycle_seconds());
            let (right, _) = arc.baseline_contacts(center);
            surface.draw_text(
                &remaining.to_string(),
                right + Vec2::new(-LABEL_SIZE / 2.0, (LINE_WIDTH * 2) as f32),
                LABEL_SIZE,
                colors::TEXT,
            );
        }
    }

    if settings.show_overlay {
        let font = FONT_SIZE as f32;
        surface.draw_text(
            &format!("FRAME: {:.4}", state.time),
            Vec2::ZERO,
            font,
            colors::TEXT,
        );
        surface.draw_text(
            &format!("playCount: {}", state.impact_count),
            Vec2::new(0.0, font),
            font,
            colors::TEXT,
        );

        let title_width = surface.measure_text(APP_TITLE, font);
        surface.draw_text(
            APP_TITLE,
            Vec2::new(
                (WINDOW_WIDTH as f32 - title_width) / 2.0,
                (WINDOW_HEIGHT - FONT_SIZE - BOTTOM_PADDING / 4) as f32,
            ),
            font,
            colors::TEXT,
        );
    }
}
