//! Heat surface rendering and pointer event wiring
//!
//! The drawing itself is deliberately simple (translucent blobs that stack
//! up where samples accumulate); the engine does not constrain it. What
//! matters here is the event wiring: hover transitions arm and pause the
//! recorder, and every pointer move feeds a surface-relative offset into the
//! controller.

use crate::engine::Controller;
use crate::types::Unit;

/// Radius of a rendered heat blob in surface pixels
const BLOB_RADIUS: f32 = 10.0;

/// Per-blob alpha; overlapping samples build up heat
const BLOB_ALPHA: u8 = 72;

/// Render the bounded surface and route its pointer events
pub fn heat_surface(ui: &mut egui::Ui, controller: &mut Controller) {
    let surface = controller.config().surface;
    let size = egui::vec2(surface.width as f32, surface.height as f32);

    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    // Hover transitions drive the arm/pause state machine.
    let hovered = response.hovered();
    let armed = controller.sampling_state().is_armed();
    if hovered && !armed {
        controller.pointer_entered();
    } else if !hovered && armed {
        controller.pointer_left();
    }

    if hovered {
        if let Some(pos) = response.hover_pos() {
            let rel = pos - rect.min;
            controller.pointer_moved(f64::from(rel.x), f64::from(rel.y));
        }
    }

    painter.rect_filled(rect, 2.0, ui.visuals().extreme_bg_color);
    painter.rect_stroke(
        rect,
        2.0,
        ui.visuals().widgets.noninteractive.bg_stroke,
        egui::StrokeKind::Inside,
    );

    let unit = controller.config().unit;
    let max_value = controller.config().value.max_value.max(1);
    for point in controller.store().points() {
        let (px, py) = match unit {
            Unit::Pixel => (point.x as f32, point.y as f32),
            Unit::Percent => (
                point.x as f32 / 100.0 * size.x,
                point.y as f32 / 100.0 * size.y,
            ),
        };
        let center = rect.min + egui::vec2(px, py);
        if !rect.contains(center) {
            continue;
        }
        let warmth = (point.value as f32 / max_value as f32).clamp(0.0, 1.0);
        painter.circle_filled(center, BLOB_RADIUS, heat_color(warmth));
    }
}

/// Map a normalized value onto a cold-to-warm translucent color
fn heat_color(warmth: f32) -> egui::Color32 {
    let r = (255.0 * warmth) as u8;
    let b = (255.0 * (1.0 - warmth)) as u8;
    let g = (96.0 * (1.0 - (warmth - 0.5).abs() * 2.0).max(0.0)) as u8;
    egui::Color32::from_rgba_unmultiplied(r, g, b, BLOB_ALPHA)
}
