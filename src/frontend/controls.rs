//! Configuration controls panel

use crate::config::MAX_SURFACE_DIM;
use crate::engine::Controller;
use crate::types::Unit;

/// Render the configuration form and dataset actions.
///
/// Edits are applied through the controller as they change; rejected edits
/// land in `last_error` and leave the prior configuration in effect.
pub fn controls_panel(
    ui: &mut egui::Ui,
    controller: &mut Controller,
    last_error: &mut Option<String>,
) {
    ui.horizontal_wrapped(|ui| {
        if ui.button("Reset").clicked() {
            controller.reset();
            *last_error = None;
        }
        if ui.button("Randomize").clicked() {
            report(controller.randomize(), last_error);
        }

        ui.separator();

        let surface = controller.config().surface;
        let mut width = surface.width;
        let mut height = surface.height;

        ui.label("Width:");
        let width_changed = ui
            .add(
                egui::DragValue::new(&mut width)
                    .range(1..=MAX_SURFACE_DIM)
                    .speed(4),
            )
            .changed();

        ui.label("Height:");
        let height_changed = ui
            .add(
                egui::DragValue::new(&mut height)
                    .range(1..=MAX_SURFACE_DIM)
                    .speed(4),
            )
            .changed();

        if width_changed || height_changed {
            report(controller.set_surface_size(width, height), last_error);
        }

        ui.separator();

        let values = controller.config().value;
        let mut value = values.value;
        ui.label("Value:");
        if ui
            .add(egui::DragValue::new(&mut value).range(1..=values.max_value))
            .changed()
        {
            report(controller.set_value(value), last_error);
        }

        let mut max_value = values.max_value;
        ui.label("Max value:");
        if ui
            .add(egui::DragValue::new(&mut max_value).range(1..=1000))
            .changed()
        {
            report(controller.set_max_value(max_value), last_error);
        }

        ui.separator();

        let mut percent = controller.config().unit == Unit::Percent;
        let unit_label = format!("Units: {}", controller.config().unit);
        if ui.checkbox(&mut percent, unit_label).changed() {
            let unit = if percent { Unit::Percent } else { Unit::Pixel };
            report(controller.set_unit(unit), last_error);
        }

        let mut pretty = controller.config().pretty;
        let format_label = format!("Formatting: {}", if pretty { "On" } else { "Off" });
        if ui.checkbox(&mut pretty, format_label).changed() {
            controller.set_pretty(pretty);
        }

        ui.separator();

        if controller.sampling_state().is_armed() {
            ui.colored_label(egui::Color32::from_rgb(255, 100, 100), "● SAMPLING");
        } else {
            ui.weak("idle");
        }
    });

    if let Some(err) = last_error {
        ui.colored_label(ui.visuals().error_fg_color, err.as_str());
    }
}

fn report(result: crate::error::Result<()>, last_error: &mut Option<String>) {
    match result {
        Ok(_) => *last_error = None,
        Err(e) => *last_error = Some(e.to_string()),
    }
}
