//! Dataset text editor with clipboard copy
//!
//! The textarea mirrors the store's serialized text and is editable in
//! place. While the editor has focus the buffer belongs to the user; a
//! malformed edit is reported inline without touching the dataset, and the
//! buffer refreshes from the store once focus is released.

use crate::engine::Controller;

/// Buffer and inline error state for the dataset editor
#[derive(Default)]
pub struct DataEditorState {
    text: String,
    parse_error: Option<String>,
}

/// Render the dataset text panel
pub fn data_editor_panel(
    ui: &mut egui::Ui,
    controller: &mut Controller,
    state: &mut DataEditorState,
) {
    let editor_id = egui::Id::new("dataset_text");
    let editing = ui.ctx().memory(|m| m.has_focus(editor_id));
    if !editing {
        match controller.serialized() {
            Ok(text) => {
                state.text = text;
                state.parse_error = None;
            }
            Err(e) => state.parse_error = Some(e.to_string()),
        }
    }

    ui.horizontal(|ui| {
        ui.label(format!("{} points", controller.store().len()));
        if ui.button("Copy to clipboard").clicked() {
            ui.ctx().copy_text(state.text.clone());
        }
        if let Some(err) = &state.parse_error {
            ui.colored_label(ui.visuals().error_fg_color, err);
        }
    });

    let response = ui.add_sized(
        ui.available_size(),
        egui::TextEdit::multiline(&mut state.text)
            .id(editor_id)
            .code_editor()
            .desired_width(f32::INFINITY),
    );

    if response.changed() {
        match controller.apply_text_edit(&state.text) {
            Ok(_) => state.parse_error = None,
            Err(e) => state.parse_error = Some(e.to_string()),
        }
    }
}
