//! Frontend module for egui UI
//!
//! Thin collaborators around the engine: a controls form, the heat surface
//! that feeds pointer events into the controller, and the JSON data editor
//! with clipboard copy. None of these hold engine state; every mutation
//! routes through [`Controller`].
//!
//! # Layout
//!
//! - Top panel: configuration controls (reset, randomize, dimensions,
//!   values, unit and format toggles)
//! - Central panel: the bounded heat surface; hovering arms the recorder
//! - Bottom panel: the serialized dataset, editable in place

mod controls;
mod data_editor;
mod heat_view;

pub use data_editor::DataEditorState;

use crate::engine::Controller;
use crate::types::SAMPLE_INTERVAL;

/// Main application state for the heatmap generator
pub struct HeatGenApp {
    controller: Controller,
    editor: DataEditorState,
    last_error: Option<String>,
}

impl HeatGenApp {
    /// Create the application around a ready controller
    pub fn new(_cc: &eframe::CreationContext<'_>, controller: Controller) -> Self {
        Self {
            controller,
            editor: DataEditorState::default(),
            last_error: None,
        }
    }
}

impl eframe::App for HeatGenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            controls::controls_panel(ui, &mut self.controller, &mut self.last_error);
        });

        egui::TopBottomPanel::bottom("data_editor")
            .resizable(true)
            .default_height(160.0)
            .show(ctx, |ui| {
                data_editor::data_editor_panel(ui, &mut self.controller, &mut self.editor);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            heat_view::heat_surface(ui, &mut self.controller);
        });

        // Keep ticks draining while the pointer rests on the surface.
        ctx.request_repaint_after(SAMPLE_INTERVAL);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.detach();
        tracing::info!("recorder detached, tick source stopped");
    }
}
