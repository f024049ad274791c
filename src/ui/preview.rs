use eframe::egui::{self, TextureHandle, Ui};

use crate::preview::fit_size;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Preview (central panel)
// ---------------------------------------------------------------------------

/// Render the last preview, scaled down to fit the panel.
pub fn preview_panel(ui: &mut Ui, state: &AppState, texture: Option<&TextureHandle>) {
    let (preview, texture) = match (&state.preview, texture) {
        (Some(p), Some(t)) => (p, t),
        _ => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Pick a raw image and press Preview");
            });
            return;
        }
    };

    let available = ui.available_size();
    let [w, h] = fit_size(preview.width, preview.height, [available.x, available.y]);

    ui.centered_and_justified(|ui: &mut Ui| {
        ui.add(egui::Image::new(texture).fit_to_exact_size(egui::vec2(w, h)))
            .on_hover_text(preview.path.display().to_string());
    });
}
