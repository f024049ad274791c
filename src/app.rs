use eframe::egui::{self, TextureHandle, TextureOptions};

use crate::state::AppState;
use crate::ui::{panels, preview};

/// Width of the settings column in the original window layout.
pub const SETTINGS_WIDTH: f32 = 480.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct DcrawApp {
    pub state: AppState,
    /// GPU copy of `state.preview`, replaced on every successful reload.
    texture: Option<TextureHandle>,
}

impl DcrawApp {
    fn sync_texture(&mut self, ctx: &egui::Context, reloaded: bool) {
        match &self.state.preview {
            None => self.texture = None,
            Some(p) if reloaded || self.texture.is_none() => {
                if let Some(texture) = &mut self.texture {
                    texture.set(p.pixels.clone(), TextureOptions::LINEAR);
                } else {
                    self.texture = Some(ctx.load_texture("preview", p.pixels.clone(), TextureOptions::LINEAR));
                }
            }
            Some(_) => {}
        }
    }
}

impl eframe::App for DcrawApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Finished conversions ----
        let reloaded = self.state.poll();
        self.sync_texture(ctx, reloaded);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: settings ----
        egui::SidePanel::left("settings_panel")
            .default_width(SETTINGS_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: preview ----
        egui::CentralPanel::default().show(ctx, |ui| {
            preview::preview_panel(ui, &self.state, self.texture.as_ref());
        });
    }
}
