use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::convert::options::{BRIGHTNESS_RANGE, GAMMA_RANGE, MULTIPLIER_RANGE};
use crate::convert::{OutputFormat, RunMode, WhiteBalance};
use crate::state::{AppState, Status};

/// Raw formats offered by the file picker. dcraw reads many more; "All files" covers them.
const RAW_EXTENSIONS: &[&str] = &[
    "crw", "cr2", "raw", "rw2", "nef", "dng", "arw", "orf", "pef", "raf", "srw",
    "CRW", "CR2", "RAW", "RW2", "NEF", "DNG", "ARW", "ORF", "PEF", "RAF", "SRW",
];

// ---------------------------------------------------------------------------
// Left side panel – conversion settings
// ---------------------------------------------------------------------------

/// Render the settings panel. Disabled while a conversion is running.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Settings");
    ui.separator();

    let enabled = !state.is_busy();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.add_enabled_ui(enabled, |ui: &mut Ui| {
                file_pickers(ui, state);
                ui.separator();

                format_group(ui, state);
                ui.separator();

                ui.checkbox(&mut state.options.interpolate_rgbg, "Interpolate RGBG");
                ui.add(Slider::new(&mut state.options.gamma, GAMMA_RANGE).text("Gamma"));
                ui.add(Slider::new(&mut state.options.brightness, BRIGHTNESS_RANGE).text("Brightness"));
                ui.separator();

                white_balance_group(ui, state);
                ui.separator();

                action_buttons(ui, state);
            });

            if let Some(cmd) = state.pending_command() {
                ui.add_space(8.0);
                ui.strong("Command");
                ui.label(RichText::new(cmd).monospace().small());
            }
        });
}

fn file_pickers(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Browse for raw image…").clicked() {
            open_raw_dialog(state);
        }
        let source = &state.options.source;
        if source.as_os_str().is_empty() {
            ui.weak("Not selected");
        } else {
            ui.label(source.display().to_string());
        }
    });

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Browse for dcraw…").clicked() {
            open_executable_dialog(state);
        }
        match &state.executable {
            Some(exe) => ui.label(exe.display().to_string()),
            None => ui.weak("Not set"),
        };
    });
}

fn format_group(ui: &mut Ui, state: &mut AppState) {
    ui.strong("File Format");
    egui::Grid::new("file_format").num_columns(2).show(ui, |ui: &mut Ui| {
        for (i, format) in OutputFormat::ALL.into_iter().enumerate() {
            let label = RichText::new(format.to_string());
            let label = if format.is_supported() { label } else { label.weak() };
            ui.radio_value(&mut state.options.output_format, format, label);
            if i % 2 == 1 {
                ui.end_row();
            }
        }
    });

    match state.options.output_path() {
        Some(path) if !state.options.source.as_os_str().is_empty() => {
            ui.label(RichText::new(format!("Output: {}", path.display())).small());
        }
        Some(_) => {}
        None => {
            ui.label(
                RichText::new(format!("{} output is not supported by dcraw", state.options.output_format))
                    .small()
                    .color(Color32::YELLOW),
            );
        }
    }
}

fn white_balance_group(ui: &mut Ui, state: &mut AppState) {
    ui.strong("White Balance Mode");
    ui.horizontal(|ui: &mut Ui| {
        for mode in WhiteBalance::ALL {
            ui.radio_value(&mut state.options.white_balance, mode, mode.to_string());
        }
    });

    let manual = state.options.white_balance == WhiteBalance::Manual;
    ui.add_enabled(
        manual,
        Slider::new(&mut state.options.red_multiplier, MULTIPLIER_RANGE).text("Red Multiplier (1.0 = daylight)"),
    );
    ui.add_enabled(
        manual,
        Slider::new(&mut state.options.blue_multiplier, MULTIPLIER_RANGE).text("Blue Multiplier (1.0 = daylight)"),
    );
}

fn action_buttons(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        let ctx = ui.ctx().clone();
        if ui.button("Preview").clicked() {
            let ctx = ctx.clone();
            state.start(RunMode::Preview, move || ctx.request_repaint());
        }
        if ui.button("Convert").clicked() {
            state.start(RunMode::Final, move || ctx.request_repaint());
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.add_enabled_ui(!state.is_busy(), |ui: &mut Ui| {
            ui.menu_button("File", |ui: &mut Ui| {
                if ui.button("Open raw image…").clicked() {
                    open_raw_dialog(state);
                    ui.close_menu();
                }
                if ui.button("Locate dcraw…").clicked() {
                    open_executable_dialog(state);
                    ui.close_menu();
                }
            });
        });

        ui.separator();

        if let Some(job) = &state.job {
            ui.spinner();
            ui.label(match job.mode {
                RunMode::Preview => "Previewing",
                RunMode::Final => "Converting",
            });
        }

        match &state.status {
            Some(Status::Info(msg)) => {
                ui.label(msg);
            }
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_raw_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Select a raw image")
        .add_filter("Raw images", RAW_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.set_source(path);
    }
}

pub fn open_executable_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new().set_title("Select path to dcraw");
    if cfg!(windows) {
        dialog = dialog.add_filter("Executable", &["exe"]);
    }

    if let Some(path) = dialog.pick_file() {
        state.set_executable(path);
    }
}
