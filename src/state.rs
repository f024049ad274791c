use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::convert::{self, build_args, ConversionOptions, ConvertError, RunMode};
use crate::preview::{load_preview, PreviewImage};

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// Background conversion
// ---------------------------------------------------------------------------

/// A dcraw run in flight on a worker thread.
pub struct Job {
    pub mode: RunMode,
    rx: Receiver<Result<PathBuf, ConvertError>>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Values bound to the settings widgets. `options.source` is empty until
    /// a raw file is picked.
    pub options: ConversionOptions,

    /// Path to the dcraw executable (None until the user picks one).
    pub executable: Option<PathBuf>,

    /// At most one conversion runs at a time; the settings panel is disabled
    /// while this is set.
    pub job: Option<Job>,

    /// Preview of the current source; cleared when the source changes or a
    /// preview run fails.
    pub preview: Option<PreviewImage>,

    /// Status / error message shown in the UI.
    pub status: Option<Status>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: ConversionOptions::default(),
            executable: None,
            job: None,
            preview: None,
            status: None,
        }
    }
}

impl AppState {
    pub fn is_busy(&self) -> bool {
        self.job.is_some()
    }

    pub fn set_source(&mut self, path: PathBuf) {
        log::debug!("Selected raw image {}", path.display());
        self.options.source = path;
        self.preview = None;
        self.status = None;
    }

    pub fn set_executable(&mut self, path: PathBuf) {
        log::debug!("Selected dcraw executable {}", path.display());
        self.executable = Some(path);
        self.status = None;
    }

    /// Copy of the current settings for one run.
    pub fn snapshot(&self) -> ConversionOptions {
        self.options.clone()
    }

    /// Check everything that can be checked without launching dcraw.
    pub fn validate(&self, mode: RunMode) -> Result<Vec<String>, ConvertError> {
        if self.options.source.as_os_str().is_empty() {
            return Err(ConvertError::MissingSource);
        }
        if self.executable.as_ref().map_or(true, |p| p.as_os_str().is_empty()) {
            return Err(ConvertError::MissingExecutable);
        }
        build_args(&self.options, mode)
    }

    /// The command a final conversion would run, if the settings are complete.
    pub fn pending_command(&self) -> Option<String> {
        let args = self.validate(RunMode::Final).ok()?;
        let executable = self.executable.as_ref()?;
        Some(convert::command_line(executable, &args, &self.options.source))
    }

    /// Start a preview or conversion on a worker thread.
    ///
    /// Validation errors are reported immediately and nothing is spawned.
    /// `on_done` runs on the worker after dcraw exits (used to wake the UI).
    pub fn start<F>(&mut self, mode: RunMode, on_done: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.is_busy() {
            log::warn!("Conversion already running, ignoring {mode:?} request");
            return;
        }

        if let Err(e) = self.validate(mode) {
            log::warn!("Not starting {mode:?}: {e}");
            self.status = Some(Status::Error(e.to_string()));
            return;
        }

        let options = self.snapshot();
        let executable = self.executable.clone().unwrap_or_default();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = convert::convert(&executable, &options, mode);
            // Receiver may be gone if the window closed mid-run.
            let _ = tx.send(result);
            on_done();
        });

        self.status = Some(Status::Info(match mode {
            RunMode::Preview => "Generating preview…".to_string(),
            RunMode::Final => "Converting…".to_string(),
        }));
        self.job = Some(Job { mode, rx });
    }

    /// Collect a finished job, if any. Returns true when a new preview was loaded.
    pub fn poll(&mut self) -> bool {
        let Some(job) = &self.job else {
            return false;
        };

        let result = match job.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(ConvertError::ExecutionUnknown),
        };
        let mode = job.mode;
        self.job = None;

        match (mode, result) {
            (RunMode::Final, Ok(output)) => {
                log::info!("Converted to {}", output.display());
                self.status = Some(Status::Info(format!("Converted → {}", output.display())));
                false
            }
            (RunMode::Preview, Ok(output)) => match load_preview(&output) {
                Ok(preview) => {
                    self.status = Some(Status::Info(format!(
                        "Preview ready ({}×{})",
                        preview.width, preview.height
                    )));
                    self.preview = Some(preview);
                    true
                }
                Err(e) => {
                    log::error!("Failed to load preview: {e:#}");
                    self.preview = None;
                    self.status = Some(Status::Error(format!("{e:#}")));
                    false
                }
            },
            (_, Err(e)) => {
                if e.is_pre_launch() {
                    log::error!("{mode:?} could not start: {e}");
                } else {
                    log::warn!("{mode:?} failed: {e}");
                }
                if mode.is_preview() {
                    self.preview = None;
                }
                self.status = Some(Status::Error(e.to_string()));
                false
            }
        }
    }
}
