/// Conversion layer: options, argument building, and invoking dcraw.
///
/// Architecture:
/// ```text
///   AppState (sliders, radio groups)
///        │  snapshot
///        ▼
///   ┌───────────────────┐
///   │ ConversionOptions │  one value per preview/convert request
///   └───────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   args    │  options + RunMode → ["-v", "-f", "-a", ...]
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  invoke   │  dcraw <args...> <source>, wait, report
///   └──────────┘
/// ```

pub mod args;
pub mod error;
pub mod invoke;
pub mod options;

pub use args::{build_args, RunMode};
pub use error::ConvertError;
pub use invoke::{command_line, convert};
pub use options::{ConversionOptions, OutputFormat, WhiteBalance};
