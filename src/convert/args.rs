use super::error::ConvertError;
use super::options::{ConversionOptions, OutputFormat, WhiteBalance};

// ---------------------------------------------------------------------------
// dcraw flags
// ---------------------------------------------------------------------------

const HALF_SIZE: &str = "-h";
const VERBOSE: &str = "-v";
const FOUR_COLOR_RGB: &str = "-f";
const CAMERA_WB: &str = "-w";
const AUTO_WB: &str = "-a";
const RED_MUL: &str = "-r";
const BLUE_MUL: &str = "-l";
const GAMMA: &str = "-g";
/// Toe slope passed after the gamma power; zero gives a plain power curve.
const TOE_SLOPE: &str = "0";
const BRIGHTNESS: &str = "-b";
const TIFF: &str = "-T";
const SIXTEEN_BIT: &str = "-6";

/// Whether a run is a quick half-size preview or the real conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Half-size PPM, written next to the source.
    Preview,
    /// Full resolution in the requested output format.
    Final,
}

impl RunMode {
    pub fn is_preview(&self) -> bool {
        matches!(self, RunMode::Preview)
    }
}

// ---------------------------------------------------------------------------
// Argument building
// ---------------------------------------------------------------------------

/// Translate `options` into dcraw arguments, excluding the source path.
///
/// Order is fixed: mode, interpolation, white balance, gamma, brightness,
/// then (final runs only) the output format.
pub fn build_args(options: &ConversionOptions, mode: RunMode) -> Result<Vec<String>, ConvertError> {
    let mut args: Vec<String> = Vec::with_capacity(12);

    args.push(if mode.is_preview() { HALF_SIZE } else { VERBOSE }.to_string());

    if options.interpolate_rgbg {
        args.push(FOUR_COLOR_RGB.to_string());
    }

    match options.white_balance {
        WhiteBalance::Camera => args.push(CAMERA_WB.to_string()),
        WhiteBalance::Auto => args.push(AUTO_WB.to_string()),
        WhiteBalance::Manual => {
            args.push(RED_MUL.to_string());
            args.push(format_number(options.red_multiplier));
            args.push(BLUE_MUL.to_string());
            args.push(format_number(options.blue_multiplier));
        }
    }

    args.push(GAMMA.to_string());
    args.push(format_number(options.gamma));
    args.push(TOE_SLOPE.to_string());

    args.push(BRIGHTNESS.to_string());
    args.push(format_number(options.brightness));

    // Previews always come out as dcraw's default PPM.
    if !mode.is_preview() {
        args.extend(format_flags(options.output_format)?.iter().map(|f| f.to_string()));
    }

    Ok(args)
}

fn format_flags(format: OutputFormat) -> Result<&'static [&'static str], ConvertError> {
    match format {
        OutputFormat::Tiff8 => Ok(&[TIFF]),
        OutputFormat::Tiff16 => Ok(&[TIFF, SIXTEEN_BIT]),
        // 8-bit PPM is what dcraw writes without any flag.
        OutputFormat::Ppm8 => Ok(&[]),
        OutputFormat::Ppm16 => Ok(&[SIXTEEN_BIT]),
        OutputFormat::Jpeg | OutputFormat::Psd => Err(ConvertError::InvalidOptions(format)),
    }
}

/// Shortest text that round-trips, always with a fractional part (`2.0`, not `2`).
fn format_number(value: f64) -> String {
    format!("{value:?}")
}
