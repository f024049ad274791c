use std::fmt;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Slider ranges used by the settings panel
// ---------------------------------------------------------------------------

pub const GAMMA_RANGE: RangeInclusive<f64> = 0.3..=1.5;
pub const BRIGHTNESS_RANGE: RangeInclusive<f64> = 1.0..=6.0;
/// Shared by the red and blue multipliers (1.0 = daylight).
pub const MULTIPLIER_RANGE: RangeInclusive<f64> = 0.5..=2.0;

// ---------------------------------------------------------------------------
// WhiteBalance – colour correction strategy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhiteBalance {
    /// White balance recorded by the camera.
    Camera,
    /// Averaged over the whole image.
    #[default]
    Auto,
    /// Explicit red/blue multipliers.
    Manual,
}

impl WhiteBalance {
    pub const ALL: [WhiteBalance; 3] = [WhiteBalance::Camera, WhiteBalance::Auto, WhiteBalance::Manual];
}

impl fmt::Display for WhiteBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WhiteBalance::Camera => "Camera",
            WhiteBalance::Auto => "Auto",
            WhiteBalance::Manual => "Manual",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// OutputFormat – what a final conversion writes
// ---------------------------------------------------------------------------

/// `Jpeg` and `Psd` are listed in the UI but dcraw has no flag for them;
/// building final-mode arguments for either is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Jpeg,
    Tiff8,
    Tiff16,
    Ppm8,
    #[default]
    Ppm16,
    Psd,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Tiff8,
        OutputFormat::Tiff16,
        OutputFormat::Ppm8,
        OutputFormat::Ppm16,
        OutputFormat::Jpeg,
        OutputFormat::Psd,
    ];

    /// File extension dcraw uses for this format, if it can produce it.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Tiff8 | OutputFormat::Tiff16 => Some("tiff"),
            OutputFormat::Ppm8 | OutputFormat::Ppm16 => Some("ppm"),
            OutputFormat::Jpeg | OutputFormat::Psd => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.extension().is_some()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Tiff8 => "TIFF (8 bit)",
            OutputFormat::Tiff16 => "TIFF (16 bit)",
            OutputFormat::Ppm8 => "PPM (8 bit)",
            OutputFormat::Ppm16 => "PPM (16 bit)",
            OutputFormat::Psd => "PSD",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// ConversionOptions – one pending conversion request
// ---------------------------------------------------------------------------

/// Snapshot of the settings for a single preview or conversion.
///
/// Built fresh from the UI right before a run and moved into the worker, so
/// nothing else observes it while dcraw is running.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOptions {
    /// Raw file handed to dcraw as its last argument.
    pub source: PathBuf,
    pub white_balance: WhiteBalance,
    /// Only used when `white_balance` is [`WhiteBalance::Manual`].
    pub red_multiplier: f64,
    /// Only used when `white_balance` is [`WhiteBalance::Manual`].
    pub blue_multiplier: f64,
    pub gamma: f64,
    pub brightness: f64,
    /// 4-colour RGBG interpolation.
    pub interpolate_rgbg: bool,
    pub output_format: OutputFormat,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            white_balance: WhiteBalance::Auto,
            red_multiplier: 1.0,
            blue_multiplier: 1.0,
            gamma: 0.6,
            brightness: 3.5,
            interpolate_rgbg: true,
            output_format: OutputFormat::Ppm16,
        }
    }
}

impl ConversionOptions {
    /// Where dcraw will write a final conversion: the source with its
    /// extension swapped for `.tiff` or `.ppm`. `None` for formats dcraw
    /// cannot produce.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output_format
            .extension()
            .map(|ext| replace_extension(&self.source, ext))
    }

    /// Where dcraw writes a preview run. Independent of `output_format`.
    pub fn preview_path(&self) -> PathBuf {
        preview_path(&self.source)
    }
}

/// Preview runs always produce PPM next to the source file.
pub fn preview_path(source: &Path) -> PathBuf {
    replace_extension(source, "ppm")
}

/// Cut the file name at its last `.` and append `ext`, as dcraw names its
/// output. Unlike [`Path::with_extension`], a dotfile such as `.crw` loses
/// its whole name. Dots in directory names are left alone.
fn replace_extension(source: &Path, ext: &str) -> PathBuf {
    let Some(name) = source.file_name().and_then(|n| n.to_str()) else {
        return source.with_extension(ext);
    };
    let stem = name.rfind('.').map_or(name, |dot| &name[..dot]);
    source.with_file_name(format!("{stem}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_for(source: &str, format: OutputFormat) -> ConversionOptions {
        ConversionOptions {
            source: PathBuf::from(source),
            output_format: format,
            ..Default::default()
        }
    }

    #[test]
    fn defaults_match_the_settings_panel() {
        let opts = ConversionOptions::default();
        assert_eq!(opts.white_balance, WhiteBalance::Auto);
        assert_eq!(opts.gamma, 0.6);
        assert_eq!(opts.brightness, 3.5);
        assert_eq!(opts.red_multiplier, 1.0);
        assert_eq!(opts.blue_multiplier, 1.0);
        assert!(opts.interpolate_rgbg);
        assert_eq!(opts.output_format, OutputFormat::Ppm16);
        assert!(GAMMA_RANGE.contains(&opts.gamma));
        assert!(BRIGHTNESS_RANGE.contains(&opts.brightness));
    }

    #[test]
    fn output_path_follows_format() {
        let tiff = options_for("/photos/IMG_0001.CRW", OutputFormat::Tiff16);
        assert_eq!(tiff.output_path(), Some(PathBuf::from("/photos/IMG_0001.tiff")));

        let ppm = options_for("/photos/IMG_0001.CRW", OutputFormat::Ppm8);
        assert_eq!(ppm.output_path(), Some(PathBuf::from("/photos/IMG_0001.ppm")));
    }

    #[test]
    fn output_path_only_strips_last_extension() {
        let opts = options_for("/photos/trip.2024/shot.final.rw2", OutputFormat::Tiff8);
        assert_eq!(
            opts.output_path(),
            Some(PathBuf::from("/photos/trip.2024/shot.final.tiff"))
        );
    }

    #[test]
    fn unsupported_formats_have_no_output_path() {
        assert_eq!(options_for("a.crw", OutputFormat::Jpeg).output_path(), None);
        assert_eq!(options_for("a.crw", OutputFormat::Psd).output_path(), None);
        assert!(!OutputFormat::Jpeg.is_supported());
        assert!(OutputFormat::Tiff8.is_supported());
    }

    #[test]
    fn preview_path_ignores_output_format() {
        for format in OutputFormat::ALL {
            let opts = options_for("/raw/dsc 01.crw", format);
            assert_eq!(opts.preview_path(), PathBuf::from("/raw/dsc 01.ppm"));
        }
    }

    #[test]
    fn dotfile_source_is_cut_at_the_dot() {
        assert_eq!(preview_path(Path::new("/raw/.crw")), PathBuf::from("/raw/.ppm"));
        let opts = options_for("/raw/.crw", OutputFormat::Tiff8);
        assert_eq!(opts.output_path(), Some(PathBuf::from("/raw/.tiff")));
    }

    #[test]
    fn source_without_extension_gets_one() {
        assert_eq!(preview_path(Path::new("/raw/untitled")), PathBuf::from("/raw/untitled.ppm"));
    }
}
