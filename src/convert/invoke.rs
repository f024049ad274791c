use std::path::{Path, PathBuf};
use std::process::Command;

use super::args::{build_args, RunMode};
use super::error::ConvertError;
use super::options::ConversionOptions;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Validate, build arguments and run dcraw once, blocking until it exits.
///
/// Returns the path of the file dcraw wrote. Nothing is launched if the
/// source or executable is missing or the format has no dcraw flag.
pub fn convert(
    executable: &Path,
    options: &ConversionOptions,
    mode: RunMode,
) -> Result<PathBuf, ConvertError> {
    if options.source.as_os_str().is_empty() {
        return Err(ConvertError::MissingSource);
    }
    if executable.as_os_str().is_empty() {
        return Err(ConvertError::MissingExecutable);
    }

    let args = build_args(options, mode)?;
    let output = match mode {
        RunMode::Preview => options.preview_path(),
        RunMode::Final => options
            .output_path()
            .ok_or(ConvertError::InvalidOptions(options.output_format))?,
    };

    invoke(executable, &args, &options.source)?;
    Ok(output)
}

/// Run `executable <args...> <source>` and wait for it.
///
/// Tokens are passed as separate arguments, so paths with spaces or shell
/// metacharacters reach dcraw intact. No retries.
pub fn invoke(executable: &Path, args: &[String], source: &Path) -> Result<(), ConvertError> {
    if executable.as_os_str().is_empty() {
        return Err(ConvertError::MissingExecutable);
    }

    log::info!("Running {}", command_line(executable, args, source));

    let status = Command::new(executable)
        .args(args)
        .arg(source)
        .status()
        .map_err(|e| ConvertError::LaunchFailure {
            executable: executable.to_path_buf(),
            source: e,
        })?;

    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(ConvertError::ExecutionFailed(code)),
        None => Err(ConvertError::ExecutionUnknown),
    }
}

/// Human-readable command line, tokens joined by single spaces.
///
/// For display and logging only; [`invoke`] never goes through a shell.
pub fn command_line(executable: &Path, args: &[String], source: &Path) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(args.len() + 2);
    parts.push(executable.display().to_string());
    parts.extend(args.iter().cloned());
    parts.push(source.display().to_string());
    parts.join(" ")
}
