use crate::config::{Config, EmptyPolicy};
use crate::error::ConvertError;
use crate::parser::{self, ParseOutcome};
use crate::serialiser;

use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{error, info, warn};
use walkdir::WalkDir;

#[derive(Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Written(PathBuf),
    Skipped,
}

/// Per-run tally of what happened to each discovered file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Converts every input file below `root`.
///
/// Only a missing root fails the run; problems with single files are logged
/// and counted.
pub fn run(root: &Path, config: &Config) -> Result<Summary> {
    if !root.is_dir() {
        return Err(ConvertError::DirectoryNotFound(root.to_path_buf()).into());
    }

    let inputs = find_inputs(root, config);
    info!(
        "Input directory: {}, {} {} file(s) found",
        root.display(),
        inputs.len(),
        config.input_extension.to_uppercase()
    );

    let mut summary = Summary::default();
    for input in inputs {
        match convert_file(&input, config) {
            Ok(FileOutcome::Written(output)) => {
                info!("Wrote {}", output.display());
                summary.converted += 1;
            }
            Ok(FileOutcome::Skipped) => summary.skipped += 1,
            Err(err) => {
                error!("{:#}", err);
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}

/// Lists the files below `root` carrying the input extension, in a stable order.
pub fn find_inputs(root: &Path, config: &Config) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| {
            entry.file_type().is_file() && has_extension(entry.path(), config.input_extension)
        })
        .map(|entry| entry.into_path())
        .collect()
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map_or(false, |ext| ext.eq_ignore_ascii_case(extension))
}

/// The LRC file written next to `input`, with decorations removed from its name.
pub fn output_path(input: &Path, config: &Config) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = config
        .decorations
        .iter()
        .fold(stem, |stem, decoration| stem.replace(decoration, ""));
    input.with_file_name(format!("{}.{}", stem, config.output_extension))
}

pub fn convert_file(input: &Path, config: &Config) -> Result<FileOutcome> {
    info!("Input file name: {}", input.display());
    let bytes = std::fs::read(input)
        .context(format!("Failed to open input file: '{}'", input.display()))?;
    let data = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = data {
        warn!(
            "'{}' is not valid UTF-8, invalid bytes were replaced with U+FFFD",
            input.display()
        );
    }

    let cues = match parser::parse_str(&data) {
        ParseOutcome::Cues(cues) => cues,
        ParseOutcome::Empty => match config.empty_policy {
            EmptyPolicy::Skip => {
                warn!("No subtitle found in '{}'. Skipped.", input.display());
                return Ok(FileOutcome::Skipped);
            }
            EmptyPolicy::WriteEmpty => {
                warn!("No subtitle found in '{}', writing empty output.", input.display());
                Vec::new()
            }
        },
    };

    let output = output_path(input, config);
    let content = serialiser::render(&cues);
    serialiser::serialise(&content, &output)
        .context(format!("Failed to write output file: '{}'", output.display()))?;
    Ok(FileOutcome::Written(output))
}
