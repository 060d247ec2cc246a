use std::path::PathBuf;

use thiserror::Error;

/// Why a block of an SRT file was discarded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Could not parse line, expecting a sequence number: {0}")]
    SequenceNumber(String),
    #[error("Could not parse line, expecting from and to timestamps: {0}")]
    TimestampLine(String),
    #[error("Could not parse timestamp, expecting HH:MM:SS,mmm: {0}")]
    Timestamp(String),
    #[error("Input ended after sequence number {0}, expecting from and to timestamps")]
    MissingTimestamps(usize),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input directory does not exist: '{}'", .0.display())]
    DirectoryNotFound(PathBuf),
}
