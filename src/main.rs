mod config;
mod driver;
mod error;
mod logger;
mod parser;
mod processor;
mod serialiser;
mod srt;

use crate::config::Config;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser as ClapParser};
use log::info;

fn main() -> ExitCode {
    logger::init();

    let cli = Cli::parse();
    run(cli.path, &Config::default()).into()
}

#[derive(ClapParser)]
#[command(version, about = "Convert SRT subtitles into LRC lyrics")]
struct Cli {
    #[arg(
        value_name = "PATH",
        help = "Directory to search for SRT files. Every match is converted to an LRC file next to it."
    )]
    path: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Exit {
    Success,
    Failure,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Success => ExitCode::SUCCESS,
            Exit::Failure => ExitCode::FAILURE,
        }
    }
}

fn print_usage() {
    println!("{}", Cli::command().render_usage());
}

fn run(path: Option<String>, config: &Config) -> Exit {
    match convert(path, config) {
        Ok(exit) => exit,
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
            Exit::Failure
        }
    }
}

fn convert(path: Option<String>, config: &Config) -> Result<Exit> {
    let path = match path {
        Some(path) => path,
        None => {
            print_usage();
            return Ok(Exit::Success);
        }
    };
    let path = path.trim();
    if path.is_empty() {
        print_usage();
        return Ok(Exit::Failure);
    }

    let summary = driver::run(Path::new(path), config)?;
    info!(
        "Done: {} converted, {} skipped, {} failed",
        summary.converted, summary.skipped, summary.failed
    );

    Ok(Exit::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn no_argument_prints_usage_and_succeeds() {
        assert_eq!(run(None, &Config::default()), Exit::Success);
    }

    #[test]
    fn blank_argument_fails() {
        assert_eq!(run(Some(String::new()), &Config::default()), Exit::Failure);
        assert_eq!(run(Some("   ".to_string()), &Config::default()), Exit::Failure);
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing").to_string_lossy().into_owned();

        assert_eq!(run(Some(missing), &Config::default()), Exit::Failure);
    }

    #[test]
    fn completed_run_succeeds_even_when_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("empty.srt"), "no cues here\n").unwrap();
        let root = format!("  {}  ", dir.path().display());

        assert_eq!(run(Some(root), &Config::default()), Exit::Success);
        assert!(!dir.path().join("empty.lrc").exists());
    }

    #[test]
    fn converts_files_below_the_given_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("sample.srt"),
            "1\n00:00:01,000 --> 00:00:02,000\nLine one\n",
        )
        .unwrap();
        let root = dir.path().to_string_lossy().into_owned();

        assert_eq!(run(Some(root), &Config::default()), Exit::Success);
        assert_eq!(
            fs::read_to_string(dir.path().join("sample.lrc")).unwrap(),
            "[00:01.00]Line one\n\n\n"
        );
    }
}
