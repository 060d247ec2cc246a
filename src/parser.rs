use crate::error::ParseError;
use crate::processor::strip_markup;
use crate::serialiser::format_ts;
use crate::srt::Cue;

use std::time::Duration;

use log::{debug, warn};
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, map_res, opt, verify};
use nom::sequence::preceded;
use nom::error::VerboseError;
use nom::IResult;

/// The result of scanning one block of an SRT file.
#[derive(Debug, PartialEq)]
pub enum Block {
    Cue(Cue),
    Skipped(ParseError),
}

/// Everything recognised in one file.
#[derive(Debug, PartialEq)]
pub enum ParseOutcome {
    Cues(Vec<Cue>),
    /// The input held no recognisable cue. Not an error.
    Empty,
}

/// Parses a whole file's contents, ignoring a leading byte-order mark.
pub fn parse_str(input: &str) -> ParseOutcome {
    let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    parse(input.lines())
}

/// Collects the cues found in `lines`, logging and discarding malformed blocks.
pub fn parse<I, S>(lines: I) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cues = Vec::new();
    for block in Blocks::new(lines.into_iter()) {
        match block {
            Block::Cue(cue) => {
                debug!(
                    "Parsed cue {}: {} to {}",
                    cue.sequence,
                    format_ts(cue.start),
                    format_ts(cue.end)
                );
                cues.push(cue);
            }
            Block::Skipped(err) => warn!("{}", err),
        }
    }

    if cues.is_empty() {
        ParseOutcome::Empty
    } else {
        ParseOutcome::Cues(cues)
    }
}

/// Lazily splits a stream of lines into blocks.
///
/// A malformed block never ends the scan: the offending line is consumed and
/// scanning picks up again with the line after it.
pub struct Blocks<I> {
    lines: I,
}

impl<I, S> Blocks<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        Self { lines }
    }

    fn next_non_blank(&mut self) -> Option<S> {
        self.lines.by_ref().find(|line| !is_blank(line.as_ref()))
    }

    fn read_text(&mut self) -> String {
        let mut text = String::new();
        for line in self.lines.by_ref() {
            let line = line.as_ref();
            if is_blank(line) {
                break;
            }
            text.push_str(&strip_markup(line));
            text.push(' ');
        }
        text
    }
}

impl<I, S> Iterator for Blocks<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let line = self.next_non_blank()?;
        let sequence = match sequence_number(line.as_ref()) {
            Ok(sequence) => sequence,
            Err(err) => return Some(Block::Skipped(err)),
        };

        let (start, end) = match self.lines.next() {
            Some(line) => match show_hide(line.as_ref()) {
                Ok(times) => times,
                Err(err) => return Some(Block::Skipped(err)),
            },
            None => return Some(Block::Skipped(ParseError::MissingTimestamps(sequence))),
        };

        let text = self.read_text();
        Some(Block::Cue(Cue {
            sequence,
            start,
            end,
            text,
        }))
    }
}

// Only a truly empty line separates blocks. A whitespace-only line inside a
// cue is part of its text.
fn is_blank(line: &str) -> bool {
    line.is_empty()
}

fn sequence_number(line: &str) -> Result<usize, ParseError> {
    all_consuming(seq_num)(line.trim())
        .map(|(_, seq)| seq)
        .map_err(|_| ParseError::SequenceNumber(line.to_string()))
}

fn show_hide(line: &str) -> Result<(Duration, Duration), ParseError> {
    let parts: Vec<&str> = line.split("-->").filter(|p| !p.is_empty()).collect();
    match parts.as_slice() {
        [from, to] => Ok((parse_timestamp(from.trim())?, parse_timestamp(to.trim())?)),
        _ => Err(ParseError::TimestampLine(line.to_string())),
    }
}

fn parse_timestamp(input: &str) -> Result<Duration, ParseError> {
    all_consuming(timestamp)(input)
        .map(|(_, ts)| ts)
        .map_err(|_| ParseError::Timestamp(input.to_string()))
}

fn timestamp(input: &str) -> IResult<&str, Duration, VerboseError<&str>> {
    let take_millis = || {
        map_res(
            take_while_m_n(3, 3, |c: char| c.is_ascii_digit()),
            |s: &str| s.parse::<u64>(),
        )
    };
    // Exactly two digits, no larger than `max`.
    let take_hms = |max: u64| {
        verify(
            map_res(
                take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
                |s: &str| s.parse::<u64>(),
            ),
            move |v: &u64| *v <= max,
        )
    };

    let (input, hours) = take_hms(23)(input)?;
    let (input, _) = char(':')(input)?;
    let (input, minutes) = take_hms(59)(input)?;
    let (input, _) = char(':')(input)?;
    let (input, seconds) = take_hms(59)(input)?;
    let (input, _) = char(',')(input)?;
    let (input, millis) = take_millis()(input)?;

    Ok((
        input,
        Duration::from_millis(
            millis + seconds * 1000 + minutes * 60 * 1000 + hours * 60 * 60 * 1000,
        ),
    ))
}

// An explicit `+` and zero are accepted, negative numbers are not.
fn seq_num(input: &str) -> IResult<&str, usize, VerboseError<&str>> {
    map_res(preceded(opt(char('+')), digit1), |s: &str| s.parse())(input)
}
