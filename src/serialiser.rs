use crate::srt::Cue;

use std::fmt;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

/// Writes rendered LRC `content` to `output`, replacing anything already there.
pub fn serialise<P: AsRef<Path>>(content: &str, output: P) -> Result<()> {
    let file = std::fs::File::create(output).context("Failed to create file!")?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", content).context("Failed to write to output file.")?;
    writer.flush().context("Failed to write to output file.")?;
    Ok(())
}

/// Renders `cues` as LRC text: one `[MM:SS.hh]text` line per cue, then a blank line.
pub fn render(cues: &[Cue]) -> String {
    let mut out: String = cues
        .iter()
        .map(|cue| format!("[{}]{}\n", LrcTimestamp(cue.start), cue.text.trim()))
        .collect();
    out.push('\n');
    out
}

/// A start time as LRC writes it. Minutes are not wrapped into hours and
/// hundredths are truncated.
pub struct LrcTimestamp(pub Duration);

impl fmt::Display for LrcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_ts(f, self.0)
    }
}

pub fn format_ts(timestamp: Duration) -> String {
    LrcTimestamp(timestamp).to_string()
}

fn write_ts<W: fmt::Write>(buf: &mut W, timestamp: Duration) -> fmt::Result {
    let total_secs = timestamp.as_secs();
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    let hundredths = timestamp.subsec_millis() / 10;
    write!(buf, "{:02}:{:02}.{:02}", minutes, seconds, hundredths)
}
