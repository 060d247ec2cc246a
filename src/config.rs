/// What to do with a file in which no cue could be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Log the file and write nothing.
    Skip,
    /// Write an output file holding only the trailing blank line.
    // The command line has no flags and always skips; only a `Config` built
    // in code selects this.
    #[allow(dead_code)]
    WriteEmpty,
}

/// Fixed settings for a conversion run. Built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_extension: &'static str,
    pub output_extension: &'static str,
    /// Substrings removed from output file names, in order.
    pub decorations: &'static [&'static str],
    pub empty_policy: EmptyPolicy,
}

const DECORATIONS: &[&str] = &["_中文（自动翻译）", "_中文（自动生成）", "（自动生成）"];

impl Default for Config {
    fn default() -> Self {
        Self {
            input_extension: "srt",
            output_extension: "lrc",
            decorations: DECORATIONS,
            empty_policy: EmptyPolicy::Skip,
        }
    }
}
