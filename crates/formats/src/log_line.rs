//! Position lookup in free-form instrument log lines.
//!
//! A line such as `|update| the positron location is x:21.432` carries a
//! position after the `x:` marker. Lines mentioning `error` or `debug`
//! anywhere (case-sensitive, plain substring) never yield a position.

pub const DEFAULT_MARKER: &str = "x:";
pub const DEFAULT_EXCLUSIONS: [&str; 2] = ["error", "debug"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLineError {
    /// No text was supplied where a line was expected.
    MissingInput,
}

impl std::fmt::Display for LogLineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLineError::MissingInput => write!(f, "expected a line of text, got nothing"),
        }
    }
}

impl std::error::Error for LogLineError {}

/// Text after the first `x:` in `line`, verbatim.
///
/// An empty remainder (`"measurement x:"`) is still a position: `Some("")`.
pub fn extract_position(line: &str) -> Option<&str> {
    extract_with(line, DEFAULT_MARKER, &DEFAULT_EXCLUSIONS)
}

/// Nullable entry point; a missing line is a usage fault.
pub fn try_extract_position(line: Option<&str>) -> Result<Option<&str>, LogLineError> {
    let line = line.ok_or(LogLineError::MissingInput)?;
    Ok(extract_position(line))
}

/// One result per line of `text`.
pub fn extract_positions(text: &str) -> Vec<Option<&str>> {
    text.lines().map(extract_position).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionExtractor {
    pub marker: String,
    pub exclusions: Vec<String>,
}

impl Default for PositionExtractor {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PositionExtractor {
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            ..Self::default()
        }
    }

    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        extract_with(line, &self.marker, &self.exclusions)
    }

    pub fn try_extract<'a>(
        &self,
        line: Option<&'a str>,
    ) -> Result<Option<&'a str>, LogLineError> {
        let line = line.ok_or(LogLineError::MissingInput)?;
        Ok(self.extract(line))
    }

    pub fn extract_all<'a>(&self, text: &'a str) -> Vec<Option<&'a str>> {
        text.lines().map(|line| self.extract(line)).collect()
    }
}

fn extract_with<'a, S: AsRef<str>>(
    line: &'a str,
    marker: &str,
    exclusions: &[S],
) -> Option<&'a str> {
    if exclusions.iter().any(|kw| line.contains(kw.as_ref())) {
        return None;
    }
    let at = line.find(marker)?;
    Some(&line[at + marker.len()..])
}
