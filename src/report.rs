//! Line-oriented result reporting
//!
//! A report line is a list of [`Field`]s. In text mode the fields are rendered
//! the way Python's `print` shows them (`True`/`False`, list `repr`, `-1` for a
//! missing position), joined by the separator, and closed with the marker. In
//! JSON mode each line is one JSON array.
//!
//! Every line is written and flushed before [`Reporter::line`] returns.

use crate::config::ReportConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output format for report lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            other => Err(Error::config(format!(
                "Unknown output format '{}'. Expected 'text' or 'json'.",
                other
            ))),
        }
    }
}

/// One value on a report line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Field {
    Text(String),
    Bool(bool),
    Int(i64),
    List(Vec<String>),
}

impl Field {
    /// A search result; the not-found sentinel renders as `-1`
    pub fn position(pos: Option<usize>) -> Self {
        match pos {
            Some(p) => Field::from(p),
            None => Field::Int(-1),
        }
    }

    /// A sequence of strings, rendered as a Python list
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Field::List(items.into_iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}

impl From<&String> for Field {
    fn from(s: &String) -> Self {
        Field::Text(s.clone())
    }
}

impl From<bool> for Field {
    fn from(b: bool) -> Self {
        Field::Bool(b)
    }
}

impl From<i64> for Field {
    fn from(n: i64) -> Self {
        Field::Int(n)
    }
}

impl From<usize> for Field {
    fn from(n: usize) -> Self {
        Field::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text(s) => f.write_str(s),
            Field::Bool(true) => f.write_str("True"),
            Field::Bool(false) => f.write_str("False"),
            Field::Int(n) => write!(f, "{}", n),
            Field::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&repr(item))?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Python `repr` of a string: single-quoted with escapes
///
/// Switches to double quotes when the text holds a single quote and no double
/// quote, as CPython does.
pub fn repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut result = String::with_capacity(s.len() + 2);
    result.push(quote);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c == quote => {
                result.push('\\');
                result.push(c);
            }
            c if c.is_control() => result.push_str(&format!("\\x{:02x}", c as u32)),
            c => result.push(c),
        }
    }
    result.push(quote);
    result
}

/// Writes report lines to any `Write` sink
pub struct Reporter<W: Write> {
    out: W,
    config: ReportConfig,
    lines: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, config: ReportConfig) -> Self {
        Self {
            out,
            config,
            lines: 0,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Write one line made of `fields`
    pub fn line<I>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = Field>,
    {
        let fields: Vec<Field> = fields.into_iter().collect();

        match self.config.format {
            OutputFormat::Text => {
                let mut parts: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
                if !self.config.marker.is_empty() {
                    parts.push(self.config.marker.clone());
                }
                writeln!(self.out, "{}", parts.join(&self.config.separator))?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &fields)?;
                self.out.write_all(b"\n")?;
            }
        }

        self.out.flush()?;
        self.lines += 1;
        Ok(())
    }

    /// Write a `label value` line
    pub fn labeled(&mut self, label: &str, value: impl Into<Field>) -> Result<()> {
        self.line([Field::from(label), value.into()])
    }

    pub fn lines_written(&self) -> usize {
        self.lines
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Sink that keeps unflushed bytes apart from flushed ones
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FlushTracker {
    pending: Vec<u8>,
    /// Bytes handed over by each `flush`, in order
    pub(crate) flushed: Vec<Vec<u8>>,
}

#[cfg(test)]
impl FlushTracker {
    pub(crate) fn pending(&self) -> &[u8] {
        &self.pending
    }

    pub(crate) fn flushes(&self) -> usize {
        self.flushed.len()
    }
}

#[cfg(test)]
impl Write for FlushTracker {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flushed.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_reporter() -> Reporter<Vec<u8>> {
        Reporter::new(Vec::new(), ReportConfig::default())
    }

    fn output(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::from(true).to_string(), "True");
        assert_eq!(Field::from(false).to_string(), "False");
        assert_eq!(Field::position(None).to_string(), "-1");
        assert_eq!(Field::position(Some(3)).to_string(), "3");
        assert_eq!(
            Field::list(["string", "in", "python"]).to_string(),
            "['string', 'in', 'python']"
        );
        assert_eq!(Field::list(Vec::<String>::new()).to_string(), "[]");
    }

    #[test]
    fn test_repr() {
        assert_eq!(repr("abc"), "'abc'");
        assert_eq!(repr("a\nb"), "'a\\nb'");
        assert_eq!(repr("it's"), "\"it's\"");
        assert_eq!(repr("'\""), "'\\'\"'");
        assert_eq!(repr("\x01"), "'\\x01'");
    }

    #[test]
    fn test_text_line_appends_marker() {
        let mut reporter = text_reporter();
        reporter.labeled("s.find(\"come\")", 3usize).unwrap();
        reporter.line([Field::from("001")]).unwrap();
        assert_eq!(reporter.lines_written(), 2);
        assert_eq!(output(reporter), "s.find(\"come\") 3 <br>\n001 <br>\n");
    }

    #[test]
    fn test_text_line_without_marker() {
        let config = ReportConfig {
            marker: String::new(),
            separator: " | ".to_string(),
            ..ReportConfig::default()
        };
        let mut reporter = Reporter::new(Vec::new(), config);
        reporter.labeled("s.isupper()", true).unwrap();
        reporter.line(Vec::new()).unwrap();
        assert_eq!(output(reporter), "s.isupper() | True\n\n");
    }

    #[test]
    fn test_json_line() {
        let config = ReportConfig {
            format: OutputFormat::Json,
            ..ReportConfig::default()
        };
        let mut reporter = Reporter::new(Vec::new(), config);
        reporter.labeled("s.find(\"become\")", Field::position(None)).unwrap();
        reporter
            .labeled("elements", Field::list(["a", "b"]))
            .unwrap();
        assert_eq!(
            output(reporter),
            "[\"s.find(\\\"become\\\")\",-1]\n[\"elements\",[\"a\",\"b\"]]\n"
        );
    }

    #[test]
    fn test_every_line_is_flushed_before_returning() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            let config = ReportConfig {
                format,
                ..ReportConfig::default()
            };
            let mut reporter = Reporter::new(FlushTracker::default(), config);

            reporter.labeled("s", "welcome to python").unwrap();
            assert!(reporter.get_ref().pending().is_empty());
            assert_eq!(reporter.get_ref().flushes(), reporter.lines_written());

            reporter
                .line([Field::from(1usize), Field::list(["a", "b"])])
                .unwrap();
            reporter.line(Vec::new()).unwrap();
            assert!(reporter.get_ref().pending().is_empty());
            assert_eq!(reporter.get_ref().flushes(), 3);
            assert_eq!(reporter.lines_written(), 3);

            for chunk in &reporter.get_ref().flushed {
                assert_eq!(chunk.iter().filter(|&&b| b == b'\n').count(), 1);
                assert_eq!(chunk.last(), Some(&b'\n'));
            }
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" text ".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
