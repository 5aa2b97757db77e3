//! Structured JSON logging
//!
//! - One log line = one event
//! - Deterministic key ordering: `event`, `severity`, then fields sorted by key
//! - Synchronous, no buffering
//! - INFO and below go to stdout, ERROR and above to stderr

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "info" => Ok(Severity::Info),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// Logging capability injected into components that report progress.
pub trait Log: Send + Sync {
    /// Report a completed operation.
    fn info(&self, message: &str);

    /// Report a failure before it is returned to the caller.
    fn error(&self, message: &str);
}

/// Event name carried by every line this crate emits
const EVENT: &str = "BOOKLIST";

/// Logger writing JSON lines to stdout/stderr.
#[derive(Debug, Clone, Copy)]
pub struct JsonLogger {
    min_severity: Severity,
}

impl JsonLogger {
    /// Creates a logger that drops anything below `min_severity`.
    pub fn new(min_severity: Severity) -> Self {
        Self { min_severity }
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    /// Log an event with the given severity and fields
    pub fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        self.log_to(severity, event, fields, &mut io::stdout(), &mut io::stderr());
    }

    /// Log to explicit sinks: ERROR and above go to `err`, the rest to `out`.
    ///
    /// Events below `min_severity` are dropped.
    pub fn log_to<O: Write, E: Write>(
        &self,
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        out: &mut O,
        err: &mut E,
    ) {
        if severity < self.min_severity {
            return;
        }
        if severity >= Severity::Error {
            write_line(severity, event, fields, err);
        } else {
            write_line(severity, event, fields, out);
        }
    }
}

impl Default for JsonLogger {
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}

impl Log for JsonLogger {
    fn info(&self, message: &str) {
        self.log(Severity::Info, EVENT, &[("message", message)]);
    }

    fn error(&self, message: &str) {
        self.log(Severity::Error, EVENT, &[("message", message)]);
    }
}

fn write_line<W: Write>(
    severity: Severity,
    event: &str,
    fields: &[(&str, &str)],
    writer: &mut W,
) {
    let output = format_line(severity, event, fields);
    // Logging never fails the caller
    let _ = writer.write_all(output.as_bytes());
    let _ = writer.flush();
}

fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(128);

    output.push_str("{\"event\":\"");
    escape_json_string(&mut output, event);
    output.push_str("\",\"severity\":\"");
    output.push_str(severity.as_str());
    output.push('"');

    let mut sorted_fields: Vec<_> = fields.iter().collect();
    sorted_fields.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted_fields {
        output.push_str(",\"");
        escape_json_string(&mut output, key);
        output.push_str("\":\"");
        escape_json_string(&mut output, value);
        output.push('"');
    }

    output.push_str("}\n");
    output
}

fn escape_json_string(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}

/// In-memory logger for testing.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded entries.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.lock().clone()
    }

    /// Messages recorded at the given severity.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(Severity, String)>> {
        // Poisoning is ignored; entries stay readable
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, severity: Severity, message: &str) {
        self.lock().push((severity, message.to_string()));
    }
}

impl Log for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(Severity::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(Severity::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buffer = Vec::new();
        write_line(severity, event, fields, &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("ERROR".parse::<Severity>(), Ok(Severity::Error));
        assert!("loud".parse::<Severity>().is_err());
    }

    #[test]
    fn test_log_json_format() {
        let output = capture(Severity::Info, EVENT, &[("message", "saved")]);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "BOOKLIST");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["message"], "saved");
    }

    #[test]
    fn test_log_deterministic_ordering() {
        let output1 = capture(Severity::Info, "TEST", &[("zebra", "1"), ("apple", "2")]);
        let output2 = capture(Severity::Info, "TEST", &[("apple", "2"), ("zebra", "1")]);

        assert_eq!(output1, output2);
        assert!(output1.find("apple").unwrap() < output1.find("zebra").unwrap());
        assert!(output1.find("\"event\"").unwrap() < output1.find("\"severity\"").unwrap());
    }

    #[test]
    fn test_log_escapes_special_chars() {
        let output = capture(
            Severity::Error,
            "TEST",
            &[("message", "path \"C:\\books\"\nline2")],
        );

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["message"], "path \"C:\\books\"\nline2");
        assert_eq!(output.chars().filter(|c| *c == '\n').count(), 1);
    }

    fn sinks(logger: &JsonLogger, severity: Severity) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        logger.log_to(severity, EVENT, &[("message", "m")], &mut out, &mut err);
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_below_min_severity_is_dropped() {
        let logger = JsonLogger::new(Severity::Error);
        assert_eq!(logger.min_severity(), Severity::Error);

        let (out, err) = sinks(&logger, Severity::Info);
        assert!(out.is_empty());
        assert!(err.is_empty());

        let (out, err) = sinks(&logger, Severity::Warn);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_errors_go_to_error_sink() {
        let logger = JsonLogger::default();
        assert_eq!(logger.min_severity(), Severity::Info);

        let (out, err) = sinks(&logger, Severity::Error);
        assert!(out.is_empty());
        let parsed: serde_json::Value = serde_json::from_str(&err).unwrap();
        assert_eq!(parsed["severity"], "ERROR");

        let (out, err) = sinks(&logger, Severity::Fatal);
        assert!(out.is_empty());
        assert!(err.contains("\"FATAL\""));
    }

    #[test]
    fn test_info_goes_to_output_sink() {
        let (out, err) = sinks(&JsonLogger::default(), Severity::Info);
        assert!(err.is_empty());
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["message"], "m");
    }

    #[test]
    fn test_memory_logger_records_in_order() {
        let logger = MemoryLogger::new();
        logger.info("first");
        logger.error("second");

        assert_eq!(logger.len(), 2);
        assert_eq!(
            logger.entries(),
            vec![
                (Severity::Info, "first".to_string()),
                (Severity::Error, "second".to_string()),
            ]
        );
        assert_eq!(logger.messages(Severity::Error), vec!["second".to_string()]);
    }
}
