//! In-flight log record and line rendering

use super::log_level::LogLevel;
use chrono::Local;

/// One queued log entry.
///
/// The source file is a `&'static str` because call sites pass `file!()`;
/// the record therefore outlives nothing and can cross threads freely. The
/// payload is already formatted by the time the record is built.
#[derive(Debug, Clone)]
pub struct Record {
    pub level: LogLevel,
    pub source_file: &'static str,
    pub source_line: u32,
    pub payload: String,
}

impl Record {
    pub fn new(
        level: LogLevel,
        source_file: &'static str,
        source_line: u32,
        payload: String,
    ) -> Self {
        Self {
            level,
            source_file,
            source_line,
            payload,
        }
    }

    /// Render the record to its on-disk line, without the trailing newline.
    ///
    /// Format: `YYYY-MM-DD HH:MM:SS [LEVEL] basename:line payload`. The
    /// rendered text is sanitised: control characters are removed, tab
    /// survives.
    pub fn render(&self) -> String {
        let mut line = format!(
            "{} [{}] {}:{} {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            self.level.to_str(),
            basename(self.source_file),
            self.source_line,
            self.payload
        );
        line.retain(|c| c == '\t' || !c.is_control());
        line
    }
}

/// Trailing path component: text after the last `/` or `\`, or the whole
/// string when neither separator is present.
pub(crate) fn basename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_strips_directories() {
        assert_eq!(basename("src/core/engine.rs"), "engine.rs");
        assert_eq!(basename("C:\\src\\main.rs"), "main.rs");
        assert_eq!(basename("standalone.rs"), "standalone.rs");
    }

    #[test]
    fn render_contains_all_fields() {
        let record = Record::new(LogLevel::Warn, "src/job.rs", 17, "queue is deep".to_string());
        let line = record.render();
        assert!(line.contains("[WARN]"));
        assert!(line.contains("job.rs:17"));
        assert!(line.ends_with("queue is deep"));
        assert!(!line.contains("src/"));
    }

    #[test]
    fn render_strips_control_characters() {
        let record = Record::new(
            LogLevel::Debug,
            "x.rs",
            1,
            "before \x01\x02\x03 after".to_string(),
        );
        let line = record.render();
        assert!(line.contains("before  after"));
        assert!(!line.contains('\x01'));
        assert!(!line.contains('\x02'));
        assert!(!line.contains('\x03'));
    }

    #[test]
    fn render_keeps_tabs_and_unicode() {
        let record = Record::new(LogLevel::Info, "x.rs", 1, "a\tb caf\u{e9}".to_string());
        let line = record.render();
        assert!(line.contains("a\tb"));
        assert!(line.contains("caf\u{e9}"));
    }

    #[test]
    fn render_removes_embedded_newlines() {
        let record = Record::new(LogLevel::Info, "x.rs", 1, "one\ntwo\rthree".to_string());
        let line = record.render();
        assert!(!line.contains('\n'));
        assert!(!line.contains('\r'));
        assert!(line.contains("onetwothree"));
    }
}
