//! CSV export of the player's history.
//!
//! One header row, then one row per snapshot in recording order.
//! Timestamps are stored in UTC and rendered here in local time.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use hatchway_core::history::{HistoryError, HistoryLog, HistorySink};
use hatchway_types::HistoryEntry;
use tracing::info;

/// Column names of the export.
pub const HEADER: [&str; 3] = ["current_location", "current_experience", "current_date"];

/// Timestamp format used in the `current_date` column.
pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// [`HistorySink`] that writes a CSV file.
#[derive(Debug, Clone)]
pub struct CsvHistorySink {
    path: PathBuf,
}

impl CsvHistorySink {
    /// Create a sink targeting `path`. The file is created on export.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Return the destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistorySink for CsvHistorySink {
    fn export(&mut self, player_name: &str, history: &HistoryLog) -> Result<(), HistoryError> {
        let entries = history.non_empty_entries()?;
        let file = File::create(&self.path).map_err(|e| HistoryError::Sink {
            message: format!("cannot create {}: {e}", self.path.display()),
        })?;
        write_to(file, entries)?;

        info!(
            player = player_name,
            path = %self.path.display(),
            rows = entries.len(),
            "history exported"
        );
        Ok(())
    }
}

/// Write `entries` as CSV, header first, to any writer.
///
/// # Errors
///
/// Returns [`HistoryError::Sink`] if writing fails.
pub fn write_to<W: Write>(writer: W, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER).map_err(sink_error)?;
    for entry in entries {
        let experience = entry.experience.to_string();
        let date = entry
            .timestamp
            .with_timezone(&Local)
            .format(DATE_FORMAT)
            .to_string();
        out.write_record([entry.location.as_str(), experience.as_str(), date.as_str()])
            .map_err(sink_error)?;
    }
    out.flush().map_err(|e| HistoryError::Sink {
        message: format!("flush failed: {e}"),
    })?;
    Ok(())
}

fn sink_error(e: csv::Error) -> HistoryError {
    HistoryError::Sink {
        message: e.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn entry(location: &str, experience: u64) -> HistoryEntry {
        HistoryEntry {
            location: location.to_owned(),
            experience,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
        }
    }

    #[test]
    fn header_and_rows_in_order() {
        let entries = [entry("entrance", 0), entry("tm1_hall", 0), entry("exit", 40)];
        let mut buffer = Vec::new();
        write_to(&mut buffer, &entries).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines.first(), Some(&"current_location,current_experience,current_date"));
        assert!(lines.get(1).unwrap().starts_with("entrance,0,"));
        assert!(lines.get(3).unwrap().starts_with("exit,40,"));
    }

    #[test]
    fn dates_use_local_day_month_year() {
        let only = entry("entrance", 0);
        let expected = only.timestamp.with_timezone(&Local).format(DATE_FORMAT).to_string();
        let mut buffer = Vec::new();
        write_to(&mut buffer, &[only]).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.ends_with(&format!("entrance,0,{expected}\n")));
        // dd.mm.yyyy hh:mm:ss
        assert_eq!(expected.len(), 19);
    }

    #[test]
    fn identifiers_with_commas_are_quoted() {
        let mut buffer = Vec::new();
        write_to(&mut buffer, &[entry("hall, east", 5)]).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("\"hall, east\",5,"));
    }

    #[test]
    fn empty_history_is_refused() {
        let path = std::env::temp_dir().join("hatchway-empty-history.csv");
        let mut sink = CsvHistorySink::new(&path);
        let result = sink.export("R2D2", &HistoryLog::new());

        assert!(matches!(result, Err(HistoryError::EmptyHistory)));
    }

    #[test]
    fn export_writes_file() {
        let path = std::env::temp_dir().join(format!("hatchway-export-{}.csv", std::process::id()));
        let mut log = HistoryLog::new();
        log.append(entry("entrance", 0));
        log.append(entry("exit", 300));

        let mut sink = CsvHistorySink::new(&path);
        sink.export("R2D2", &log).unwrap();
        let text = std::fs::read_to_string(sink.path()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("exit,300,"));
    }
}
