use crate::app_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// One finished, qualifying typing session.
///
/// Serialized as a headerless CSV line: `elapsed_secs,accuracy,wpm`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub elapsed_secs: u64,
    pub accuracy: f64,
    pub wpm: u64,
}

/// Append-only score log backed by a CSV file.
///
/// Assumes single-process, single-user access; there is no locking.
#[derive(Debug, Clone)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::score_log_path().unwrap_or_else(|| PathBuf::from("retype_scores.csv"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file and parent directories on first use.
    pub fn append(&self, record: &ScoreRecord) -> Result<(), csv::Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }

    /// Parse every line of the log. A malformed line is a hard failure.
    ///
    /// A log that does not exist yet reads as empty.
    pub fn load_all(&self) -> Result<Vec<ScoreRecord>, csv::Error> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for result in reader.deserialize() {
            records.push(result?);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_missing_log_reads_empty() {
        let dir = tempdir().unwrap();
        let log = ScoreLog::with_path(dir.path().join("scores.csv"));
        assert!(log.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let log = ScoreLog::with_path(dir.path().join("scores.csv"));

        let record = ScoreRecord {
            elapsed_secs: 42,
            accuracy: 2.0 / 3.0,
            wpm: 55,
        };

        log.append(&record).unwrap();
        let loaded = log.load_all().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].elapsed_secs, 42);
        assert_eq!(loaded[0].wpm, 55);
        assert!((loaded[0].accuracy - record.accuracy).abs() < 1e-9);
    }

    #[test]
    fn test_append_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let log = ScoreLog::with_path(dir.path().join("nested").join("deep").join("scores.csv"));

        log.append(&ScoreRecord {
            elapsed_secs: 10,
            accuracy: 1.0,
            wpm: 60,
        })
        .unwrap();

        assert_eq!(log.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_log_is_append_only() {
        let dir = tempdir().unwrap();
        let log = ScoreLog::with_path(dir.path().join("scores.csv"));

        for wpm in [30, 40, 50] {
            log.append(&ScoreRecord {
                elapsed_secs: 60,
                accuracy: 0.95,
                wpm,
            })
            .unwrap();
        }

        let loaded = log.load_all().unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(
            loaded.iter().map(|r| r.wpm).collect::<Vec<_>>(),
            vec![30, 40, 50]
        );
    }

    #[test]
    fn test_line_format_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        let log = ScoreLog::with_path(&path);

        log.append(&ScoreRecord {
            elapsed_secs: 12,
            accuracy: 0.9,
            wpm: 48,
        })
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "12,0.9,48\n");
    }

    #[test]
    fn test_malformed_line_is_a_hard_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "12,0.9,48").unwrap();
        writeln!(file, "not,a,record?").unwrap();

        let log = ScoreLog::with_path(&path);
        assert!(log.load_all().is_err());
    }

    #[test]
    fn test_wrong_field_count_is_a_hard_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        std::fs::write(&path, "12,0.9\n").unwrap();

        let log = ScoreLog::with_path(&path);
        assert!(log.load_all().is_err());
    }
}
