//! Append-only trigger log with size-based rotation

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use super::event::TriggerLogEvent;

/// Rotate once the log grows past 1 MiB
pub const MAX_LOG_BYTES: u64 = 1024 * 1024;

/// Best-effort JSONL writer for trigger events
#[derive(Debug, Clone)]
pub struct TriggerLogWriter {
    path: PathBuf,
}

impl TriggerLogWriter {
    /// Create a writer targeting `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append events as JSONL, then rotate if the log crossed 1 MiB.
    ///
    /// An empty event slice performs no filesystem mutation at all. Every
    /// failure is swallowed: logging must never abort the caller's
    /// activation result.
    pub fn append(&self, events: &[TriggerLogEvent]) {
        if events.is_empty() {
            return;
        }
        if let Err(e) = self.try_append(events) {
            debug!("trigger log append to {:?} failed: {}", self.path, e);
        }
    }

    fn try_append(&self, events: &[TriggerLogEvent]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut lines = String::new();
        for event in events {
            if let Ok(line) = serde_json::to_string(event) {
                lines.push_str(&line);
                lines.push('\n');
            }
        }

        // A single appending write, so concurrent process-level writers
        // cannot interleave partial lines.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(lines.as_bytes())?;

        if file.metadata()?.len() > MAX_LOG_BYTES {
            self.rotate();
        }

        Ok(())
    }

    /// Move the full log aside under a time-based name so the next append
    /// starts fresh. A lost race between concurrent writers costs at most
    /// one extra rotation.
    fn rotate(&self) {
        let archive = self.archive_path();
        if let Err(e) = fs::rename(&self.path, &archive) {
            debug!("trigger log rotation to {:?} failed: {}", archive, e);
        }
    }

    fn archive_path(&self) -> PathBuf {
        let millis = Utc::now().timestamp_millis();
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("trigger-log");
        let extension = self
            .path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("jsonl");
        self.path
            .with_file_name(format!("{}-{}.{}", stem, millis, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn event(skill: &str, preview: &str) -> TriggerLogEvent {
        TriggerLogEvent {
            timestamp: "2026-08-07T10:00:00.000Z".to_string(),
            skill: skill.to_string(),
            match_reason: "keyword".to_string(),
            enforcement: "suggest".to_string(),
            priority: "high".to_string(),
            prompt_preview: preview.to_string(),
        }
    }

    #[test]
    fn test_empty_events_touch_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("skill-triggers.jsonl");

        let writer = TriggerLogWriter::new(&log_path);
        writer.append(&[]);

        assert!(!log_path.exists());
        assert!(!temp_dir.path().join("logs").exists());
    }

    #[test]
    fn test_append_creates_parent_and_writes_jsonl() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("skill-triggers.jsonl");

        let writer = TriggerLogWriter::new(&log_path);
        writer.append(&[event("a", "p"), event("b", "p")]);

        let content = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: TriggerLogEvent = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.skill, "a");
    }

    #[test]
    fn test_appends_accumulate() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("skill-triggers.jsonl");

        let writer = TriggerLogWriter::new(&log_path);
        writer.append(&[event("a", "p")]);
        writer.append(&[event("b", "p")]);

        let content = fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_rotation_past_threshold() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("skill-triggers.jsonl");
        let writer = TriggerLogWriter::new(&log_path);

        // Each event serializes to well over 1 KiB, so 1024 of them cross
        // the 1 MiB threshold in one append.
        let big = event("rotation", &"x".repeat(2048));
        let events: Vec<TriggerLogEvent> = (0..1024).map(|_| big.clone()).collect();
        writer.append(&events);

        // The oversized log was renamed away; the original location is
        // fresh for the next append.
        assert!(!log_path.exists());

        let archives: Vec<PathBuf> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(archives.len(), 1);

        let archive_name = archives[0].file_name().unwrap().to_string_lossy().to_string();
        assert!(archive_name.starts_with("skill-triggers-"));
        assert!(archive_name.ends_with(".jsonl"));

        // The next append starts a fresh log alongside the archive.
        writer.append(&[event("fresh", "p")]);
        assert!(log_path.exists());
        assert_eq!(fs::read_to_string(&log_path).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_no_rotation_below_threshold() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("skill-triggers.jsonl");

        let writer = TriggerLogWriter::new(&log_path);
        writer.append(&[event("small", "p")]);

        assert!(log_path.exists());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_append_failure_is_swallowed() {
        // Point the writer at a path whose parent cannot be created
        // because a file sits where the directory should be.
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let writer = TriggerLogWriter::new(blocker.join("skill-triggers.jsonl"));
        writer.append(&[event("a", "p")]);
    }
}
