//! Snapshot CLI for the schedule pipeline.
//!
//! # Responsibility
//! - Load session/speaker/day snapshots from JSON files.
//! - Run one aggregation cycle and print the resulting schedule as JSON.

use anyhow::{bail, Context, Result};
use clap::Parser;
use confsched_core::{
    default_log_level, init_logging, Feed, PipelineConfig, RawDay, RawSession, RawSpeaker,
    SchedulePipeline,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "confsched", version, about = "Build a day-by-day schedule from snapshots")]
struct Cli {
    /// JSON file with the session list.
    #[arg(long)]
    sessions: PathBuf,
    /// JSON file with the speaker roster.
    #[arg(long)]
    speakers: PathBuf,
    /// JSON file with the day list.
    #[arg(long)]
    days: PathBuf,
    /// Absolute directory for rotating log files. Logging is off when omitted.
    #[arg(long)]
    log_dir: Option<String>,
    #[arg(long)]
    log_level: Option<String>,
}

/// Either a bare array or an object holding the array under one key.
#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot<T> {
    Bare(Vec<T>),
    Wrapped(HashMap<String, Vec<T>>),
}

fn read_snapshot<T: DeserializeOwned>(path: &Path, key: &str) -> Result<Vec<T>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    let snapshot: Snapshot<T> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse `{}`", path.display()))?;
    match snapshot {
        Snapshot::Bare(records) => Ok(records),
        Snapshot::Wrapped(mut wrapped) => match wrapped.remove(key) {
            Some(records) => Ok(records),
            None => bail!("`{}` has no `{key}` list", path.display()),
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let sessions: Vec<RawSession> = read_snapshot(&cli.sessions, "sessions")?;
    let speakers: Vec<RawSpeaker> = read_snapshot(&cli.speakers, "speakers")?;
    let days: Vec<RawDay> = read_snapshot(&cli.days, "days")?;
    log::info!(
        "event=cli_snapshots module=cli status=ok sessions={} speakers={} days={}",
        sessions.len(),
        speakers.len(),
        days.len()
    );

    let pipeline = SchedulePipeline::new(PipelineConfig::default())?;
    let mut feed = pipeline.subscribe(Feed::once(sessions), Feed::once(speakers), Feed::once(days));
    let schedule = match feed.recv().await {
        Some(result) => result?,
        None => bail!("pipeline completed without producing a schedule"),
    };
    feed.unsubscribe().await;

    println!("{}", serde_json::to_string_pretty(&schedule)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::read_snapshot;
    use confsched_core::{RawDay, RawSpeaker};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write fixture");
        file
    }

    #[test]
    fn bare_array_snapshot_is_read() {
        let file = fixture(r#"[{"id": "1", "date": "2024-05-01"}, {"id": 2, "date": "2024-05-02"}]"#);

        let days: Vec<RawDay> = read_snapshot(file.path(), "days").unwrap();

        assert_eq!(
            days,
            vec![RawDay::new("1", "2024-05-01"), RawDay::new("2", "2024-05-02")]
        );
    }

    #[test]
    fn wrapped_snapshot_is_read_from_its_key() {
        let file = fixture(r#"{"speakers": [{"id": "s1", "name": "Ada"}, {"id": "s2"}]}"#);

        let speakers: Vec<RawSpeaker> = read_snapshot(file.path(), "speakers").unwrap();

        assert_eq!(
            speakers,
            vec![RawSpeaker::new("s1", "Ada"), RawSpeaker::unnamed("s2")]
        );
    }

    #[test]
    fn wrapped_snapshot_without_expected_key_fails() {
        let file = fixture(r#"{"sessions": []}"#);

        let err = read_snapshot::<RawDay>(file.path(), "days").unwrap_err();

        assert!(
            err.to_string().contains("has no `days` list"),
            "unexpected error: {err}"
        );
    }
}
