//! Record store adapter.
//!
//! The hosted document store is an external collaborator; the engine only
//! ever sees discrete read-only snapshots of it.  This module loads such a
//! snapshot from a JSON export.  Individual records that fail to deserialise
//! (a missing field, an unparsable timestamp) are skipped with a warning so
//! one bad document cannot abort the whole report; an unreadable file is an
//! error.

use crate::models::{HrQuery, RecordSnapshot, Reward, TimeRecord, User};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSnapshot {
    users: Vec<Value>,
    time_records: Vec<Value>,
    rewards: Vec<Value>,
    queries: Vec<Value>,
}

/// Loads a snapshot from a JSON export file.
pub fn load_snapshot(path: &Path) -> Result<RecordSnapshot> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot file {}", path.display()))?;
    let raw: RawSnapshot = serde_json::from_str(&data)
        .with_context(|| format!("snapshot file {} is not valid JSON", path.display()))?;
    Ok(snapshot_from_raw(raw))
}

fn snapshot_from_raw(raw: RawSnapshot) -> RecordSnapshot {
    RecordSnapshot {
        users: collect_records::<User>("users", raw.users),
        time_records: collect_records::<TimeRecord>("timeRecords", raw.time_records),
        rewards: collect_records::<Reward>("rewards", raw.rewards),
        queries: collect_records::<HrQuery>("queries", raw.queries),
    }
}

fn collect_records<T: DeserializeOwned>(collection: &str, raw: Vec<Value>) -> Vec<T> {
    raw.into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(%collection, %err, "skipping malformed record");
                None
            }
        })
        .collect()
}
