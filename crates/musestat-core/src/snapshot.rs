//! Progress snapshots written next to the manuscript.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use musestat_types::{ManuscriptStats, Snapshot};
use tracing::debug;

/// `<manuscript stem>.stats.json` beside the manuscript.
pub fn snapshot_path(manuscript: &Path) -> PathBuf {
    manuscript.with_extension("stats.json")
}

/// Current UTC time as RFC 3339.
pub fn now_rfc3339() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}

/// Capture `stats` for `manuscript`, stamped with the current time.
pub fn capture(stats: &ManuscriptStats, manuscript: &Path) -> Snapshot {
    Snapshot::capture(stats, manuscript.display().to_string(), now_rfc3339())
}

/// Write `snapshot` as pretty JSON.
pub fn save(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
    debug!(path = %path.display(), words = snapshot.total_words, "snapshot saved");
    Ok(())
}

/// Load a previously saved snapshot.
pub fn load(path: &Path) -> Result<Snapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))
}
