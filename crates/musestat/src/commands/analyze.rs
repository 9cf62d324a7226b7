use anyhow::{Result, bail};
use musestat_core::{Analyzer, snapshot};
use musestat_settings::MusestatConfig;
use musestat_types::{ManuscriptStats, SnapshotDelta};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::config::resolve_analyze;
use crate::render;

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    #[serde(flatten)]
    stats: &'a ManuscriptStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<SnapshotDelta>,
}

pub(crate) fn handle(args: AnalyzeArgs, config: &MusestatConfig) -> Result<()> {
    if !args.path.exists() {
        bail!("Path not found: {}", args.path.display());
    }

    let previous = args.compare.as_deref().and_then(|path| match snapshot::load(path) {
        Ok(snap) => Some(snap),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "comparison snapshot ignored");
            None
        }
    });

    let analyzer = Analyzer::new(resolve_analyze(&args, &config.analyze));
    let Some(stats) = analyzer.analyze_path(&args.path, previous.as_ref()) else {
        bail!("No analyzable text in {}", args.path.display());
    };
    info!(words = stats.total_words, chapters = stats.chapters.len(), "analysis complete");

    let current = snapshot::capture(&stats, &args.path);
    let comparison = previous
        .as_ref()
        .map(|prev| SnapshotDelta::between(prev, &current));

    match args.format {
        OutputFormat::Json => {
            let output = AnalyzeOutput {
                stats: &stats,
                comparison,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => print!("{}", render::analysis_text(&stats, comparison.as_ref())),
    }

    if args.save_snapshot {
        let path = snapshot::snapshot_path(&args.path);
        snapshot::save(&current, &path)?;
        eprintln!("Snapshot saved: {}", path.display());
    }
    Ok(())
}
