use anyhow::{Result, bail};
use musestat_core::collaborators::{ManuscriptReader, PlainTextReader};
use musestat_ignore::IgnoreList;
use musestat_settings::MusestatConfig;
use musestat_verify::verify_manuscript;
use tracing::{info, warn};

use crate::cli::{OutputFormat, VerifyArgs};
use crate::config::resolve_verify;
use crate::render;

pub(crate) fn handle(args: VerifyArgs, config: &MusestatConfig) -> Result<()> {
    if !args.path.exists() {
        bail!("Path not found: {}", args.path.display());
    }
    let settings = resolve_verify(&args, &config.verify);

    let mut ignore = match IgnoreList::load(&settings.ignore_file) {
        Ok(list) => list,
        Err(err) => {
            warn!(error = %err, "continuing without ignore patterns");
            IgnoreList::default()
        }
    };
    ignore.extend(&settings.extra_patterns);
    info!(patterns = ignore.len(), "ignore patterns ready");

    let text = PlainTextReader.read(&args.path);
    if text.trim().is_empty() {
        bail!("No analyzable text in {}", args.path.display());
    }
    let report = verify_manuscript(&text, &ignore);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", render::verification_text(&report)),
    }

    if args.strict && !report.summary.passed {
        bail!("Verification failed with {} error(s)", report.summary.errors);
    }
    Ok(())
}
