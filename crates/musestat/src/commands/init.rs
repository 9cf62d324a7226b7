use anyhow::Result;
use musestat_ignore::{IGNORE_TEMPLATE, write_template};
use musestat_settings::DEFAULT_IGNORE_FILE;

use crate::cli::InitArgs;

pub(crate) fn handle(args: InitArgs) -> Result<()> {
    if args.print {
        print!("{IGNORE_TEMPLATE}");
        return Ok(());
    }
    let written = write_template(&args.dir.join(DEFAULT_IGNORE_FILE), args.force)?;
    eprintln!("Created {}", written.display());
    Ok(())
}
