pub(crate) mod analyze;
pub(crate) mod init;
pub(crate) mod verify;

use anyhow::Result;
use musestat_settings::MusestatConfig;

use crate::cli::Commands;

pub(crate) fn dispatch(command: Commands, config: &MusestatConfig) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::handle(args, config),
        Commands::Verify(args) => verify::handle(args, config),
        Commands::Init(args) => init::handle(args),
    }
}
