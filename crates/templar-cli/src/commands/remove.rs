//! Implementation of the `templar remove` command.

use tracing::instrument;

use crate::{
    cli::RemoveArgs,
    commands::{open_service, pick_template},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Delete a template's body and registry entry.
#[instrument(skip_all)]
pub fn execute(args: RemoveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = open_service(&config)?;

    let Some(name) = pick_template(&service, args.name, "Template to remove", &output)? else {
        return Ok(());
    };

    let name = service.remove_template(&name)?;

    output.success(&format!("Template '{name}' removed"))?;
    Ok(())
}
