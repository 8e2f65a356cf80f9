//! Implementation of the `templar create` command.
//!
//! Responsibility: work out the name and source file, hand them to the
//! template service, and report the result.

use tracing::instrument;

use crate::{
    cli::{CreateArgs, GlobalArgs},
    commands::open_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt,
};

/// Execute the `templar create` command.
///
/// Source resolution is left to the service: `--from` when that file
/// exists, else the active file.  Only when neither was given, and there is
/// a terminal, is the user asked for a path.
#[instrument(skip_all)]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let name = match args.name {
        Some(name) => name,
        None => prompt::text("Template name")?,
    };

    let service = open_service(&config)?;

    let from = match args.from {
        None if global.active_file.is_none() && prompt::is_interactive() => {
            Some(prompt::path("File to save as a template")?)
        }
        from => from,
    };

    let name = service.create_template(&name, from.as_deref(), global.active_file.as_deref())?;

    output.success(&format!("Template '{name}' created"))?;
    Ok(())
}
