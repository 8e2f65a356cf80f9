//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into service calls and render the results.
//! Everything that touches templates goes through [`TemplateService`].

pub mod completions;
pub mod config;
pub mod create;
pub mod doctor;
pub mod edit;
pub mod init;
pub mod list;
pub mod load;
pub mod remove;

use tracing::debug;

use templar_adapters::{LocalFilesystem, RegistryStore};
use templar_core::application::TemplateService;

use crate::{config::AppConfig, error::CliResult, output::OutputManager, prompt};

/// Shown when a command needs a template and the store is empty.
const NO_TEMPLATES: &str = "No templates yet. Save one with 'templar create <NAME> --from <FILE>'";

/// Open the store under the configured data directory and wire the service.
pub(crate) fn open_service(config: &AppConfig) -> CliResult<TemplateService> {
    let data_dir = &config.storage.data_dir;
    debug!(data_dir = %data_dir.display(), "Opening template store");

    let store = RegistryStore::open(data_dir, Box::new(LocalFilesystem::new()))?;
    Ok(TemplateService::new(
        Box::new(store),
        Box::new(LocalFilesystem::new()),
    ))
}

/// Use `name` if given, otherwise let the user pick from the stored
/// templates.
///
/// `Ok(None)` means there is nothing to pick from; a notice has already
/// been printed.
pub(crate) fn pick_template(
    service: &TemplateService,
    name: Option<String>,
    label: &str,
    output: &OutputManager,
) -> CliResult<Option<String>> {
    if let Some(name) = name {
        return Ok(Some(name));
    }

    let mut names: Vec<String> = service
        .list_templates()?
        .into_iter()
        .map(|t| t.name)
        .collect();

    if names.is_empty() {
        output.warning(NO_TEMPLATES)?;
        return Ok(None);
    }

    names.sort();
    prompt::select(label, &names).map(Some)
}
