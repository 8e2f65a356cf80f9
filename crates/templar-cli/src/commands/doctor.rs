//! `templar doctor`: repair the registry after an interrupted write.

use tracing::instrument;

use crate::{commands::open_service, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = open_service(&config)?;
    let report = service.reconcile()?;

    if report.is_clean() {
        output.success("Registry is consistent")?;
        return Ok(());
    }

    for name in &report.dropped {
        output.warning(&format!("Removed registry entry '{name}' (template file missing)"))?;
    }
    for name in &report.adopted {
        output.warning(&format!(
            "Registered template '{name}' (no extension recorded)"
        ))?;
    }

    output.success(&format!(
        "Registry repaired: {} dropped, {} adopted",
        report.dropped.len(),
        report.adopted.len()
    ))?;
    Ok(())
}
