//! Implementation of the `templar load` command.
//!
//! Dispatch sequence:
//! 1. Pick the template (argument or list) and check that it exists
//! 2. Resolve the target (`--into`, active file, or prompt)
//! 3. Ask the service for a load plan
//! 4. Resolve each confirmation unless `--yes`
//! 5. Apply the plan

use std::path::Path;

use tracing::{debug, instrument};

use templar_core::{
    application::{ApplicationError, Confirmation, LoadTarget},
    domain::Extension,
};

use crate::{
    cli::{GlobalArgs, LoadArgs},
    commands::{open_service, pick_template},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `templar load` command.
#[instrument(skip_all)]
pub fn execute(
    args: LoadArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = open_service(&config)?;

    let Some(name) = pick_template(&service, args.name, "Template to load", &output)? else {
        return Ok(());
    };
    // An unknown name fails here, before the target prompt.
    let name = service.find_template(&name)?;

    let target_path = match args.into.or(global.active_file) {
        Some(path) => Some(path),
        None if prompt::is_interactive() => Some(prompt::path("File to load into")?),
        None => None,
    };
    let target = target_path.as_deref().map(describe_target).transpose()?;

    let plan = service.load_template(name.as_str(), target.as_ref())?;
    let Some(target) = target else {
        return Err(CliError::Core(ApplicationError::TargetRequired.into()));
    };

    if plan.is_unconditional() {
        debug!("Nothing to confirm");
    } else if args.yes {
        debug!(skipped = plan.confirmations.len(), "Confirmations skipped");
    } else {
        for confirmation in &plan.confirmations {
            if !prompt::confirm(&question(confirmation))? {
                return Err(CliError::Cancelled);
            }
        }
    }

    service.apply_load(&plan, &target.path)?;

    output.success(&format!(
        "Loaded '{}' into {}",
        plan.name,
        target.path.display()
    ))?;
    Ok(())
}

/// A missing target counts as empty; it is created by the load.
fn describe_target(path: &Path) -> CliResult<LoadTarget> {
    let is_empty = match std::fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
        Err(e) => {
            return Err(CliError::IoError {
                message: format!("Failed to inspect target '{}'", path.display()),
                source: e,
            });
        }
    };
    Ok(LoadTarget::new(path, is_empty))
}

fn question(confirmation: &Confirmation) -> String {
    match confirmation {
        Confirmation::Overwrite { target } => {
            format!("{} is not empty. Replace its content?", target.display())
        }
        Confirmation::ExtensionMismatch { template, target } => format!(
            "Template was saved from a {} file but the target is {}. Load anyway?",
            template
                .as_ref()
                .map(describe_extension)
                .unwrap_or_else(|| "unknown".into()),
            describe_extension(target),
        ),
    }
}

fn describe_extension(ext: &Extension) -> String {
    if ext.is_empty() {
        "extensionless".into()
    } else {
        format!("'{ext}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn missing_target_is_empty() {
        let dir = TempDir::new().unwrap();
        let target = describe_target(&dir.path().join("new.txt")).unwrap();
        assert!(target.is_empty);
    }

    #[test]
    fn target_with_content_is_not_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "keep me").unwrap();

        assert!(!describe_target(&path).unwrap().is_empty);
    }

    #[test]
    fn zero_length_target_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        assert!(describe_target(&path).unwrap().is_empty);
    }

    #[test]
    fn overwrite_question_names_target() {
        let q = question(&Confirmation::Overwrite {
            target: PathBuf::from("notes.txt"),
        });
        assert!(q.contains("notes.txt"));
    }

    #[test]
    fn mismatch_question_names_both_extensions() {
        let q = question(&Confirmation::ExtensionMismatch {
            template: Some(Extension::from(".py")),
            target: Extension::from(".rs"),
        });
        assert!(q.contains("'.py'"));
        assert!(q.contains("'.rs'"));
    }

    #[test]
    fn mismatch_without_record_says_unknown() {
        let q = question(&Confirmation::ExtensionMismatch {
            template: None,
            target: Extension::none(),
        });
        assert!(q.contains("unknown"));
        assert!(q.contains("extensionless"));
    }
}
