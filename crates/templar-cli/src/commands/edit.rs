//! Implementation of the `templar edit` command.
//!
//! The stored body is opened in place: whatever the editor saves is the
//! template from then on.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info, instrument};

use crate::{
    cli::EditArgs,
    commands::{open_service, pick_template},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Used when neither the config nor the environment names an editor.
const FALLBACK_EDITOR: &str = "vi";

/// Open a template in the user's editor and wait for it to exit.
#[instrument(skip_all)]
pub fn execute(args: EditArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = open_service(&config)?;

    let Some(name) = pick_template(&service, args.name, "Template to edit", &output)? else {
        return Ok(());
    };

    let path = service.edit_template(&name)?;
    let editor = resolve_editor(
        config.editor.command.as_deref(),
        std::env::var("VISUAL").ok(),
        std::env::var("EDITOR").ok(),
    );

    output.info(&format!("Opening '{name}' with {editor}"))?;
    launch(&editor, &path)?;

    output.success(&format!("Finished editing '{name}'"))?;
    Ok(())
}

/// `editor.command`, then `$VISUAL`, then `$EDITOR`, then `vi`.  Blank
/// values are skipped.
fn resolve_editor(configured: Option<&str>, visual: Option<String>, editor: Option<String>) -> String {
    configured
        .map(str::to_string)
        .into_iter()
        .chain(visual)
        .chain(editor)
        .map(|cmd| cmd.trim().to_string())
        .find(|cmd| !cmd.is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Run `editor` (split on whitespace, e.g. `code --wait`) with `path`
/// appended.
fn launch(editor: &str, path: &Path) -> CliResult<()> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or_else(|| CliError::ExternalCommandFailed {
        command: editor.to_string(),
        source: None,
    })?;

    debug!(program, path = %path.display(), "Launching editor");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| CliError::ExternalCommandFailed {
            command: editor.to_string(),
            source: Some(Box::new(e)),
        })?;

    if !status.success() {
        return Err(CliError::ExternalCommandFailed {
            command: format!("{editor} ({status})"),
            source: None,
        });
    }

    info!("Editor exited");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_editor_wins() {
        let editor = resolve_editor(Some("hx"), Some("code --wait".into()), Some("nano".into()));
        assert_eq!(editor, "hx");
    }

    #[test]
    fn visual_before_editor() {
        let editor = resolve_editor(None, Some("code --wait".into()), Some("nano".into()));
        assert_eq!(editor, "code --wait");
    }

    #[test]
    fn editor_env_used_when_visual_unset() {
        assert_eq!(resolve_editor(None, None, Some("nano".into())), "nano");
    }

    #[test]
    fn blank_values_are_skipped() {
        let editor = resolve_editor(Some("  "), Some(String::new()), Some("nano".into()));
        assert_eq!(editor, "nano");
    }

    #[test]
    fn falls_back_to_vi() {
        assert_eq!(resolve_editor(None, None, None), "vi");
    }

    #[test]
    fn empty_command_fails_to_launch() {
        let err = launch("   ", Path::new("/tmp/x")).unwrap_err();
        assert!(matches!(err, CliError::ExternalCommandFailed { .. }));
    }

    #[test]
    fn missing_program_fails_to_launch() {
        let err = launch("templar-no-such-editor-binary", Path::new("/tmp/x")).unwrap_err();
        assert!(matches!(
            err,
            CliError::ExternalCommandFailed {
                source: Some(_),
                ..
            }
        ));
    }
}
