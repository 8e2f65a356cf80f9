//! Interactive prompts.
//!
//! Every question the CLI can ask goes through here.  Prompts need both the
//! `interactive` feature and a terminal on stdin/stderr; without a terminal
//! the caller gets an input error naming the missing argument instead of a
//! hung process.

use std::io::IsTerminal as _;
use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// `true` when there is a user to ask.
pub fn is_interactive() -> bool {
    cfg!(feature = "interactive") && std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

fn require_terminal(what: &str) -> CliResult<()> {
    if !cfg!(feature = "interactive") {
        return Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        });
    }
    if !is_interactive() {
        return Err(CliError::InvalidInput {
            message: format!("{what} is required when not running in a terminal"),
            source: None,
        });
    }
    Ok(())
}

/// Ask for a line of text.
pub fn text(label: &str) -> CliResult<String> {
    require_terminal(label)?;
    imp::text(label)
}

/// Ask for a file path.
pub fn path(label: &str) -> CliResult<PathBuf> {
    text(label).map(PathBuf::from)
}

/// Pick one of `items`; escape cancels.
pub fn select(label: &str, items: &[String]) -> CliResult<String> {
    require_terminal(label)?;
    let index = imp::select(label, items)?.ok_or(CliError::Cancelled)?;
    items.get(index).cloned().ok_or(CliError::Cancelled)
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(question: &str) -> CliResult<bool> {
    if !is_interactive() {
        if !cfg!(feature = "interactive") {
            return Err(CliError::FeatureNotAvailable {
                feature: "interactive",
            });
        }
        return Err(CliError::InvalidInput {
            message: format!("Confirmation needed ({question}); pass --yes to skip it"),
            source: None,
        });
    }
    imp::confirm(question)
}

#[cfg(feature = "interactive")]
mod imp {
    use dialoguer::{Confirm, FuzzySelect, Input, theme::ColorfulTheme};

    use crate::error::{CliError, CliResult};

    fn prompt_failed(e: dialoguer::Error) -> CliError {
        CliError::IoError {
            message: "Prompt failed".into(),
            source: std::io::Error::other(e),
        }
    }

    pub fn text(label: &str) -> CliResult<String> {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .interact_text()
            .map_err(prompt_failed)?;
        Ok(answer.trim().to_string())
    }

    pub fn select(label: &str, items: &[String]) -> CliResult<Option<usize>> {
        FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(prompt_failed)
    }

    pub fn confirm(question: &str) -> CliResult<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(prompt_failed)
    }
}

#[cfg(not(feature = "interactive"))]
mod imp {
    use crate::error::{CliError, CliResult};

    fn unavailable() -> CliError {
        CliError::FeatureNotAvailable {
            feature: "interactive",
        }
    }

    pub fn text(_label: &str) -> CliResult<String> {
        Err(unavailable())
    }

    pub fn select(_label: &str, _items: &[String]) -> CliResult<Option<usize>> {
        Err(unavailable())
    }

    pub fn confirm(_question: &str) -> CliResult<bool> {
        Err(unavailable())
    }
}
