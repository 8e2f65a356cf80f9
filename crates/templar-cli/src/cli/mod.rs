//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "templar",
    bin_name = "templar",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Save files as named templates and load them back",
    long_about = "Templar keeps a personal library of file templates. \
                  Save any file under a name, then load it into a new \
                  file later.",
    after_help = "EXAMPLES:\n\
        \x20 templar create greet --from hello.txt\n\
        \x20 templar load greet --into notes.txt\n\
        \x20 templar list\n\
        \x20 templar completions bash > /usr/share/bash-completion/completions/templar",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Save a file as a new template.
    #[command(
        about = "Save a file as a template",
        after_help = "EXAMPLES:\n\
            \x20 templar create greet --from hello.txt\n\
            \x20 TEMPLAR_ACTIVE_FILE=main.rs templar create rust-main"
    )]
    Create(CreateArgs),

    /// Load a template into a file.
    #[command(
        about = "Load a template into a file",
        after_help = "EXAMPLES:\n\
            \x20 templar load greet --into notes.txt\n\
            \x20 templar load greet --into notes.txt --yes  # skip confirmations"
    )]
    Load(LoadArgs),

    /// Delete a template.
    #[command(
        visible_alias = "rm",
        about = "Delete a template",
        after_help = "EXAMPLES:\n\
            \x20 templar remove greet"
    )]
    Remove(RemoveArgs),

    /// Open a stored template in an editor.
    #[command(
        about = "Edit a template in place",
        after_help = "EXAMPLES:\n\
            \x20 templar edit greet\n\
            \x20 EDITOR=nano templar edit greet"
    )]
    Edit(EditArgs),

    /// List stored templates.
    #[command(
        visible_alias = "ls",
        about = "List templates",
        after_help = "EXAMPLES:\n\
            \x20 templar list\n\
            \x20 templar list --format json"
    )]
    List(ListArgs),

    /// Repair the registry after an interrupted write.
    #[command(
        about = "Check and repair the template registry",
        after_help = "EXAMPLES:\n\
            \x20 templar doctor"
    )]
    Doctor,

    /// Initialise a Templar configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 templar init           # default location\n\
            \x20 templar init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 templar completions bash > ~/.local/share/bash-completion/completions/templar\n\
            \x20 templar completions zsh  > ~/.zfunc/_templar\n\
            \x20 templar completions fish > ~/.config/fish/completions/templar.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Templar configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 templar config get storage.data_dir\n\
            \x20 templar config list\n\
            \x20 templar config path"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `templar create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Template name; prompted for when omitted.
    #[arg(value_name = "NAME", help = "Template name")]
    pub name: Option<String>,

    /// File to copy.  Falls back to the active file when missing.
    #[arg(
        short = 'f',
        long = "from",
        value_name = "PATH",
        help = "Source file (default: the active file)"
    )]
    pub from: Option<PathBuf>,
}

// ── load ──────────────────────────────────────────────────────────────────────

/// Arguments for `templar load`.
#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Template name; picked from a list when omitted.
    #[arg(value_name = "NAME", help = "Template name")]
    pub name: Option<String>,

    /// File to write the template into.
    #[arg(
        short = 'i',
        long = "into",
        value_name = "PATH",
        help = "Target file (default: the active file)"
    )]
    pub into: Option<PathBuf>,

    /// Answer yes to every confirmation.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Overwrite without asking"
    )]
    pub yes: bool,
}

// ── remove ────────────────────────────────────────────────────────────────────

/// Arguments for `templar remove`.
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Template name; picked from a list when omitted.
    #[arg(value_name = "NAME", help = "Template name")]
    pub name: Option<String>,
}

// ── edit ──────────────────────────────────────────────────────────────────────

/// Arguments for `templar edit`.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Template name; picked from a list when omitted.
    #[arg(value_name = "NAME", help = "Template name")]
    pub name: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `templar list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `templar init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `templar completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `templar config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `storage.data_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
