//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "bgen",
    bin_name = "bgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Generate behavior modules and register their types",
    long_about = "Bgen renders a new behavior source file from a template and \
                  splices the matching entry and import into the project's \
                  behaviorTypes.ts registry.",
    after_help = "EXAMPLES:\n\
        \x20 bgen new                           # interactive prompts\n\
        \x20 bgen new --name my-toggle --yes    # accept all derived defaults\n\
        \x20 bgen config set paths.behavior_folder src_ts/behaviors\n\
        \x20 bgen completions bash > /usr/share/bash-completion/completions/bgen",
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
    /// Generate a new behavior module.
    #[command(
        visible_alias = "n",
        about = "Generate a new behavior module",
        after_help = "EXAMPLES:\n\
            \x20 bgen new\n\
            \x20 bgen new --name my-toggle --yes\n\
            \x20 bgen new --name slider -b src_ts/build_element --path src_ts/behaviors --yes"
    )]
    New(NewArgs),

    /// Manage the Bgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 bgen config get paths.build_element_folder\n\
            \x20 bgen config set paths.behavior_folder src_ts/behaviors\n\
            \x20 bgen config list"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 bgen completions bash > ~/.local/share/bash-completion/completions/bgen\n\
            \x20 bgen completions zsh  > ~/.zfunc/_bgen\n\
            \x20 bgen completions fish > ~/.config/fish/completions/bgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `bgen new`.
///
/// Everything is optional: omitted values come from the interactive prompt
/// sequence (or from persisted/derived defaults with `--yes`).
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Behavior name (skips the name prompt).
    #[arg(
        long = "name",
        value_name = "NAME",
        help = "Name of the new behavior (ex: my-toggle)"
    )]
    pub name: Option<String>,

    /// Location of the build_element folder.
    #[arg(
        short = 'b',
        long = "build-element-folder",
        value_name = "DIR",
        help = "Location of the build_element folder (persisted)"
    )]
    pub build_element_folder: Option<String>,

    /// Location of the defaultTypes.d.ts file.
    #[arg(
        short = 'd',
        long = "default-types-file",
        value_name = "FILE",
        help = "Location of the defaultTypes.d.ts file (persisted)"
    )]
    pub default_types_file: Option<String>,

    /// Folder the behavior file is written into.
    #[arg(
        long = "path",
        value_name = "DIR",
        help = "Output folder for the behavior file (persisted)"
    )]
    pub behavior_folder: Option<String>,

    /// Accept all derived and persisted defaults without prompting.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip prompts and accept derived defaults"
    )]
    pub yes: bool,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `bgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.behavior_folder`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `bgen completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────
