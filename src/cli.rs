//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

use crate::operations::update::DEFAULT_LIMIT;

/// tmbundle - TextMate bundle manager
///
/// List, edit, install and update the bundles installed for TextMate.
#[derive(Parser, Debug)]
#[command(
    name = "tmbundle",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Manage installed TextMate bundles",
    long_about = "tmbundle manages the bundles installed under \
                  ~/Library/Application Support/Avian/Bundles: it installs them \
                  from GitHub, updates them with git and opens them in TextMate.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  tmbundle install textmate/ruby\n    \
                  tmbundle edit rub\n    \
                  tmbundle update\n    \
                  tmbundle list"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Edit an installed bundle (name will be matched against PARTIAL_NAME)
    Edit(EditArgs),

    /// Update installed bundles
    Update(UpdateArgs),

    /// Install a bundle from GitHub
    Install(InstallArgs),

    /// List installed bundles
    List(ListArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the edit command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Open the Ruby bundle:\n    tmbundle edit rub\n\n\
                  Patterns are allowed:\n    tmbundle edit 'ru.y'")]
pub struct EditArgs {
    /// Start of the bundle name, case-insensitive
    pub partial_name: String,
}

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update bundles:\n    tmbundle update\n\n\
                  Update up to 20 bundles:\n    tmbundle update --limit 20")]
pub struct UpdateArgs {
    /// Maximum number of bundles to update
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install from GitHub:\n    tmbundle install textmate/ruby\n\n\
                  Suffix spellings are accepted:\n    tmbundle install someone/Foo-tmbundle")]
pub struct InstallArgs {
    /// GitHub repository (owner/name), with or without the tmbundle suffix
    pub name: String,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List installed bundles:\n    tmbundle list\n\n\
                  Show paths and git status:\n    tmbundle list --detailed")]
pub struct ListArgs {
    /// Show detailed output
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    tmbundle completions --shell bash > ~/.bash_completion.d/tmbundle\n\n\
                  Generate zsh completions:\n    tmbundle completions --shell zsh > ~/.zfunc/_tmbundle\n\n\
                  Generate fish completions:\n    tmbundle completions --shell fish > ~/.config/fish/completions/tmbundle.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
