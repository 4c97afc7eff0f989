//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tokhook - OpenTok Cordova plugin build hooks
#[derive(Parser, Debug)]
#[command(
    name = "tokhook",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build lifecycle hooks for the OpenTok Cordova plugin",
    long_about = "tokhook runs the OpenTok Cordova plugin's build-time hooks: rewriting the \
                  generated Android sources to the consuming app's bundle identifier, and \
                  installing the native iOS SDK frameworks into the plugin source tree.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  tokhook fix-imports\n    \
                  tokhook fix-imports --project-root ./app --strict\n    \
                  tokhook fetch-sdk --plugin-dir ./plugins/cordova-plugin-opentok\n    \
                  tokhook fetch-sdk --archive ./OpenTok-iOS-2.26.0.tar.bz2\n"
)]
pub struct Cli {
    /// Cordova project root (defaults to current directory)
    #[arg(long, short = 'p', global = true)]
    pub project_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite generated Android resource imports to the app's bundle id
    FixImports(FixImportsArgs),

    /// Download and install the iOS SDK frameworks
    FetchSdk(FetchSdkArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the fix-imports command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Rewrite imports in the current project:\n    tokhook fix-imports\n\n\
                  Rewrite imports for another project:\n    tokhook fix-imports -p ./app\n\n\
                  Fail instead of skipping missing files:\n    tokhook fix-imports --strict")]
pub struct FixImportsArgs {
    /// Fail on missing manifest or source files instead of skipping them
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the fetch-sdk command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install into the plugin in the current directory:\n    tokhook fetch-sdk\n\n\
                  Install into another plugin checkout:\n    tokhook fetch-sdk --plugin-dir ./plugins/cordova-plugin-opentok\n\n\
                  Install a different SDK version:\n    tokhook fetch-sdk --sdk-version OpenTok-iOS-2.27.0\n\n\
                  Install from a pre-downloaded archive (offline):\n    tokhook fetch-sdk --archive ./OpenTok-iOS-2.26.0.tar.bz2\n\n\
                  Keep the downloaded archive around:\n    tokhook fetch-sdk --keep-archive")]
pub struct FetchSdkArgs {
    /// Plugin directory whose src/ios/ receives the frameworks (defaults
    /// to current directory)
    #[arg(long)]
    pub plugin_dir: Option<PathBuf>,

    /// Override the versioned archive stem, e.g. OpenTok-iOS-2.27.0
    #[arg(long, env = "TOKHOOK_SDK_VERSION")]
    pub sdk_version: Option<String>,

    /// Install from an already-downloaded archive instead of fetching
    #[arg(long, value_name = "FILE")]
    pub archive: Option<PathBuf>,

    /// Do not delete the downloaded archive after installation
    #[arg(long)]
    pub keep_archive: bool,

    /// Fail on the first problem instead of warning and continuing
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    tokhook completions --shell bash > ~/.bash_completion.d/tokhook\n\n\
                  Generate zsh completions:\n    tokhook completions --shell zsh > ~/.zfunc/_tokhook\n\n\
                  Generate fish completions:\n    tokhook completions --shell fish > ~/.config/fish/completions/tokhook.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
