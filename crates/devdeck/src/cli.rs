use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::app::LaunchOptions;

#[derive(Parser)]
#[command(name = "devdeck")]
#[command(author, version, about)]
#[command(long_about = "A Chrome DevTools talk, presented natively.\n\n\
    Runs the DevFest deck with keyboard navigation, live demos and a searchable Q&A page.\n\n\
    Examples:\n  \
    devdeck                      Launch presentation (fullscreen)\n  \
    devdeck --windowed --slide 8 Launch in a window on slide 8\n  \
    devdeck qa --search cache    Search the Q&A document in the terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Q&A markdown document (defaults to Q&A_Questions.md)
    #[arg(long, global = false)]
    pub qa: Option<PathBuf>,

    /// Ignore the remembered slide and start from the beginning
    #[arg(long, global = false)]
    pub fresh: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the slide outline
    Slides,

    /// Print the Q&A document as a tree
    Qa {
        /// Q&A markdown document (defaults to the configured path)
        file: Option<PathBuf>,

        /// Only show questions and answers containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Inspect or reset the remembered slide
    State {
        #[command(subcommand)]
        command: StateCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (defaults.theme, defaults.start_mode, qa.path)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Subcommand)]
pub enum StateCommands {
    /// Show the persisted state file and its entries
    Show,

    /// Forget the remembered slide
    Reset,
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    /// Launch flags only apply to the presenter, never to a subcommand.
    /// Global flags (`-v`, `-q`, `--no-color`) are fine anywhere.
    fn check_launch_flags(&self) -> anyhow::Result<()> {
        if self.command.is_none() {
            return Ok(());
        }
        let launch_flags = [
            ("--windowed", self.windowed),
            ("--slide", self.slide.is_some()),
            ("--qa", self.qa.is_some()),
            ("--fresh", self.fresh),
        ];
        if let Some((flag, _)) = launch_flags.iter().find(|(_, set)| *set) {
            anyhow::bail!("{flag} only applies when launching the presenter, not with a subcommand");
        }
        Ok(())
    }

    pub fn run(self) -> anyhow::Result<()> {
        self.check_launch_flags()?;
        match self.command {
            Some(Commands::Slides) => {
                crate::commands::slides::run();
                Ok(())
            }
            Some(Commands::Qa { file, search }) => {
                crate::commands::qa::run(file, search.as_deref())
            }
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::State { command }) => crate::commands::state::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::banner::print_banner_with_version();
                Ok(())
            }
            None => {
                if let Some(path) = self.qa.as_ref().filter(|p| !p.exists()) {
                    tracing::warn!(path = %path.display(), "Q&A file not found, the Q&A page will be empty");
                }
                crate::app::run(LaunchOptions {
                    windowed: self.windowed,
                    slide: self.slide,
                    qa_path: self.qa,
                    fresh: self.fresh,
                })
            }
        }
    }
}
