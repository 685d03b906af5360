//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Sprout - scaffold a new project from a template repository
#[derive(Parser, Debug)]
#[command(name = "sprout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (default: ~/.sprout/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Defaults to `new` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project from the template
    New(NewArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// New command
#[derive(Args, Debug, Default)]
pub struct NewArgs {
    /// Project name (prompted for when omitted)
    pub name: Option<String>,

    /// Template repository to clone
    #[arg(short, long)]
    pub template: Option<String>,

    /// Package manager used to install dependencies (pnpm, npm, yarn, ...)
    #[arg(short, long)]
    pub package_manager: Option<String>,

    /// Accept the default project name without prompting
    #[arg(short, long)]
    pub yes: bool,
}

// Config commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show resolved configuration
    Show(ConfigShowArgs),
}

#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["sprout"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_new_with_name_and_overrides() {
        let cli = Cli::try_parse_from([
            "sprout",
            "-vv",
            "new",
            "demo",
            "--package-manager",
            "npm",
            "--yes",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::New(args)) => {
                assert_eq!(args.name.as_deref(), Some("demo"));
                assert_eq!(args.package_manager.as_deref(), Some("npm"));
                assert!(args.yes);
            }
            other => panic!("expected new command, got {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["sprout", "config", "show", "--json", "-c", "/tmp/s.yaml"])
                .unwrap();

        assert_eq!(cli.config, Some(Utf8PathBuf::from("/tmp/s.yaml")));
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommands::Show(ConfigShowArgs { json: true })))
        ));
    }
}
