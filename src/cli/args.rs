use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "quickentry")]
#[command(about = "Parse quick-entry task lines into structured task fields")]
#[command(long_about = "quickentry - quick-entry task parser

Turns a single line of text into a task title plus context, project,
when date and deadline. Contexts and projects are matched by name against
the catalogs in ~/.quickentry/config.yaml.

QUICK START:
  quickentry parse \"Call Bob #Work do:tomorrow\"     Parse a task line
  quickentry date \"mar 15\"                          Resolve a date token
  quickentry match wo --kind context                 Fuzzy-match a context

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config setting, or 'pretty'.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file
    #[arg(long, global = true, env = "QUICKENTRY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a quick-entry task line
    ///
    /// Extracts inline tokens and resolves them against the configured
    /// contexts and projects and the reference date.
    ///
    /// # Examples
    ///
    ///   quickentry parse "Task #Work +Cortex do:tomorrow due:friday"
    ///   quickentry parse "Dentist do:mar 15 #Personal"
    ///   quickentry parse "Review PR due:3d" --now 2026-02-20
    ///
    /// # Supported Tokens
    ///
    ///   Context:    #name      (fuzzy: exact, prefix, then substring)
    ///   Project:    +name
    ///   When:       do:date
    ///   Deadline:   due:date
    ///
    /// Tokens count only at the start of the line or after whitespace,
    /// so "C#Work" stays in the title.
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Resolve a single date expression
    ///
    /// # Supported Dates
    ///
    ///   Keywords:   today, tomorrow, tom
    ///   Weekdays:   monday..sunday, mon..sun (always the next one, never today)
    ///   Month/day:  mar15, mar 15, march 15 (rolls to next year once passed)
    ///   Exact:      2026-03-15, 2026/03/15
    ///   Offsets:    3d, 3days, 2w, 2weeks
    #[command(alias = "d")]
    Date(DateArgs),

    /// Fuzzy-match a name against configured contexts or projects
    ///
    /// Exits with an error when nothing matches, in every output format.
    #[command(alias = "m")]
    Match(MatchArgs),

    /// List configured contexts and projects in match order
    Entities,

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   quickentry completions zsh > ~/.zsh/completions/_quickentry
    ///   source <(quickentry completions bash)
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct ParseArgs {
    /// The task line to parse
    pub text: String,

    /// Reference time (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS); defaults to now
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args)]
pub struct DateArgs {
    /// The date expression to resolve
    pub token: String,

    /// Reference time (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS); defaults to now
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Args)]
pub struct MatchArgs {
    /// The name fragment to match
    pub token: String,

    /// Which catalog to match against
    #[arg(short, long, value_enum, default_value = "context")]
    pub kind: EntityKind,
}

/// Catalog selector for `match`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Context,
    Project,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Context => "context",
            Self::Project => "project",
        })
    }
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
    fn test_parse_command_args() {
        let cli = Cli::try_parse_from(["quickentry", "parse", "Task #Work", "--now", "2026-02-20"])
            .unwrap();
        match cli.command {
            Commands::Parse(args) => {
                assert_eq!(args.text, "Task #Work");
                assert_eq!(args.now.as_deref(), Some("2026-02-20"));
            },
            _ => panic!("expected parse command"),
        }
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_global_output_flag() {
        let cli = Cli::try_parse_from(["quickentry", "date", "tom", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_match_kind_default() {
        let cli = Cli::try_parse_from(["quickentry", "match", "wo"]).unwrap();
        match cli.command {
            Commands::Match(args) => assert_eq!(args.kind, EntityKind::Context),
            _ => panic!("expected match command"),
        }
    }
}
