// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
//   milist [--source <android|ios|web|code>] [--json|--text|--ts] [-v]
//
// The source is taken as a plain string on purpose: the resolver validates
// it (IconLister::list) so the "Invalid source" message is the same whether
// it comes from the CLI or from code.
// =============================================================================

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "milist",
    version,
    about = "Material Icons List (milist) - Generate a list of Material Icons",
    long_about = "Material Icons List (milist) - Generate a list of Material Icons.\n\n\
                  Icon names are read from the google/material-design-icons repository on GitHub. \
                  Set GITHUB_TOKEN to raise the API rate limit.",
    after_help = "Examples:\n  \
                  milist --source web\n  \
                  milist --source web --json\n  \
                  milist --source android --text\n  \
                  milist --ts > material-icons.ts\n\n\
                  Note: This tool requires an internet connection to fetch the latest icons."
)]
pub struct Cli {
    /// Source platform (android, ios, web, code) [default: code]
    #[arg(long, value_name = "SOURCE")]
    pub source: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Output in text format (default)
    #[arg(long)]
    pub text: bool,

    /// Output a TypeScript file with const array and type
    #[arg(long)]
    pub ts: bool,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Base URL of the GitHub REST API (for mirrors and GitHub Enterprise)
    #[arg(long, value_name = "URL", hide = true)]
    pub api_url: Option<String>,

    /// Base URL of the raw file host
    #[arg(long, value_name = "URL", hide = true)]
    pub raw_url: Option<String>,
}

impl Cli {
    /// Picks the output format from the flags.
    ///
    /// --ts wins over everything; --text wins over --json; text is the default.
    pub fn output_format(&self) -> OutputFormat {
        if self.ts {
            OutputFormat::TypeScript
        } else if self.json && !self.text {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("milist").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.source, None);
        assert_eq!(cli.output_format(), OutputFormat::Text);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_format_flags() {
        assert_eq!(parse(&["--json"]).output_format(), OutputFormat::Json);
        assert_eq!(parse(&["--text"]).output_format(), OutputFormat::Text);
        assert_eq!(parse(&["--json", "--text"]).output_format(), OutputFormat::Text);
        assert_eq!(parse(&["--ts", "--json"]).output_format(), OutputFormat::TypeScript);
    }

    #[test]
    fn test_source_is_passed_through() {
        let cli = parse(&["--source", "web", "--json"]);
        assert_eq!(cli.source.as_deref(), Some("web"));
    }

    #[test]
    fn test_unknown_option_is_an_error() {
        let err = Cli::try_parse_from(["milist", "--unknown"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_missing_source_value_is_an_error() {
        assert!(Cli::try_parse_from(["milist", "--source"]).is_err());
    }

    #[test]
    fn test_help_flags() {
        for flag in ["--help", "-h"] {
            let err = Cli::try_parse_from(["milist", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
            let help = err.to_string();
            assert!(help.contains("Material Icons List (milist)"));
            assert!(help.contains("--source"));
        }
    }

    #[test]
    fn test_long_help_mentions_every_format() {
        let err = Cli::try_parse_from(["milist", "--help"]).unwrap_err();
        let help = err.to_string();
        assert!(help.contains("--json"));
        assert!(help.contains("--text"));
        assert!(help.contains("--ts"));
        assert!(help.contains("TypeScript file with const array and type"));
        assert!(help.contains("milist --ts > material-icons.ts"));
    }
}
