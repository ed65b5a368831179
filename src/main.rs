use anyhow::Result;
use clap::Parser;
use ghrepos::commands::config::{Layout, Options};
use ghrepos::commands::generate;
use std::path::PathBuf;

/// ghrepos - starred and forked GitHub repositories as markdown
///
/// Lists the repositories a user has starred and forked, looks up their star
/// counts and last push times, and writes them, most recently pushed first,
/// as a markdown table.
///
/// The GITHUB_TOKEN environment variable must hold a token; it authenticates
/// every request.
///
/// Examples:
///   ghrepos --user octocat            # Write repos.md
///   ghrepos --user octocat --split    # Write starred.md and forked.md
#[derive(Parser, Debug)]
#[command(author, version = env!("GHREPOS_VERSION"), about)]
struct Cli {
    /// GitHub account whose starred and forked repositories are listed
    #[arg(long, short = 'u', env = "GITHUB_USER", value_name = "USER")]
    pub user: String,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", env = "GITHUB_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Combined report path
    #[arg(
        long,
        short = 'o',
        value_name = "PATH",
        default_value = "repos.md",
        conflicts_with = "split"
    )]
    pub output: PathBuf,

    /// Write starred and forked repositories to separate reports
    #[arg(long)]
    pub split: bool,

    /// Starred report path when splitting
    #[arg(long, value_name = "PATH", default_value = "starred.md", requires = "split")]
    pub starred_output: PathBuf,

    /// Forked report path when splitting
    #[arg(long, value_name = "PATH", default_value = "forked.md", requires = "split")]
    pub forked_output: PathBuf,
}

impl Cli {
    fn into_options(self) -> Options {
        let layout = if self.split {
            Layout::Split {
                starred: self.starred_output,
                forked: self.forked_output,
            }
        } else {
            Layout::Combined {
                output: self.output,
            }
        };

        Options {
            user: self.user,
            api_url: self.api_url,
            layout,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = ghrepos::runtime::RealRuntime;

    generate(runtime, cli.into_options()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults_to_combined_report() {
        let cli = Cli::try_parse_from(["ghrepos", "--user", "octocat"]).unwrap();
        assert_eq!(cli.api_url, None);

        let options = cli.into_options();
        assert_eq!(options.user, "octocat");
        assert_eq!(
            options.layout,
            Layout::Combined {
                output: PathBuf::from("repos.md")
            }
        );
    }

    #[test]
    fn test_cli_output_parsing() {
        let cli = Cli::try_parse_from(["ghrepos", "-u", "octocat", "-o", "/tmp/all.md"]).unwrap();
        assert_eq!(
            cli.into_options().layout,
            Layout::Combined {
                output: PathBuf::from("/tmp/all.md")
            }
        );
    }

    #[test]
    fn test_cli_split_parsing() {
        let cli = Cli::try_parse_from([
            "ghrepos",
            "-u",
            "octocat",
            "--split",
            "--forked-output",
            "forks.md",
        ])
        .unwrap();
        assert_eq!(
            cli.into_options().layout,
            Layout::Split {
                starred: PathBuf::from("starred.md"),
                forked: PathBuf::from("forks.md"),
            }
        );
    }

    #[test]
    fn test_cli_api_url_parsing() {
        let cli = Cli::try_parse_from([
            "ghrepos",
            "-u",
            "octocat",
            "--api-url",
            "https://ghe.example.com/api/v3",
        ])
        .unwrap();
        assert_eq!(
            cli.api_url,
            Some("https://ghe.example.com/api/v3".to_string())
        );
    }

    #[test]
    fn test_cli_split_paths_require_split() {
        let result = Cli::try_parse_from(["ghrepos", "-u", "octocat", "--starred-output", "s.md"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_output_conflicts_with_split() {
        let result = Cli::try_parse_from(["ghrepos", "-u", "octocat", "-o", "a.md", "--split"]);
        assert!(result.is_err());
    }
}
