//! CLI argument parsing and structure definitions

use std::path::PathBuf;

use clap::Parser;

use crate::agreement::MissingIdPolicy;

/// Inter-annotator agreement (Cohen's kappa) between two tweet corpora
#[derive(Parser, Debug)]
#[command(name = "concord")]
#[command(
    author,
    version,
    about = "Inter-annotator agreement (Cohen's kappa) between two tweet corpora",
    long_about = r#"
concord - compare two sentiment annotations of the same tweets

INPUT:
  One record per line: <id>,<label>[,...]
  Labels: pos, neu, neg, irr. Fields after the label are ignored.

OUTPUT:
  The 4x4 contingency matrix ([reference][comparison][count] cells),
  the number of identical labels / 100, and Cohen's kappa.

EXAMPLES:
  concord annotator_a.txt annotator_b.txt
  concord --on-missing skip annotator_a.txt annotator_b.txt
  concord -vv -c concord.toml annotator_a.txt annotator_b.txt
"#
)]
pub struct Cli {
    /// Reference corpus followed by comparison corpus
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// What to do with reference ids absent from the comparison corpus
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_missing: Option<MissingIdPolicy>,

    /// TOML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_files() {
        let cli = Cli::try_parse_from(["concord", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(cli.on_missing, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from([
            "concord",
            "--on-missing",
            "skip",
            "-vv",
            "-c",
            "c.toml",
            "a.txt",
            "b.txt",
        ])
        .unwrap();
        assert_eq!(cli.on_missing, Some(MissingIdPolicy::Skip));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn test_no_files_rejected() {
        assert!(Cli::try_parse_from(["concord"]).is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["concord", "-v", "-q", "a", "b"]).is_err());
    }
}
