use std::path::PathBuf;

use clap::Parser;

use tableau_lib::config::{Config, RoundLimit};

/// Determines whether propositional formulas are tautologies, by the analytic tableau method.
///
/// Formulas are written with variables p to z (optionally numbered, e.g. q12), the prefix ~, and the parenthesized connectives 'and', 'or', '=>', and '<=>'.
/// For example: '((p and (p => q)) => q)'.
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
pub struct Args {
    /// Formulas to check.
    pub formulas: Vec<String>,

    /// A file of formulas to check, one per line.
    /// Blank lines and lines beginning with '#' are skipped.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Display the derivation tree of each check, with each leaf marked closed or open.
    #[arg(short, long)]
    pub tree: bool,

    /// Display each branch of each check, and whether the branch is closed.
    #[arg(short, long)]
    pub branches: bool,

    /// Write the derivation tree of the last formula checked to the given path, in Graphviz DOT form.
    #[arg(long)]
    pub dot: Option<PathBuf>,

    /// Also check each formula with the truth table method, and note any disagreement.
    #[arg(long)]
    pub cross_check: bool,

    /// Display each report as JSON.
    #[arg(long)]
    pub json: bool,

    /// A fixed limit on growth rounds.
    /// By default the limit is one more than the connective count of the formula checked.
    #[arg(long)]
    pub round_limit: Option<usize>,

    /// The most distinct variables the truth table method will enumerate.
    #[arg(long, default_value_t = tableau_lib::config::defaults::TRUTH_TABLE_VARIABLE_LIMIT)]
    pub variable_limit: usize,

    /// The level of logs to display, when built with the 'log' feature.
    #[arg(long, default_value_t = log::LevelFilter::Warn)]
    pub verbosity: log::LevelFilter,
}

impl Args {
    pub fn config(&self) -> Config {
        let mut config = Config::default();

        if let Some(limit) = self.round_limit {
            config.round_limit = RoundLimit::Fixed(limit);
        }
        config.truth_table_variable_limit = self.variable_limit;
        config.record_branches = self.branches || self.json;

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        let args = Args::parse_from([
            "tautology_tableau",
            "--round-limit",
            "3",
            "--branches",
            "--cross-check",
            "(p or ~p)",
            "p",
        ]);
        assert_eq!(args.formulas, vec!["(p or ~p)".to_string(), "p".to_string()]);
        assert!(args.cross_check);
        assert!(!args.json);

        let config = args.config();
        assert_eq!(config.round_limit, RoundLimit::Fixed(3));
        assert!(config.record_branches);
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["tautology_tableau", "p"]);
        let config = args.config();
        assert_eq!(config.round_limit, RoundLimit::Derived);
        assert!(!config.record_branches);
        assert_eq!(args.verbosity, log::LevelFilter::Warn);
    }

    #[test]
    fn verbosity() {
        let args = Args::parse_from(["tautology_tableau", "--verbosity", "debug", "p"]);
        assert_eq!(args.verbosity, log::LevelFilter::Debug);

        let args = Args::parse_from(["tautology_tableau", "--verbosity", "OFF", "p"]);
        assert_eq!(args.verbosity, log::LevelFilter::Off);

        assert!(Args::try_parse_from(["tautology_tableau", "--verbosity", "loud", "p"]).is_err());
    }
}
