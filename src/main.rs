#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

use clap::Parser;
use serde::Serialize;

use tableau_lib::{
    context::Context,
    reports::{BranchReport, Report},
    types::err::{self},
};

mod cli;

use cli::args::Args;

/// Exit status on a formula which could not be read.
const INPUT_FAILURE: i32 = 1;

/// Exit status on an internal fault.
const INTERNAL_FAULT: i32 = 2;

#[derive(Serialize)]
struct JsonReport<'r> {
    source: &'r str,
    formula: String,
    report: &'r Report,
    rounds: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    agrees_with_truth_table: Option<bool>,
    branches: &'r [BranchReport],
}

fn main() {
    let args = Args::parse();

    #[cfg(feature = "log")]
    cli::logging::init(args.verbosity);

    let inputs = match cli::inputs(&args) {
        Ok(inputs) => inputs,
        Err(e) => {
            println!("c Error reading formulas: {e}");
            std::process::exit(INPUT_FAILURE);
        }
    };

    if inputs.is_empty() {
        println!("c No formulas given, see --help");
        std::process::exit(INPUT_FAILURE);
    }

    let mut the_context = Context::from_config(args.config());
    let mut status = 0;
    let colour = cli::display::colour_stdout();

    for (source, formula) in inputs {
        let formula = match formula {
            Ok(formula) => formula,
            Err(e) => {
                println!("c Error reading {source}: {e}");
                status = status.max(INPUT_FAILURE);
                continue;
            }
        };

        let checked = match args.cross_check {
            false => the_context
                .check_tautology(formula.clone())
                .map(|_| None)
                .map_err(err::ErrorKind::from),

            true => match the_context.cross_check(&formula) {
                Ok(agrees) => Ok(Some(agrees)),
                Err(err::ErrorKind::TruthTable(e)) => {
                    println!("c Cross-check of {source} skipped: {e}");
                    Ok(None)
                }
                Err(e) => Err(e),
            },
        };

        let agreement = match checked {
            Ok(agreement) => agreement,
            Err(e) => {
                println!("c Error checking {source}: {e}");
                status = status.max(INTERNAL_FAULT);
                continue;
            }
        };

        let Some(report) = the_context.report().cloned() else {
            println!("c No report for {source}");
            status = status.max(INTERNAL_FAULT);
            continue;
        };

        if agreement == Some(false) {
            println!("c The truth table method disagrees on {source}");
            status = status.max(INTERNAL_FAULT);
        }

        if args.json {
            let json_report = JsonReport {
                source: &source,
                formula: formula.to_string(),
                report: &report,
                rounds: the_context.rounds(),
                agrees_with_truth_table: agreement,
                branches: the_context.branches(),
            };
            match serde_json::to_string(&json_report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    println!("c Error writing JSON for {source}: {e}");
                    status = status.max(INTERNAL_FAULT);
                }
            }
            continue;
        }

        println!("c {source}: {formula}");

        if args.tree {
            if let Some(tree) = the_context.tree() {
                for line in cli::display::tree_outline(tree, colour) {
                    println!("{line}");
                }
            }
        }

        if args.branches {
            for line in cli::display::branch_lines(the_context.branches(), colour) {
                println!("{line}");
            }
        }

        match report.countermodel() {
            None => println!("s TAUTOLOGY"),
            Some(countermodel) => {
                println!("s NOT A TAUTOLOGY");
                println!("v {countermodel}");
            }
        }
    }

    if let Some(path) = &args.dot {
        match the_context.tree() {
            Some(tree) => {
                if let Err(e) = std::fs::write(path, tree.dot()) {
                    println!("c Error writing {}: {e}", path.display());
                    status = status.max(INPUT_FAILURE);
                }
            }
            None => println!("c No derivation tree to write"),
        }
    }

    std::process::exit(status)
}
