pub mod args;
pub mod display;
#[cfg(feature = "log")]
pub mod logging;

use tableau_lib::{parser, structures::formula::Formula, types::err};

/// A formula read from the command line or a file, paired with a description of where it was read from.
pub type Input = (String, Result<Formula, err::ParseError>);

/// Each formula given to the binary, in order, with formulas given as arguments before formulas in a file.
pub fn inputs(args: &args::Args) -> Result<Vec<Input>, std::io::Error> {
    let mut inputs = args
        .formulas
        .iter()
        .enumerate()
        .map(|(index, text)| (format!("argument {}", index + 1), parser::parse(text)))
        .collect::<Vec<_>>();

    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)?;
        for (line, formula) in parser::parse_lines(&text) {
            inputs.push((format!("{}:{line}", path.display()), formula));
        }
    }

    Ok(inputs)
}
