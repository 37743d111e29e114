#[cfg(test)]
#[path = "../../tests/unit/commands/convert_test.rs"]
mod convert_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::BufReader;
use vrp_cli::extensions::convert::convert_document;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const SOLUTIONS_ARG_NAME: &str = "solutions";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_convert_app() -> Command {
    Command::new("convert")
        .about("Reads a problem document and writes it back in the canonical shape")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem document file").required(true).index(1))
        .arg(
            Arg::new(SOLUTIONS_ARG_NAME)
                .help("Keeps previously computed solutions")
                .short('s')
                .long(SOLUTIONS_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_convert(matches: &ArgMatches) -> Result<(), String> {
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not set")?;
    let problem_file = BufReader::new(open_file(problem_path, "problem")?);

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    convert_document(problem_file, create_write_buffer(out_result), matches.get_flag(SOLUTIONS_ARG_NAME))
}
