#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::BufReader;
use vrp_cli::document::{ReaderConfig, read_config};
use vrp_cli::extensions::check::{check_document, serialize_summary};

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const CONFIG_ARG_NAME: &str = "config";
const SOLUTIONS_ARG_NAME: &str = "solutions";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Reads a problem document and reports a summary of its content or the first error found")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem document file").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to reader configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SOLUTIONS_ARG_NAME)
                .help("Reads previously computed solutions, overrides configuration")
                .short('s')
                .long(SOLUTIONS_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for summary output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))
            .map_err(|err| format!("cannot read config: '{err}'"))?,
        None => ReaderConfig::default(),
    };
    let config = if matches.get_flag(SOLUTIONS_ARG_NAME) { config.with_solutions(true) } else { config };

    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not set")?;
    let problem_file = BufReader::new(open_file(problem_path, "problem")?);

    let summary = check_document(problem_file, config)
        .map_err(|err| format!("cannot read problem document ({:?}): '{err}'", err.kind()))?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    serialize_summary(create_write_buffer(out_result), &summary).map_err(|err| format!("cannot write summary: '{err}'"))
}
