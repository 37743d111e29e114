//! A command line interface to read, check and convert *Vehicle Routing Problem* documents.
//!

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod cli {
    use super::commands::check::{get_check_app, run_check};
    use super::commands::convert::{get_convert_app, run_convert};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Vehicle Routing Problem Document Tool")
            .version("0.1.0")
            .author("Ilya Builuk <ilya.builuk@gmail.com>")
            .about("A command line interface to read, check and convert Vehicle Routing Problem documents")
            .subcommand(get_check_app())
            .subcommand(get_convert_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("check", check_matches)) => run_check(check_matches),
            Some(("convert", convert_matches)) => run_convert(convert_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let matches = cli::get_app().get_matches();
    cli::run_subcommand(matches);
}
