use std::io::stdout;

use anyhow::Result;
use clap::{crate_version, value_parser, Arg, Command};
use clap_complete::{generate, Shell};

pub mod io;

pub mod progress;

mod subcommands;

pub mod traits;
use traits::InclusivoApp;

fn main() -> Result<()> {
    // Known subapplications.
    let apps = vec![
        subcommands::AnnotateApp::app(),
        subcommands::RewriteApp::app(),
    ];

    env_logger::init();

    let cli = Command::new("inclusivo")
        .about("Gender-inclusive rewriting of Italian sentences")
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommands(apps)
        .subcommand(
            Command::new("completions")
                .about("Generate completion scripts for your shell")
                .arg_required_else_help(true)
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(value_parser!(Shell)),
                ),
        );
    let matches = cli.clone().get_matches();

    match matches.subcommand() {
        Some(("annotate", matches)) => subcommands::AnnotateApp::parse(matches)?.run(),
        Some(("completions", matches)) => {
            let shell = *matches.get_one::<Shell>("shell").unwrap();
            write_completion_script(cli, shell);
            Ok(())
        }
        Some(("rewrite", matches)) => subcommands::RewriteApp::parse(matches)?.run(),
        _unknown => unreachable!(),
    }
}

fn write_completion_script(mut cli: Command, shell: Shell) {
    generate(shell, &mut cli, "inclusivo", &mut stdout());
}
